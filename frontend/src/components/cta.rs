use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// Handle on the lead form section, owned by the page and shared through context
/// so call-to-action buttons never have to look the form up by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollTarget {
    node: NodeRef,
}

impl ScrollTarget {
    pub fn node(&self) -> NodeRef {
        self.node.clone()
    }

    /// Smooth-scrolls the target into view. Returns false, doing nothing,
    /// when the section has not been mounted.
    pub fn scroll_to(&self) -> bool {
        let Some(element) = self.node.cast::<Element>() else {
            log::debug!("Form section is not mounted, skipping scroll");
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Button that jumps to the eligibility form.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let target = use_context::<ScrollTarget>();

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(target) = &target {
            target.scroll_to();
        }
    });

    html! {
        <button type="button" class={classes!("cta-button", props.class.clone())} {onclick}>
            <span>{ props.label.clone() }</span>
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_to_an_unmounted_section_is_a_no_op() {
        let target = ScrollTarget::default();
        assert!(!target.scroll_to());
        assert!(!target.scroll_to());
    }

    #[test]
    fn clones_share_the_same_section() {
        let target = ScrollTarget::default();
        assert_eq!(target.clone(), target);
        assert_eq!(target.node(), target.node());
    }
}
