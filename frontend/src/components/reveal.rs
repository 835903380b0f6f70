use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the block that has to be on screen before it reveals.
    pub threshold: f64,
    /// CSS margin grown around the viewport, so blocks trigger slightly early.
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN.to_string(),
        }
    }
}

/// One-way visibility flag for a single animated block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Feeds one observer notification in. Returns true only for the
    /// notification that flips the block to visible; leaving the viewport is ignored.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting && !self.visible {
            self.visible = true;
            return true;
        }
        false
    }
}

/// Owns a browser IntersectionObserver watching one element.
/// Disconnects on drop, whether or not the element ever revealed.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe(
        target: &Element,
        options: &RevealOptions,
        mut on_reveal: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let mut state = RevealState::default();

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if state.is_visible() {
                    break;
                }
                state.on_intersection(entry.is_intersecting());
                if state.is_visible() {
                    // Nothing left to watch for once revealed
                    observer.unobserve(&entry.target());
                    on_reveal();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Attach the returned ref to a block; the flag turns true the first time the block scrolls into view.
#[hook]
pub fn use_reveal(options: RevealOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |options: &RevealOptions| {
                // An unattached ref means no observer and a block that stays hidden
                let observer = node.cast::<Element>().and_then(|target| {
                    match RevealObserver::observe(&target, options, move || visible.set(true)) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            gloo_console::error!("Could not observe section:", err);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            options,
        );
    }

    (node, *visible)
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Extra transition delay in milliseconds, used to stagger siblings.
    #[prop_or_default]
    pub delay: u32,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let (node, visible) = use_reveal(RevealOptions::default());

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then(|| "visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!RevealState::default().is_visible());
    }

    #[test]
    fn first_intersection_reveals_once() {
        let mut state = RevealState::default();
        assert!(!state.on_intersection(false));
        assert!(state.on_intersection(true));
        assert!(!state.on_intersection(true));
        assert!(state.is_visible());
    }

    #[test]
    fn leaving_the_viewport_never_hides_again() {
        let mut state = RevealState::default();
        let events = [false, true, false, false, true, false];
        let mut seen_visible = false;
        for is_intersecting in events {
            state.on_intersection(is_intersecting);
            if seen_visible {
                assert!(state.is_visible());
            }
            seen_visible |= state.is_visible();
        }
        assert!(state.is_visible());
    }

    #[test]
    fn default_options_trigger_early_at_ten_percent() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "50px");
    }
}
