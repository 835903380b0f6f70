use std::rc::Rc;

use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::lead::models::{FormField, FormState, FAULT_OPTIONS, INJURY_OPTIONS, JURISDICTIONS};
use crate::lead::submission::{submit, SubmitError};
use crate::lead::validation::FieldError;

pub enum FormAction {
    /// Input event from the element whose `name` attribute is `name`.
    Input { name: String, value: String },
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Input { name, value } => Rc::new(self.update_field(&name, value)),
        }
    }
}

struct ChoiceSelect<'a> {
    field: FormField,
    placeholder: &'static str,
    options: &'static [&'static str],
    current: &'a str,
    required: bool,
    invalid: bool,
}

fn choice_select(select: ChoiceSelect<'_>, onchange: Callback<Event>) -> Html {
    html! {
        <select
            name={select.field.name()}
            required={select.required}
            class={classes!("form-input", select.invalid.then(|| "invalid"))}
            {onchange}
        >
            <option value="" selected={select.current.is_empty()}>{ select.placeholder }</option>
            { for select.options.iter().map(|option| html! {
                <option key={*option} value={*option} selected={select.current == *option}>{ *option }</option>
            }) }
        </select>
    }
}

#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let form = use_reducer(FormState::default);
    let errors = use_state(Vec::<FieldError>::new);

    let on_input = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Input { name: input.name(), value: input.value() });
        })
    };

    let on_select = {
        let form = form.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Input { name: select.name(), value: select.value() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match submit(&form) {
                Ok(submission) => {
                    errors.set(Vec::new());
                    if let Some(window) = window() {
                        if let Err(err) = window.alert_with_message(submission.acknowledgment) {
                            gloo_console::error!("Could not show acknowledgment:", err);
                        }
                    }
                }
                Err(SubmitError::Invalid(field_errors)) => {
                    log::debug!("Form rejected with {} error(s)", field_errors.len());
                    errors.set(field_errors);
                }
                Err(err) => log::error!("Form submission failed: {}", err),
            }
        })
    };

    let invalid = |field: FormField| errors.iter().any(|e| e.field() == field);
    let input_class = |field: FormField| classes!("form-input", invalid(field).then(|| "invalid"));

    html! {
        <div class="lead-form-card">
            <h3>{"Quick Eligibility Check"}</h3>
            {
                if errors.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="form-errors" role="alert">
                            { for errors.iter().map(|e| html! { <li>{ e.to_string() }</li> }) }
                        </ul>
                    }
                }
            }
            <form class="lead-form" onsubmit={onsubmit}>
                <div class="form-grid">
                    <input
                        type="text"
                        name={FormField::Name.name()}
                        placeholder="Full Name"
                        value={form.name.clone()}
                        class={input_class(FormField::Name)}
                        oninput={on_input.clone()}
                        required=true
                    />
                    <input
                        type="email"
                        name={FormField::Email.name()}
                        placeholder="Email Address"
                        value={form.email.clone()}
                        class={input_class(FormField::Email)}
                        oninput={on_input.clone()}
                        required=true
                    />
                    <input
                        type="tel"
                        name={FormField::Phone.name()}
                        placeholder="Phone Number"
                        value={form.phone.clone()}
                        class={input_class(FormField::Phone)}
                        oninput={on_input.clone()}
                        required=true
                    />
                    { choice_select(ChoiceSelect {
                        field: FormField::State,
                        placeholder: "Select State",
                        options: &JURISDICTIONS,
                        current: &form.state,
                        required: true,
                        invalid: invalid(FormField::State),
                    }, on_select.clone()) }
                </div>
                <input
                    type="date"
                    name={FormField::AccidentDate.name()}
                    placeholder="Accident Date"
                    value={form.accident_date.clone()}
                    class={input_class(FormField::AccidentDate)}
                    oninput={on_input}
                    required=true
                />
                <div class="form-grid">
                    { choice_select(ChoiceSelect {
                        field: FormField::Injuries,
                        placeholder: "Were you injured? (optional)",
                        options: &INJURY_OPTIONS,
                        current: &form.injuries,
                        required: false,
                        invalid: invalid(FormField::Injuries),
                    }, on_select.clone()) }
                    { choice_select(ChoiceSelect {
                        field: FormField::AtFault,
                        placeholder: "Were you at fault? (optional)",
                        options: &FAULT_OPTIONS,
                        current: &form.at_fault,
                        required: false,
                        invalid: invalid(FormField::AtFault),
                    }, on_select) }
                </div>
                <button type="submit" class="submit-button">
                    {"Get My Free Case Evaluation"}
                </button>
            </form>
            <p class="form-note">
                <strong>{"Takes 60 seconds • No obligation"}</strong>
                <br />
                {"We respect your privacy and will never share your information."}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, value: &str) -> FormAction {
        FormAction::Input { name: name.to_string(), value: value.to_string() }
    }

    #[test]
    fn reducer_applies_updates_in_order() {
        let state = Rc::new(FormState::default())
            .reduce(input("name", "Jane"))
            .reduce(input("state", "Texas"))
            .reduce(input("name", "Jane Doe"));

        assert_eq!(state.name, "Jane Doe");
        assert_eq!(state.state, "Texas");
        assert!(state.email.is_empty());
    }

    #[test]
    fn reducer_ignores_unknown_inputs() {
        let state = Rc::new(FormState::default()).reduce(input("chat-message", "hello"));
        assert_eq!(*state, FormState::default());
    }
}
