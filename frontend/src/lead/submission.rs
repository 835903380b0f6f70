use thiserror::Error;

use super::models::FormState;
use super::validation::{validate, FieldError};
use crate::config;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("could not encode form payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// An accepted lead: the JSON that was logged and the message shown to the visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub payload: serde_json::Value,
    pub acknowledgment: &'static str,
}

/// Validates the current form and, if it passes, logs the payload exactly as typed.
///
/// The state is borrowed and never cleared; the caller keeps showing what was submitted.
/// This is where an intake request would go once one exists.
pub fn submit(state: &FormState) -> Result<Submission, SubmitError> {
    validate(state).map_err(SubmitError::Invalid)?;

    let payload = serde_json::to_value(state)?;
    log::info!("Form submitted: {}", payload);

    Ok(Submission {
        payload,
        acknowledgment: config::SUBMIT_ACKNOWLEDGMENT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::models::FormField;
    use serde_json::json;

    fn jane() -> FormState {
        FormState::default()
            .with_field(FormField::Name, "Jane Doe")
            .with_field(FormField::Email, "jane@example.com")
            .with_field(FormField::Phone, "555-0100")
            .with_field(FormField::State, "Texas")
            .with_field(FormField::AccidentDate, "2024-03-01")
    }

    #[test]
    fn jane_doe_submission_logs_exact_payload() {
        let state = jane();
        let submission = submit(&state).unwrap();

        assert_eq!(
            submission.payload,
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "phone": "555-0100",
                "state": "Texas",
                "accidentDate": "2024-03-01",
                "injuries": "",
                "atFault": ""
            })
        );
        assert_eq!(
            submission.acknowledgment,
            "Thank you! We will contact you within 24 hours to discuss your case."
        );
    }

    #[test]
    fn submission_keeps_values_untrimmed_and_state_intact() {
        let state = jane()
            .with_field(FormField::Name, "  Jane Doe ")
            .with_field(FormField::Injuries, "Yes")
            .with_field(FormField::AtFault, "Partially");
        let before = state.clone();

        let submission = submit(&state).unwrap();

        assert_eq!(state, before);
        assert_eq!(submission.payload["name"], "  Jane Doe ");
        assert_eq!(submission.payload["injuries"], "Yes");
        assert_eq!(submission.payload["atFault"], "Partially");
        assert_eq!(submission.payload.as_object().unwrap().len(), 7);
    }

    #[test]
    fn free_form_phone_numbers_are_forwarded_as_typed() {
        for phone in ["1-800-LAW-AFFF", "555-0100 ext 2", "555 0100"] {
            let state = jane()
                .with_field(FormField::Phone, phone)
                .with_field(FormField::Injuries, "Yes")
                .with_field(FormField::AtFault, "No");

            let submission = submit(&state).unwrap();

            assert_eq!(submission.payload["phone"], phone);
            assert_eq!(submission.payload, serde_json::to_value(&state).unwrap());
        }
    }

    #[test]
    fn invalid_form_is_rejected_with_field_errors() {
        let state = jane().with_field(FormField::Email, "not-an-email");
        match submit(&state) {
            Err(SubmitError::Invalid(errors)) => {
                assert_eq!(errors, vec![FieldError::InvalidEmail(FormField::Email)]);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }
}
