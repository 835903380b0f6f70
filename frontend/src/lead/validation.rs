use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use strum::IntoEnumIterator;
use thiserror::Error;

use super::models::{FormField, FormState, FAULT_OPTIONS, INJURY_OPTIONS, JURISDICTIONS};

// Same loose shape the browser applies to type="email".
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)*$").expect("email pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Date,
    Choice(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub required: bool,
    pub kind: FieldKind,
}

pub fn rule_for(field: FormField) -> FieldRule {
    let (required, kind) = match field {
        FormField::Name => (true, FieldKind::Text),
        FormField::Email => (true, FieldKind::Email),
        FormField::Phone => (true, FieldKind::Phone),
        FormField::State => (true, FieldKind::Choice(&JURISDICTIONS)),
        FormField::AccidentDate => (true, FieldKind::Date),
        FormField::Injuries => (false, FieldKind::Choice(&INJURY_OPTIONS)),
        FormField::AtFault => (false, FieldKind::Choice(&FAULT_OPTIONS)),
    };
    FieldRule { required, kind }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Missing(FormField),
    #[error("{} must be a valid email address", .0.label())]
    InvalidEmail(FormField),
    #[error("{} must be a date in YYYY-MM-DD form", .0.label())]
    InvalidDate(FormField),
    #[error("{} must be one of the listed options", .0.label())]
    UnknownChoice(FormField),
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            Self::Missing(f)
            | Self::InvalidEmail(f)
            | Self::InvalidDate(f)
            | Self::UnknownChoice(f) => *f,
        }
    }
}

impl FieldRule {
    /// Empty values only fail the `required` check; shape checks apply to what was typed.
    pub fn check(&self, field: FormField, value: &str) -> Result<(), FieldError> {
        if value.is_empty() {
            return if self.required {
                Err(FieldError::Missing(field))
            } else {
                Ok(())
            };
        }

        match self.kind {
            FieldKind::Text => Ok(()),
            FieldKind::Email if EMAIL_RE.is_match(value) => Ok(()),
            FieldKind::Email => Err(FieldError::InvalidEmail(field)),
            // type="tel" has no shape check; any filled-in number is forwarded as typed
            FieldKind::Phone => Ok(()),
            FieldKind::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| FieldError::InvalidDate(field)),
            FieldKind::Choice(options) if options.contains(&value) => Ok(()),
            FieldKind::Choice(_) => Err(FieldError::UnknownChoice(field)),
        }
    }
}

/// Checks every field against its rule and returns all failures in form order.
pub fn validate(state: &FormState) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = FormField::iter()
        .filter_map(|field| rule_for(field).check(field, state.get(field)).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FormState {
        FormState::default()
            .with_field(FormField::Name, "Jane Doe")
            .with_field(FormField::Email, "jane@example.com")
            .with_field(FormField::Phone, "555-0100")
            .with_field(FormField::State, "Texas")
            .with_field(FormField::AccidentDate, "2024-03-01")
    }

    #[test]
    fn required_fields_match_the_rendered_form() {
        let required: Vec<FormField> = FormField::iter()
            .filter(|f| rule_for(*f).required)
            .collect();
        assert_eq!(
            required,
            vec![
                FormField::Name,
                FormField::Email,
                FormField::Phone,
                FormField::State,
                FormField::AccidentDate,
            ]
        );
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&FormState::default()).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().all(|e| matches!(e, FieldError::Missing(_))));
        assert_eq!(errors[0].field(), FormField::Name);
        assert_eq!(errors[4].field(), FormField::AccidentDate);
    }

    #[test]
    fn complete_form_with_optional_fields_blank_passes() {
        assert_eq!(validate(&complete()), Ok(()));
    }

    #[test]
    fn email_shape() {
        let rule = rule_for(FormField::Email);
        assert!(rule.check(FormField::Email, "jane@example.com").is_ok());
        assert!(rule.check(FormField::Email, "jane@localhost").is_ok());
        assert_eq!(
            rule.check(FormField::Email, "jane.example.com"),
            Err(FieldError::InvalidEmail(FormField::Email))
        );
        assert!(rule.check(FormField::Email, "jane doe@example.com").is_err());
        assert!(rule.check(FormField::Email, "jane@").is_err());
        assert!(rule.check(FormField::Email, "jane@example..com").is_err());
    }

    #[test]
    fn phone_accepts_any_filled_value() {
        let rule = rule_for(FormField::Phone);
        for phone in ["555-0100", "+1 (512) 555.0100", "555-01", "1-800-LAW-AFFF", "555-0100 ext 2"] {
            assert!(rule.check(FormField::Phone, phone).is_ok(), "{phone}");
        }
        assert_eq!(
            rule.check(FormField::Phone, ""),
            Err(FieldError::Missing(FormField::Phone))
        );
    }

    #[test]
    fn accident_date_must_be_a_calendar_date() {
        let rule = rule_for(FormField::AccidentDate);
        assert!(rule.check(FormField::AccidentDate, "2024-02-29").is_ok());
        assert!(rule.check(FormField::AccidentDate, "2023-02-29").is_err());
        assert!(rule.check(FormField::AccidentDate, "03/01/2024").is_err());
    }

    #[test]
    fn choices_are_closed_lists() {
        let state = complete()
            .with_field(FormField::State, "Ontario")
            .with_field(FormField::AtFault, "Partially");
        assert_eq!(
            validate(&state),
            Err(vec![FieldError::UnknownChoice(FormField::State)])
        );

        let state = complete().with_field(FormField::Injuries, "Maybe");
        assert_eq!(
            validate(&state),
            Err(vec![FieldError::UnknownChoice(FormField::Injuries)])
        );
    }

    #[test]
    fn error_messages_use_field_labels() {
        assert_eq!(
            FieldError::Missing(FormField::AccidentDate).to_string(),
            "Accident date is required"
        );
        assert_eq!(
            FieldError::InvalidEmail(FormField::Email).to_string(),
            "Email address must be a valid email address"
        );
    }
}
