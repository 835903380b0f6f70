use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The seven inputs of the eligibility form. The string forms match the
/// `name` attributes on the rendered inputs and the keys of the logged payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum FormField {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "phone")]
    Phone,
    #[strum(serialize = "state")]
    State,
    #[strum(serialize = "accidentDate")]
    AccidentDate,
    #[strum(serialize = "injuries")]
    Injuries,
    #[strum(serialize = "atFault")]
    AtFault,
}

impl FormField {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email address",
            Self::Phone => "Phone number",
            Self::State => "State",
            Self::AccidentDate => "Accident date",
            Self::Injuries => "Injuries",
            Self::AtFault => "Fault",
        }
    }
}

pub const JURISDICTIONS: [&str; 24] = [
    "California", "Texas", "Florida", "New York", "Pennsylvania", "Illinois",
    "Ohio", "Georgia", "North Carolina", "Michigan", "New Jersey", "Virginia",
    "Washington", "Arizona", "Massachusetts", "Tennessee", "Indiana", "Missouri",
    "Maryland", "Wisconsin", "Colorado", "Minnesota", "South Carolina", "Alabama",
];

pub const INJURY_OPTIONS: [&str; 3] = ["Yes", "No", "Not sure"];
pub const FAULT_OPTIONS: [&str; 4] = ["No", "Partially", "Yes", "Not sure"];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub state: String,
    pub accident_date: String,
    pub injuries: String,
    pub at_fault: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::State => &self.state,
            FormField::AccidentDate => &self.accident_date,
            FormField::Injuries => &self.injuries,
            FormField::AtFault => &self.at_fault,
        }
    }

    /// Returns a copy with `field` replaced by `value`; the other six entries carry over.
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            FormField::Name => &mut next.name,
            FormField::Email => &mut next.email,
            FormField::Phone => &mut next.phone,
            FormField::State => &mut next.state,
            FormField::AccidentDate => &mut next.accident_date,
            FormField::Injuries => &mut next.injuries,
            FormField::AtFault => &mut next.at_fault,
        };
        *slot = value.into();
        next
    }

    /// Same as `with_field`, keyed by the input's `name` attribute.
    /// Names outside the seven known fields leave the state untouched.
    pub fn update_field(&self, field_name: &str, value: impl Into<String>) -> Self {
        match field_name.parse::<FormField>() {
            Ok(field) => self.with_field(field, value),
            Err(_) => {
                log::debug!("Ignoring input for unknown form field {:?}", field_name);
                self.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use strum::IntoEnumIterator;

    fn keys(state: &FormState) -> Vec<String> {
        match serde_json::to_value(state).unwrap() {
            Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn field_names_round_trip_through_parse() {
        for field in FormField::iter() {
            assert_eq!(field.name().parse::<FormField>().unwrap(), field);
        }
        assert_eq!(FormField::AccidentDate.to_string(), "accidentDate");
        assert_eq!(FormField::AtFault.name(), "atFault");
    }

    #[test]
    fn default_state_is_all_empty() {
        let state = FormState::default();
        assert!(FormField::iter().all(|f| state.get(f).is_empty()));
    }

    #[test]
    fn with_field_replaces_only_that_entry() {
        let state = FormState::default()
            .with_field(FormField::Name, "Jane Doe")
            .with_field(FormField::Email, "jane@example.com");
        let next = state.with_field(FormField::Name, "John Roe");

        assert_eq!(next.name, "John Roe");
        assert_eq!(next.email, "jane@example.com");
        assert_eq!(state.name, "Jane Doe");
    }

    #[test]
    fn updates_on_distinct_fields_commute() {
        let a = FormState::default()
            .with_field(FormField::Phone, "555-0100")
            .with_field(FormField::State, "Texas")
            .with_field(FormField::Phone, "555-0199");
        let b = FormState::default()
            .with_field(FormField::State, "Texas")
            .with_field(FormField::Phone, "555-0100")
            .with_field(FormField::Phone, "555-0199");

        assert_eq!(a, b);
        assert_eq!(a.phone, "555-0199");
    }

    #[test]
    fn update_field_never_changes_key_set() {
        let expected = vec![
            "accidentDate", "atFault", "email", "injuries", "name", "phone", "state",
        ];
        let mut state = FormState::default();
        assert_eq!(keys(&state), expected);

        for (name, value) in [
            ("name", "Jane"),
            ("accidentDate", "2024-03-01"),
            ("zip", "73301"),
            ("accident_date", "2024-01-01"),
            ("", "x"),
        ] {
            state = state.update_field(name, value);
            assert_eq!(keys(&state), expected);
        }
        assert_eq!(state.accident_date, "2024-03-01");
    }

    #[test]
    fn unknown_field_name_leaves_state_untouched() {
        let state = FormState::default().with_field(FormField::Name, "Jane");
        assert_eq!(state.update_field("Name", "Other"), state);
    }
}
