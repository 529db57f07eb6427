use std::collections::BTreeMap;

use super::transport::Submission;
use super::validation::FieldSpec;

pub const HONEYPOT_FIELD: &str = "website";

/// A single-page form: current values plus the inline error per field.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleForm {
    name: &'static str,
    fields: Vec<FieldSpec>,
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
}

impl SimpleForm {
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name,
            fields,
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_bot(&self) -> bool {
        !self.value(HONEYPOT_FIELD).is_empty()
    }

    /// Records typing. A field already showing an error is re-checked.
    pub fn input(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
        if self.has_error(field) {
            self.validate_field(field);
        }
    }

    /// Checks one field, as on blur. Unknown fields pass.
    pub fn validate_field(&mut self, field: &str) -> bool {
        let Some(spec) = self.fields.iter().find(|spec| spec.name == field) else {
            return true;
        };
        match spec.check(self.value(field)) {
            Ok(()) => {
                self.errors.remove(field);
                true
            }
            Err(message) => {
                self.errors.insert(field.to_string(), message);
                false
            }
        }
    }

    /// Checks every field and flags each failure.
    pub fn validate_all(&mut self) -> bool {
        let names: Vec<&'static str> = self.fields.iter().map(|spec| spec.name).collect();
        names
            .into_iter()
            .fold(true, |ok, name| self.validate_field(name) && ok)
    }

    /// Known field values, honeypot excluded.
    pub fn submission(&self) -> Submission {
        let fields = self
            .fields
            .iter()
            .filter(|spec| spec.name != HONEYPOT_FIELD)
            .map(|spec| (spec.name.to_string(), self.value(spec.name).to_string()))
            .collect();
        Submission { form: self.name, fields }
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::FieldKind;
    use pretty_assertions::assert_eq;

    fn form() -> SimpleForm {
        SimpleForm::new(
            "contact",
            vec![
                FieldSpec::new("name", FieldKind::Text).required(),
                FieldSpec::new("email", FieldKind::Email).required(),
                FieldSpec::new("message", FieldKind::Text).required(),
                FieldSpec::new(HONEYPOT_FIELD, FieldKind::Text),
            ],
        )
    }

    #[test]
    fn validate_all_flags_every_failing_field() {
        let mut form = form();
        form.input("email", "nope");
        assert!(!form.validate_all());
        assert_eq!(form.error("name"), Some("This field is required"));
        assert_eq!(form.error("email"), Some("Please enter a valid email"));
        assert_eq!(form.error("message"), Some("This field is required"));
        assert_eq!(form.error(HONEYPOT_FIELD), None);
    }

    #[test]
    fn input_only_revalidates_fields_already_in_error() {
        let mut form = form();
        form.input("email", "bad");
        assert!(!form.has_error("email"));

        form.validate_field("email");
        assert!(form.has_error("email"));

        form.input("email", "ok@example.com");
        assert!(!form.has_error("email"));
    }

    #[test]
    fn submission_skips_honeypot_and_reset_clears_everything() {
        let mut form = form();
        form.input("name", "Ada");
        form.input("email", "ada@example.com");
        form.input("message", "Hello");
        form.input(HONEYPOT_FIELD, "spam");
        assert!(form.is_bot());

        let sent = form.submission();
        assert_eq!(sent.form, "contact");
        assert_eq!(sent.fields.get("name").map(String::as_str), Some("Ada"));
        assert!(!sent.fields.contains_key(HONEYPOT_FIELD));

        form.reset();
        assert_eq!(form.value("name"), "");
        assert!(!form.is_bot());
    }
}
