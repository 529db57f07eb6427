use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// What kind of control a field is. Drives which checks apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Number,
    /// Radio group or select. The value is the checked option, or empty.
    Choice,
    /// File input. The value is the selected file name, or empty.
    File,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please select an option")]
    NoSelection,
    #[error("Please upload your resume")]
    MissingFile,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Checks a single value. Shared by every form on the site.
pub fn validate(kind: FieldKind, value: &str, required: bool) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        if !required {
            return Ok(());
        }
        return Err(match kind {
            FieldKind::Choice => FieldError::NoSelection,
            FieldKind::File => FieldError::MissingFile,
            _ => FieldError::Required,
        });
    }

    if kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }

    Ok(())
}

/// Static description of one form control.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Replaces the message of the "missing value" error.
    pub required_message: Option<&'static str>,
    /// `(value, label)` pairs a `Choice` may take. Empty means unrestricted.
    pub options: &'static [(&'static str, &'static str)],
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            required_message: None,
            options: &[],
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_required_message(mut self, message: &'static str) -> Self {
        self.required_message = Some(message);
        self
    }

    pub fn with_options(mut self, options: &'static [(&'static str, &'static str)]) -> Self {
        self.options = options;
        self
    }

    /// Whether `value` is blank or one of the listed options.
    pub fn accepts(&self, value: &str) -> bool {
        self.options.is_empty() || value.is_empty() || self.options.iter().any(|(option, _)| *option == value)
    }

    /// Runs [`validate`] and turns a failure into the message shown under the field.
    /// A value outside the option list counts as no selection.
    pub fn check(&self, value: &str) -> Result<(), String> {
        let value = if self.accepts(value) { value } else { "" };
        validate(self.kind, value, self.required).map_err(|err| match (&err, self.required_message) {
            (FieldError::Required | FieldError::NoSelection | FieldError::MissingFile, Some(msg)) => {
                msg.to_string()
            }
            _ => err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn emails_matching_local_at_domain_tld_pass() {
        for email in ["a@b.co", "jane.doe@example.com", "x+tag@sub.domain.org", "ä@ö.fi"] {
            assert!(is_valid_email(email), "{email} should pass");
            assert_eq!(validate(FieldKind::Email, email, true), Ok(()));
        }
    }

    #[test]
    fn emails_with_wrong_shape_fail() {
        for email in [
            "plain",
            "no-at.example.com",
            "missing@dot",
            "two@@example.com",
            "spa ce@example.com",
            "space@exa mple.com",
            "@example.com",
            "user@.",
        ] {
            assert!(!is_valid_email(email), "{email} should fail");
            assert_eq!(validate(FieldKind::Email, email, true), Err(FieldError::InvalidEmail));
        }
    }

    #[test]
    fn blank_required_values_fail_per_kind() {
        assert_eq!(validate(FieldKind::Text, "   ", true), Err(FieldError::Required));
        assert_eq!(validate(FieldKind::Email, "", true), Err(FieldError::Required));
        assert_eq!(validate(FieldKind::Number, "", true), Err(FieldError::Required));
        assert_eq!(validate(FieldKind::Choice, "", true), Err(FieldError::NoSelection));
        assert_eq!(validate(FieldKind::File, "", true), Err(FieldError::MissingFile));
    }

    #[test]
    fn optional_blank_passes_but_optional_bad_email_fails() {
        assert_eq!(validate(FieldKind::Email, "", false), Ok(()));
        assert_eq!(validate(FieldKind::Email, "nope", false), Err(FieldError::InvalidEmail));
        assert_eq!(validate(FieldKind::Text, "", false), Ok(()));
    }

    #[test]
    fn messages_match_the_inline_copy() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email");
        assert_eq!(FieldError::MissingFile.to_string(), "Please upload your resume");
    }

    #[test]
    fn override_only_replaces_missing_value_message() {
        let category = FieldSpec::new("category", FieldKind::Choice)
            .required()
            .with_required_message("Please select a category");
        assert_eq!(category.check(""), Err("Please select a category".to_string()));
        assert_eq!(category.check("wedding"), Ok(()));

        let email = FieldSpec::new("email", FieldKind::Email)
            .required()
            .with_required_message("Tell us where to reply");
        assert_eq!(email.check("bad"), Err("Please enter a valid email".to_string()));
    }

    #[test]
    fn choice_outside_its_options_is_no_selection() {
        const SHADES: [(&str, &str); 2] = [("red", "Red"), ("blue", "Blue")];
        let shade = FieldSpec::new("shade", FieldKind::Choice)
            .required()
            .with_options(&SHADES)
            .with_required_message("Pick a shade");
        assert!(shade.accepts("blue"));
        assert!(!shade.accepts("green"));
        assert_eq!(shade.check("blue"), Ok(()));
        assert_eq!(shade.check("green"), Err("Pick a shade".to_string()));

        let finish = FieldSpec::new("finish", FieldKind::Choice).with_options(&SHADES);
        assert_eq!(finish.check("green"), Ok(()));
    }
}
