//! Contact form validation rules.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const MIN_NAME_CHARS: usize = 2;
const MIN_SUBJECT_CHARS: usize = 5;
const MIN_MESSAGE_CHARS: usize = 10;

/// Messages for each failing field, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Raw contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Contact form input rejected field by field.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid input.")]
pub struct ValidationFailure {
    pub field_errors: FieldErrors,
}

impl ValidationFailure {
    /// Messages for one field; empty when the field passed.
    #[must_use]
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.field_errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+-]+(?:\.[A-Za-z0-9_'+-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

/// Whether `email` looks like a deliverable address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

fn require_min_chars(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    min: usize,
    label: &str,
) {
    if value.chars().count() < min {
        errors
            .entry(field.to_string())
            .or_default()
            .push(format!("{label} must be at least {min} characters."));
    }
}

impl ContactForm {
    /// Check every field, collecting all failures at once.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailure` listing each field that failed.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        let mut errors = FieldErrors::new();

        require_min_chars(&mut errors, "name", &self.name, MIN_NAME_CHARS, "Name");
        if !is_valid_email(&self.email) {
            errors
                .entry("email".to_string())
                .or_default()
                .push("Please enter a valid email address.".to_string());
        }
        require_min_chars(&mut errors, "subject", &self.subject, MIN_SUBJECT_CHARS, "Subject");
        require_min_chars(&mut errors, "message", &self.message, MIN_MESSAGE_CHARS, "Message");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure {
                field_errors: errors,
            })
        }
    }
}
