//! Accepting contact form submissions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{ContactForm, ValidationFailure};

/// Confirmation shown after a successful submission.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Receipt for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

/// Validates and records contact form submissions.
///
/// Submissions are only logged; delivery (mail, storage) is left to the
/// deployment.
#[derive(Debug, Clone, Default)]
pub struct ContactIntake;

impl ContactIntake {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate and accept a submission.
    ///
    /// Rejected input is the visitor's mistake, so it is only logged at debug
    /// level.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailure` with per-field messages for invalid input.
    pub fn submit(&self, form: &ContactForm) -> Result<ContactReceipt, ValidationFailure> {
        if let Err(failure) = form.validate() {
            tracing::debug!(
                fields = ?failure.field_errors.keys().collect::<Vec<_>>(),
                "Contact form rejected"
            );
            return Err(failure);
        }

        let receipt = ContactReceipt {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            message: THANK_YOU_MESSAGE.to_string(),
        };

        tracing::info!(
            id = %receipt.id,
            name = %form.name,
            email = %form.email,
            subject = %form.subject,
            "Contact form submission received"
        );

        Ok(receipt)
    }
}
