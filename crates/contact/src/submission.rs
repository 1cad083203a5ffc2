use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Shape check only: something before the `@`, something after it, and at
/// least one dot in the domain part. No further TLD or deliverability
/// validation is attempted.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Why a submission was rejected. Surfaced verbatim to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
}

/// A raw contact-form submission as received from the client.
///
/// Both naming variants of the form are accepted: a single `name` field, or
/// a `firstName`/`lastName` pair. All fields are optional at the parsing
/// stage so that an absent field reaches validation (and yields a
/// `MissingFields` rejection) instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl ContactSubmission {
    /// Check the submission against the acceptance rules.
    ///
    /// A submission is either fully valid or rejected outright; there is no
    /// partial acceptance. Values are deliberately not trimmed, so a
    /// whitespace-only field counts as present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let has_name =
            present(&self.name) || (present(&self.first_name) && present(&self.last_name));

        if !has_name || !present(&self.email) || !present(&self.message) {
            return Err(ValidationError::MissingFields);
        }

        let email = self.email.as_deref().unwrap_or_default();
        if !email_regex().is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }

    /// Human-readable name for display in the notification email.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();
        format!("{first} {last}").trim().to_string()
    }
}
