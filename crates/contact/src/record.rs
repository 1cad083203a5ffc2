use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::{ContactSubmission, ValidationError};

/// Placeholder stored when a submission carries no subject.
pub const DEFAULT_SUBJECT: &str = "No subject";

/// An accepted contact submission as held by the in-memory store and echoed
/// back to the client.
///
/// `id` is the creation time in Unix milliseconds, `created_at` the same
/// instant as an RFC 3339 UTC timestamp. Name fields mirror whichever
/// variant the submitter used; the unused variant is omitted from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: String,
}

impl ContactRecord {
    /// Validate a submission and, on success, normalize it into a record
    /// stamped with the current time.
    ///
    /// This is the only way a record comes into existence; a rejected
    /// submission produces nothing.
    pub fn accept(submission: ContactSubmission) -> Result<Self, ValidationError> {
        submission.validate()?;

        let now = OffsetDateTime::now_utc();
        let millis = now.unix_timestamp_nanos() / 1_000_000;
        let created_at = now
            .format(&Rfc3339)
            .expect("UTC timestamps always format as RFC 3339");

        let subject = submission
            .subject
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

        Ok(Self {
            id: millis.to_string(),
            name: submission.name,
            first_name: submission.first_name,
            last_name: submission.last_name,
            email: submission.email.unwrap_or_default(),
            subject,
            message: submission.message.unwrap_or_default(),
            created_at,
        })
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

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            message: Some("hello".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn accept_stamps_id_and_timestamp() {
        let before = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let record = ContactRecord::accept(submission()).unwrap();
        let after = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

        let id: i128 = record.id.parse().expect("id is a millisecond timestamp");
        assert!(before <= id && id <= after);
        assert!(record.created_at.contains('T'));
        assert!(record.created_at.ends_with('Z'));
    }

    #[test]
    fn accept_defaults_missing_subject() {
        let record = ContactRecord::accept(submission()).unwrap();
        assert_eq!(record.subject, DEFAULT_SUBJECT);
    }

    #[test]
    fn accept_defaults_empty_subject() {
        let mut input = submission();
        input.subject = Some(String::new());
        let record = ContactRecord::accept(input).unwrap();
        assert_eq!(record.subject, DEFAULT_SUBJECT);
    }

    #[test]
    fn accept_keeps_a_provided_subject() {
        let mut input = submission();
        input.subject = Some("Job offer".to_string());
        let record = ContactRecord::accept(input).unwrap();
        assert_eq!(record.subject, "Job offer");
    }

    #[test]
    fn accept_rejects_invalid_input() {
        let mut input = submission();
        input.email = Some("nope".to_string());
        assert_eq!(
            ContactRecord::accept(input),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let record = ContactRecord::accept(submission()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert!(json["createdAt"].is_string());
        // Unused naming variant stays off the wire entirely.
        assert!(json.get("name").is_none());
    }
}
