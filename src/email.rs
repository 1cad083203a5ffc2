use std::time::Duration;

use anyhow::{Context, Result};
use askama::Template;
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::EmailConfig;
use portfolio_contact::ContactRecord;

/// Contact notification email, HTML part. User content is auto-escaped by
/// the template engine, so markup in a message renders as text.
#[derive(Template)]
#[template(path = "emails/contact-notification.html")]
struct ContactNotificationHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Contact notification email, plain text part.
#[derive(Template)]
#[template(path = "emails/contact-notification.txt")]
struct ContactNotificationTextTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Outbound delivery seam for the relay sink. The production implementation
/// talks SMTP; tests substitute a recording stub.
#[async_trait]
pub trait ContactMailer: Send + Sync {
    /// Deliver one accepted submission to the operator's inbox. Exactly one
    /// delivery attempt; no retries.
    async fn send_contact_email(&self, record: &ContactRecord) -> Result<()>;
}

/// SMTP-backed [`ContactMailer`] using the configured relay.
pub struct SmtpMailer {
    config: EmailConfig,
}

impl SmtpMailer {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<SmtpTransport> {
        let timeout = Some(Duration::from_secs(self.config.timeout_secs));

        // For local dev (MailDev and friends), connect directly without
        // authentication; production goes through an authenticated relay.
        let mailer = if self.config.smtp_username.is_empty() && self.config.smtp_password.is_empty()
        {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .timeout(timeout)
                .build()
        } else {
            let credentials = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .context("Failed to create SMTP transport")?
                .port(self.config.smtp_port)
                .credentials(credentials)
                .timeout(timeout)
                .build()
        };

        Ok(mailer)
    }
}

#[async_trait]
impl ContactMailer for SmtpMailer {
    async fn send_contact_email(&self, record: &ContactRecord) -> Result<()> {
        let name = record.display_name();

        let html_body = ContactNotificationHtmlTemplate {
            name: &name,
            email: &record.email,
            subject: &record.subject,
            message: &record.message,
        }
        .render()
        .context("Failed to render HTML email template")?;

        let text_body = ContactNotificationTextTemplate {
            name: &name,
            email: &record.email,
            subject: &record.subject,
            message: &record.message,
        }
        .render()
        .context("Failed to render plain text email template")?;

        // Sender is the submitter so the operator can reply directly.
        let from_mailbox: Mailbox = record
            .email
            .parse()
            .context("Failed to parse submitter email")?;

        let to_mailbox: Mailbox = self
            .config
            .contact_address
            .parse()
            .context("Failed to parse contact address")?;

        let email = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(format!("Portfolio Contact Form: {name}"))
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body),
                    ),
            )
            .context("Failed to build email message")?;

        self.transport()?
            .send(&email)
            .context("Failed to send contact email")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_contact::ContactSubmission;

    fn record(message: &str) -> ContactRecord {
        ContactRecord::accept(ContactSubmission {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            message: Some(message.to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn html_template_escapes_user_markup() {
        let record = record("<script>alert('x')</script>");
        let html = ContactNotificationHtmlTemplate {
            name: &record.display_name(),
            email: &record.email,
            subject: &record.subject,
            message: &record.message,
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Ada Lovelace"));
    }

    #[test]
    fn text_template_carries_all_fields() {
        let record = record("hello there");
        let text = ContactNotificationTextTemplate {
            name: &record.display_name(),
            email: &record.email,
            subject: &record.subject,
            message: &record.message,
        }
        .render()
        .unwrap();

        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("ada@example.com"));
        assert!(text.contains("No subject"));
        assert!(text.contains("hello there"));
    }
}
