//! Relayed contact email

use anyhow::Result;
use askama::Template;
use chrono::{DateTime, Utc};

use crate::domain::contact::{
    emails::submission::SubmissionEmailTemplate, models::submission::Submission,
    value_objects::email_address::EmailAddress,
};

/// The email relayed to the configured recipient for one submission.
///
/// Sender and recipient addresses belong to the mail transport's
/// configuration; this carries everything derived from the submission itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundEmail {
    from_name: String,
    reply_to: EmailAddress,
    subject: String,
    html_body: String,
    plain_body: String,
}

impl OutboundEmail {
    /// Compose the outbound email for a submission received at the given time
    pub fn compose(submission: &Submission, received_at: DateTime<Utc>) -> Result<Self> {
        let template = SubmissionEmailTemplate::new(submission, received_at);

        Ok(Self {
            from_name: submission.name().to_string(),
            reply_to: submission.email().clone(),
            subject: format!("New contact form submission from {}", submission.name()),
            html_body: template.render()?,
            plain_body: template.render_plain(),
        })
    }

    /// The display name to send under, i.e. the submitter's name
    pub fn from_name(&self) -> &str {
        &self.from_name
    }

    /// The reply-to address, i.e. the submitter's address
    pub fn reply_to(&self) -> &EmailAddress {
        &self.reply_to
    }

    /// The subject line
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The HTML rendering of the body
    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    /// The plain text rendering of the body
    pub fn plain_body(&self) -> &str {
        &self.plain_body
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::contact::{
        models::submission::NO_MESSAGE_PLACEHOLDER, value_objects::submitter_name::SubmitterName,
    };

    use super::*;

    fn submission(message: Option<&str>) -> TestResult<Submission> {
        Ok(Submission::new(
            SubmitterName::new("Alice Smith")?,
            EmailAddress::new("alice@example.com")?,
            message.map(String::from),
        ))
    }

    #[test]
    fn test_subject_contains_submitter_name() -> TestResult {
        let email = OutboundEmail::compose(&submission(None)?, Utc::now())?;

        assert_eq!(
            email.subject(),
            "New contact form submission from Alice Smith"
        );

        Ok(())
    }

    #[test]
    fn test_reply_to_is_the_submitter_address() -> TestResult {
        let email = OutboundEmail::compose(&submission(None)?, Utc::now())?;

        assert_eq!(email.reply_to(), &EmailAddress::new("alice@example.com")?);
        assert_eq!(email.from_name(), "Alice Smith");

        Ok(())
    }

    #[test]
    fn test_bodies_substitute_placeholder_when_no_message() -> TestResult {
        let email = OutboundEmail::compose(&submission(Some("  "))?, Utc::now())?;

        assert!(email.plain_body().contains(NO_MESSAGE_PLACEHOLDER));
        assert!(email.html_body().contains(NO_MESSAGE_PLACEHOLDER));

        Ok(())
    }

    #[test]
    fn test_bodies_preserve_message_text() -> TestResult {
        let email = OutboundEmail::compose(
            &submission(Some("Interested in a showing\nWeekends only"))?,
            Utc::now(),
        )?;

        assert!(email
            .plain_body()
            .contains("Interested in a showing\nWeekends only"));
        assert!(email
            .html_body()
            .contains("Interested in a showing<br>Weekends only"));

        Ok(())
    }
}
