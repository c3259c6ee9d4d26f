//! Contact submission email template

use askama::Template;
use chrono::{DateTime, Utc};

use crate::domain::contact::models::submission::Submission;

/// Relayed contact submission template
#[derive(Debug, Template)]
#[template(path = "emails/contact/submission.html")]
pub struct SubmissionEmailTemplate {
    /// The submitter's display name
    pub name: String,

    /// The submitter's email address
    pub email: String,

    /// The message text, split on newlines for `<br>` rendering
    pub message_lines: Vec<String>,

    /// When the submission was received
    pub received_at: String,
}

impl SubmissionEmailTemplate {
    /// Creates a new `SubmissionEmailTemplate`
    pub fn new(submission: &Submission, received_at: DateTime<Utc>) -> Self {
        Self {
            name: submission.name().to_string(),
            email: submission.email().to_string(),
            message_lines: submission
                .message_text()
                .lines()
                .map(String::from)
                .collect(),
            received_at: received_at.to_rfc2822(),
        }
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> String {
        format!(
            "New contact form submission\n\n\
             Name: {name}\n\
             Email: {email}\n\
             Message:\n{message}\n\n\
             ---\n\
             Received at: {received_at}\n",
            name = self.name,
            email = self.email,
            message = self.message_lines.join("\n"),
            received_at = self.received_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::contact::value_objects::{
        email_address::EmailAddress, submitter_name::SubmitterName,
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
    fn test_html_renders_newlines_as_breaks() -> TestResult {
        let submission = submission(Some("first line\nsecond line"))?;
        let template = SubmissionEmailTemplate::new(&submission, Utc::now());

        let html = template.render()?;

        assert!(html.contains("first line<br>second line"));

        Ok(())
    }

    #[test]
    fn test_html_escapes_submitted_text() -> TestResult {
        let submission = Submission::new(
            SubmitterName::new("<b>Alice</b>")?,
            EmailAddress::new("alice@example.com")?,
            None,
        );
        let template = SubmissionEmailTemplate::new(&submission, Utc::now());

        let html = template.render()?;

        assert!(!html.contains("<b>Alice</b>"));
        assert!(html.contains("&lt;b&gt;Alice&lt;/b&gt;"));

        Ok(())
    }

    #[test]
    fn test_html_contains_placeholder_when_no_message() -> TestResult {
        let template = SubmissionEmailTemplate::new(&submission(None)?, Utc::now());

        assert!(template.render()?.contains("No message provided"));

        Ok(())
    }

    #[test]
    fn test_plain_rendering_contains_all_fields() -> TestResult {
        let submission = submission(Some("Interested in a showing"))?;
        let template = SubmissionEmailTemplate::new(&submission, Utc::now());

        let plain = template.render_plain();

        assert!(plain.contains("Name: Alice Smith"));
        assert!(plain.contains("Email: alice@example.com"));
        assert!(plain.contains("Interested in a showing"));

        Ok(())
    }
}
