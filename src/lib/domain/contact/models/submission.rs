//! Contact form submission

use crate::domain::contact::value_objects::{
    email_address::EmailAddress, submitter_name::SubmitterName,
};

/// Body text substituted when the visitor left the message field blank
pub const NO_MESSAGE_PLACEHOLDER: &str = "No message provided";

/// A single validated contact-form submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    name: SubmitterName,
    email: EmailAddress,
    message: Option<String>,
}

impl Submission {
    /// Create a new submission. A message that is empty after trimming is
    /// treated as absent.
    pub fn new(name: SubmitterName, email: EmailAddress, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());

        Self {
            name,
            email,
            message,
        }
    }

    /// The submitter's display name
    pub fn name(&self) -> &SubmitterName {
        &self.name
    }

    /// The submitter's email address, used as the reply-to of the relayed email
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// The message text, or [`NO_MESSAGE_PLACEHOLDER`] when none was supplied
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or(NO_MESSAGE_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn submission(message: Option<&str>) -> TestResult<Submission> {
        Ok(Submission::new(
            SubmitterName::new("Alice Smith")?,
            EmailAddress::new("alice@example.com")?,
            message.map(String::from),
        ))
    }

    #[test]
    fn test_missing_message_uses_placeholder() -> TestResult {
        assert_eq!(submission(None)?.message_text(), NO_MESSAGE_PLACEHOLDER);

        Ok(())
    }

    #[test]
    fn test_blank_message_uses_placeholder() -> TestResult {
        assert_eq!(
            submission(Some(" \n "))?.message_text(),
            NO_MESSAGE_PLACEHOLDER
        );

        Ok(())
    }

    #[test]
    fn test_message_text_is_preserved() -> TestResult {
        let submission = submission(Some("Interested in a showing\nSecond line"))?;

        assert_eq!(
            submission.message_text(),
            "Interested in a showing\nSecond line"
        );

        Ok(())
    }
}
