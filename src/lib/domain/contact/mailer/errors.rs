//! Mailer errors

use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The transport is missing its credentials; no send was attempted
    #[error("mail transport credentials are not configured")]
    NotConfigured,

    /// The transport failed to send the email
    #[error("failed to send the email")]
    SendError(#[source] anyhow::Error),

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::UnknownError(err)
    }
}
