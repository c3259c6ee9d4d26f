//! Contact domain errors

use thiserror::Error;

/// Errors raised when relaying a contact submission
#[derive(Debug, Error)]
pub enum SubmitContactError {
    /// The mail transport is missing required credentials; an operator
    /// problem, not something the submitter can fix
    #[error("mail transport is not configured")]
    NotConfigured,

    /// The mail transport accepted the message but failed to deliver it
    #[error("failed to deliver the submission")]
    DeliveryFailed,

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for SubmitContactError {
    fn from(err: anyhow::Error) -> Self {
        SubmitContactError::UnknownError(err)
    }
}
