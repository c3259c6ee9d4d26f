//! Contact service module

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tracing::error;

#[cfg(test)]
use mockall::mock;

use crate::domain::contact::{
    errors::SubmitContactError,
    mailer::{errors::MailerError, Mailer},
    models::{outbound_email::OutboundEmail, submission::Submission},
};

/// Contact submission intake
#[async_trait]
pub trait ContactService: Clone + Send + Sync + 'static {
    /// Relay a validated submission to the configured recipient.
    ///
    /// # Arguments
    /// * `submission` - The validated [`Submission`] to relay.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the email has been handed to the
    /// transport, or an [`Err`] containing a [`SubmitContactError`] otherwise.
    async fn submit_contact(&self, submission: &Submission) -> Result<(), SubmitContactError>;
}

#[cfg(test)]
mock! {
    pub ContactService {}

    impl Clone for ContactService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl ContactService for ContactService {
        async fn submit_contact(&self, submission: &Submission) -> Result<(), SubmitContactError>;
    }
}

/// Contact service implementation that relays submissions through a [`Mailer`]
pub struct ContactRelayService<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
}

impl<M> Clone for ContactRelayService<M>
where
    M: Mailer,
{
    fn clone(&self) -> Self {
        Self {
            mailer: Arc::clone(&self.mailer),
        }
    }
}

impl<M> ContactRelayService<M>
where
    M: Mailer,
{
    /// Create a new contact relay service
    pub fn new(mailer: Arc<M>) -> Self {
        Self { mailer }
    }
}

impl<M> fmt::Debug for ContactRelayService<M>
where
    M: Mailer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactRelayService")
            .field("mailer", &"Mailer")
            .finish()
    }
}

#[async_trait]
impl<M> ContactService for ContactRelayService<M>
where
    M: Mailer,
{
    async fn submit_contact(&self, submission: &Submission) -> Result<(), SubmitContactError> {
        let email = OutboundEmail::compose(submission, Utc::now())?;

        match self.mailer.send(&email).await {
            Ok(()) => Ok(()),
            Err(MailerError::NotConfigured) => {
                error!("contact submission rejected: mail transport is not configured");
                Err(SubmitContactError::NotConfigured)
            }
            Err(err) => {
                // The transport error is logged here and never surfaced to
                // the submitter.
                error!("failed to relay contact submission: {:#}", anyhow::anyhow!(err));
                Err(SubmitContactError::DeliveryFailed)
            }
        }
    }
}
