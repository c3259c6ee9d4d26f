//! Mail transport port

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::contact::models::outbound_email::OutboundEmail;

pub mod errors;

use errors::MailerError;

/// Outbound mail transport
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send an outbound email to the configured recipient.
    ///
    /// Implementations must detect missing credentials and return
    /// [`MailerError::NotConfigured`] before any network activity.
    ///
    /// # Arguments
    /// * `email` - The [`OutboundEmail`] to deliver.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError>;
    }
}
