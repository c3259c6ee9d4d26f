//! SMTP mail transport implementation

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Message, SmtpTransport, Transport,
};

use crate::domain::contact::{
    mailer::{errors::MailerError, Mailer},
    models::outbound_email::OutboundEmail,
};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SmtpConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST", default_value = "smtp.gmail.com")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT", default_value = "587")]
    pub port: u16,

    /// Use implicit TLS (port 465 style) instead of STARTTLS
    #[clap(long, env = "SMTP_SECURE", default_value = "false")]
    pub secure: bool,

    /// The SMTP username
    #[clap(long, env = "SMTP_USER")]
    pub username: Option<String>,

    /// The SMTP password
    #[clap(long, env = "SMTP_PASSWORD")]
    pub password: Option<String>,

    /// The sender email address, falling back to the SMTP username
    #[clap(long, env = "EMAIL_FROM")]
    pub from: Option<String>,

    /// The recipient of relayed submissions, falling back to the sender
    #[clap(long, env = "EMAIL_TO")]
    pub to: Option<String>,

    /// Verify the TLS certificate
    #[clap(long, env = "SMTP_VERIFY_TLS", default_value = "true")]
    pub verify_tls: bool,
}

/// SMTP mailer
#[derive(Debug, Default, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Resolve the credentials, treating empty values as unset
    fn credentials(&self) -> Option<Credentials> {
        let user = self.config.username.as_deref().filter(|u| !u.is_empty())?;
        let pass = self.config.password.as_deref().filter(|p| !p.is_empty())?;

        Some(Credentials::new(user.to_string(), pass.to_string()))
    }

    /// The address relayed emails are sent from
    fn sender(&self) -> Option<&str> {
        self.config
            .from
            .as_deref()
            .or(self.config.username.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// The address relayed emails are sent to
    fn recipient(&self) -> Option<&str> {
        self.config
            .to
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.sender())
    }

    /// Build the SMTP transport for the configured relay
    fn transport(&self, creds: Credentials) -> Result<SmtpTransport> {
        let relay = if self.config.secure {
            SmtpTransport::relay(&self.config.host)?
        } else {
            SmtpTransport::starttls_relay(&self.config.host)?.tls(Tls::Opportunistic(
                TlsParameters::builder(self.config.host.to_string())
                    .dangerous_accept_invalid_certs(!self.config.verify_tls)
                    .build()?,
            ))
        };

        Ok(relay.credentials(creds).port(self.config.port).build())
    }
}

impl From<lettre::address::AddressError> for MailerError {
    fn from(err: lettre::address::AddressError) -> Self {
        MailerError::UnknownError(err.into())
    }
}

impl From<lettre::error::Error> for MailerError {
    fn from(err: lettre::error::Error) -> Self {
        MailerError::UnknownError(err.into())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError> {
        // Credentials are checked before anything touches the network.
        let creds = self.credentials().ok_or(MailerError::NotConfigured)?;
        let sender = self.sender().ok_or(MailerError::NotConfigured)?;
        let recipient = self.recipient().ok_or(MailerError::NotConfigured)?;

        let message = Message::builder()
            .from(Mailbox::new(
                Some(email.from_name().to_string()),
                sender.parse()?,
            ))
            .to(recipient.parse()?)
            .reply_to(email.reply_to().to_string().parse()?)
            .subject(email.subject().to_string())
            .multipart(MultiPart::alternative_plain_html(
                String::from(email.plain_body()),
                String::from(email.html_body()),
            ))?;

        match self.transport(creds)?.send(&message) {
            Ok(_) => Ok(()),
            Err(e) => Err(MailerError::SendError(e.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use testresult::TestResult;

    use crate::domain::contact::{
        models::submission::Submission,
        value_objects::{email_address::EmailAddress, submitter_name::SubmitterName},
    };

    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            secure: false,
            username: Some("relay@example.com".to_string()),
            password: Some("hunter2".to_string()),
            from: None,
            to: None,
            verify_tls: true,
        }
    }

    fn outbound_email() -> TestResult<OutboundEmail> {
        let submission = Submission::new(
            SubmitterName::new("Alice Smith")?,
            EmailAddress::new("alice@example.com")?,
            None,
        );

        Ok(OutboundEmail::compose(&submission, Utc::now())?)
    }

    #[tokio::test]
    async fn test_send_without_password_is_not_configured() -> TestResult {
        let mailer = SmtpMailer::new(SmtpConfig {
            password: None,
            ..config()
        });

        let result = mailer.send(&outbound_email()?).await;

        assert!(matches!(result.unwrap_err(), MailerError::NotConfigured));

        Ok(())
    }

    #[tokio::test]
    async fn test_send_with_empty_username_is_not_configured() -> TestResult {
        let mailer = SmtpMailer::new(SmtpConfig {
            username: Some(String::new()),
            ..config()
        });

        let result = mailer.send(&outbound_email()?).await;

        assert!(matches!(result.unwrap_err(), MailerError::NotConfigured));

        Ok(())
    }

    #[test]
    fn test_sender_falls_back_to_username() {
        let mailer = SmtpMailer::new(config());

        assert_eq!(mailer.sender(), Some("relay@example.com"));
    }

    #[test]
    fn test_recipient_falls_back_to_sender() {
        let mailer = SmtpMailer::new(SmtpConfig {
            from: Some("listings@example.com".to_string()),
            ..config()
        });

        assert_eq!(mailer.recipient(), Some("listings@example.com"));
    }

    #[test]
    fn test_configured_recipient_wins_over_fallbacks() {
        let mailer = SmtpMailer::new(SmtpConfig {
            to: Some("agent@example.com".to_string()),
            ..config()
        });

        assert_eq!(mailer.recipient(), Some("agent@example.com"));
    }
}
