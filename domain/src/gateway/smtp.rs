//! SMTP mail relay used to deliver summary emails.

use crate::error::Error;
use crate::gateway::{MailRelay, OutgoingEmail};
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::*;
use service::config::Config;
use std::time::Duration;

/// Pooled SMTP client configured once at startup.
pub struct SmtpRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Option<String>,
}

impl SmtpRelay {
    /// Create a relay from the mail settings in `config`.
    ///
    /// No connection is opened here. Missing credentials or sender only surface
    /// when a message is sent, so the server can still start without them.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let builder = if config.mail_use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(config.mail_server()).map_err(
                |err| {
                    warn!("Failed to configure STARTTLS for {}: {err:?}", config.mail_server());
                    Error::config(format!("Invalid mail server configuration: {err}"))
                },
            )?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.mail_server())
        };

        let mut builder = builder
            .port(config.mail_port)
            .timeout(Some(Duration::from_secs(config.mail_timeout_secs)));

        match (config.mail_username(), config.mail_password()) {
            (Some(username), Some(password)) => {
                builder = builder.credentials(Credentials::new(username, password));
            }
            _ => warn!("SMTP credentials are not configured, sending without authentication"),
        }

        info!(
            "Mail relay configured for {}:{} (tls: {})",
            config.mail_server(),
            config.mail_port,
            config.mail_use_tls
        );

        Ok(Self {
            transport: builder.build(),
            sender: config.mail_default_sender(),
        })
    }

    /// Build a multipart/alternative message addressed to every recipient.
    pub fn build_message(&self, email: &OutgoingEmail) -> Result<Message, Error> {
        let sender = self.sender.as_deref().ok_or_else(|| {
            warn!("Failed to get default mail sender from config");
            Error::config("No sender configured (set MAIL_DEFAULT_SENDER or MAIL_USERNAME)")
        })?;

        let mut builder = Message::builder()
            .from(sender.parse::<Mailbox>()?)
            .subject(email.subject.as_str());

        for recipient in &email.recipients {
            builder = builder.to(recipient.parse::<Mailbox>()?);
        }

        Ok(builder.multipart(MultiPart::alternative_plain_html(
            email.text_body.clone(),
            email.html_body.clone(),
        ))?)
    }
}

#[async_trait]
impl MailRelay for SmtpRelay {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), Error> {
        let message = self.build_message(email)?;

        debug!("Email subject: {}", email.subject);

        let response = self.transport.send(message).await.map_err(|e| {
            warn!("Failed to send email through SMTP relay: {e:?}");
            Error::from(e)
        })?;

        debug!("SMTP relay answered with code {}", response.code());
        Ok(())
    }
}
