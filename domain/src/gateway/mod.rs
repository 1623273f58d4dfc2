//! Clients for the external services this API delegates to.

use crate::error::Error;
use async_trait::async_trait;

pub mod gemini;
pub mod smtp;

/// A fully composed message ready to be handed to a mail relay.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub recipients: Vec<String>,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Delivers an [`OutgoingEmail`] to every recipient in a single dispatch.
///
/// Transport settings (host, credentials, sender) belong to the implementation and
/// are fixed when it is constructed; callers cannot override them per message.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), Error>;
}
