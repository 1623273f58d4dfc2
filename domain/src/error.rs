//! Error types for the `domain` layer.
use meeting_ai::Error as MeetingAiError;
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain layer or
/// in lower layers. The `source` field is used to hold the original error that caused
/// the domain error. `web` only ever looks at the `error_kind` to pick an HTTP status
/// and a client-facing message; the `source` stays server side.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    /// A request failed local validation. The message is safe to show to clients.
    Validation(String),
    Config(String),
    Other(String),
}

/// Enum representing failures reported by, or while talking to, an external provider
/// (the generative model or the mail relay). Each carries the client-facing description.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    Network(String),
    Timeout(String),
    Other(String),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Validation(message.into())),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config(message.into())),
        }
    }

    /// Returns the human readable description carried by the error kind.
    pub fn message(&self) -> &str {
        match &self.error_kind {
            DomainErrorKind::Internal(kind) => match kind {
                InternalErrorKind::Validation(msg)
                | InternalErrorKind::Config(msg)
                | InternalErrorKind::Other(msg) => msg,
            },
            DomainErrorKind::External(kind) => match kind {
                ExternalErrorKind::Network(msg)
                | ExternalErrorKind::Timeout(msg)
                | ExternalErrorKind::Other(msg) => msg,
            },
        }
    }

    /// Re-labels a provider failure for the operation it interrupted, keeping the
    /// original kind and source. Ex. `"Failed to send email: Network error: ..."`.
    pub fn in_context(self, operation: &str) -> Self {
        let description = format!("{operation}: {}", self.message());
        let error_kind = match self.error_kind {
            DomainErrorKind::External(ExternalErrorKind::Network(_)) => {
                DomainErrorKind::External(ExternalErrorKind::Network(description))
            }
            DomainErrorKind::External(ExternalErrorKind::Timeout(_)) => {
                DomainErrorKind::External(ExternalErrorKind::Timeout(description))
            }
            // Configuration problems only surface once a provider is actually called,
            // so from the caller's point of view they are provider failures too.
            DomainErrorKind::External(ExternalErrorKind::Other(_))
            | DomainErrorKind::Internal(_) => {
                DomainErrorKind::External(ExternalErrorKind::Other(description))
            }
        };

        Error {
            source: self.source,
            error_kind,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the `meeting-ai` provider layer to the `domain` layer.
impl From<MeetingAiError> for Error {
    fn from(err: MeetingAiError) -> Self {
        let description = err.to_string();
        let error_kind = match &err {
            MeetingAiError::Network(_) => {
                DomainErrorKind::External(ExternalErrorKind::Network(description))
            }
            MeetingAiError::Timeout(_) => {
                DomainErrorKind::External(ExternalErrorKind::Timeout(description))
            }
            MeetingAiError::Configuration(_) => {
                DomainErrorKind::Internal(InternalErrorKind::Config(description))
            }
            MeetingAiError::Authentication(_)
            | MeetingAiError::Provider(_)
            | MeetingAiError::RateLimited(_)
            | MeetingAiError::Deserialization(_)
            | MeetingAiError::Other(_) => {
                DomainErrorKind::External(ExternalErrorKind::Other(description))
            }
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<lettre::address::AddressError> for Error {
    fn from(err: lettre::address::AddressError) -> Self {
        Error {
            error_kind: DomainErrorKind::External(ExternalErrorKind::Other(format!(
                "Invalid mailbox: {err}"
            ))),
            source: Some(Box::new(err)),
        }
    }
}

impl From<lettre::error::Error> for Error {
    fn from(err: lettre::error::Error) -> Self {
        Error {
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(format!(
                "Failed to build email message: {err}"
            ))),
            source: Some(Box::new(err)),
        }
    }
}

impl From<lettre::transport::smtp::Error> for Error {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        let description = err.to_string();
        // Errors that result from the relay never answering or the socket dropping.
        let error_kind = if err.is_timeout() {
            DomainErrorKind::External(ExternalErrorKind::Timeout(description))
        } else if err.is_transient() || err.is_permanent() {
            // The relay answered with an SMTP error code (auth, rejected recipient, quota).
            DomainErrorKind::External(ExternalErrorKind::Other(description))
        } else {
            DomainErrorKind::External(ExternalErrorKind::Network(description))
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}
