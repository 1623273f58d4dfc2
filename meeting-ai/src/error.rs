//! Error types for meeting AI operations.

use std::fmt;

/// Universal error type that abstracts provider-specific errors into common variants.
///
/// All provider implementations should map their native errors to these variants,
/// preserving context while maintaining a provider-agnostic interface.
#[derive(Debug)]
pub enum Error {
    /// API key authentication failures. Indicates credentials are invalid,
    /// expired, or lack necessary permissions.
    Authentication(String),

    /// Network connectivity issues, DNS failures, or refused connections.
    Network(String),

    /// Missing API key, invalid model name, or malformed client configuration.
    Configuration(String),

    /// Provider-side failures (non-success status, blocked prompt, empty candidates).
    Provider(String),

    /// Operation exceeded the configured or provider-enforced timeout period.
    Timeout(String),

    /// Provider quota or rate limit exceeded.
    RateLimited(String),

    /// Failed to deserialize the provider response to the expected shape.
    Deserialization(String),

    /// Catch-all for errors that don't fit other categories.
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Configuration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
            Error::Timeout(msg) => write!(f, "Timeout: {}", msg),
            Error::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            Error::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            Error::Other(err) => write!(f, "Other error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
