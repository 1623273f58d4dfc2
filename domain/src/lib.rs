//! Business logic for the meeting summarizer.
//!
//! `summary` and `emails` hold the two operations exposed over HTTP. Both delegate the
//! actual network call to a collaborator injected by the caller (`meeting_ai`'s
//! `Provider` and [`gateway::MailRelay`]), so neither keeps state between requests.

pub mod emails;
pub mod error;
pub mod prompts;
pub mod summary;

pub mod gateway;

pub use error::Error;
