//! Meeting AI abstraction layer for generative-text providers.
//!
//! This crate provides trait-based abstractions for turning a prompt built from a
//! meeting transcript into generated text. The design is provider-agnostic, enabling
//! applications to swap between model vendors (Gemini, OpenAI, Claude, etc.) without
//! changing application code.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::Error;
pub use types::generation::GenerationConfig;
