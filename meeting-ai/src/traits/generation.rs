//! Generative-text provider trait.

use crate::types::generation::GenerationConfig;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for LLM-powered text generation from a fully composed prompt.
///
/// Implementations wrap a single vendor API call (Gemini, OpenAI, Claude) and return
/// the raw generated text. Callers own prompt composition and decoding parameters,
/// so providers stay free of any meeting-specific logic.
/// Implementations must be safe to share between concurrent requests.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Generate text for `prompt` using the given decoding configuration.
    ///
    /// Returns the provider's text verbatim; no trimming or post-processing is applied.
    /// Every vendor failure (auth, quota, network, malformed response) is mapped
    /// to an [`Error`] variant rather than panicking.
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<String, Error>;
}
