//! Summary generation for meeting transcripts.

use crate::error::Error;
use crate::prompts::{build_summary_prompt, DEFAULT_INSTRUCTION};
use log::*;
use meeting_ai::traits::generation::Provider;
use meeting_ai::GenerationConfig;

/// Sampling temperature used for every summary.
pub const SUMMARY_TEMPERATURE: f64 = 0.3;

/// Upper bound on the length of a generated summary, in tokens.
pub const SUMMARY_MAX_OUTPUT_TOKENS: u32 = 2000;

/// A validated request to summarize a transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub transcript: String,
    pub custom_prompt: String,
}

impl SummaryRequest {
    /// Creates a request, substituting the default instruction when none is given.
    pub fn new(transcript: String, custom_prompt: Option<String>) -> Self {
        Self {
            transcript,
            custom_prompt: custom_prompt.unwrap_or_else(|| DEFAULT_INSTRUCTION.to_string()),
        }
    }
}

pub fn generation_config() -> GenerationConfig {
    GenerationConfig::new(SUMMARY_TEMPERATURE, SUMMARY_MAX_OUTPUT_TOKENS)
}

/// Generates a summary for `request` with the given provider.
///
/// The provider's text is returned untouched. Any provider failure is logged and
/// returned as an external error described as `Failed to generate summary: ...`.
pub async fn generate(provider: &dyn Provider, request: &SummaryRequest) -> Result<String, Error> {
    let prompt = build_summary_prompt(&request.custom_prompt, &request.transcript);

    match provider.generate(&prompt, &generation_config()).await {
        Ok(summary) => {
            info!(
                "Summary generated successfully for transcript of length {}",
                request.transcript.chars().count()
            );
            Ok(summary)
        }
        Err(err) => {
            error!("Error generating summary: {err}");
            Err(Error::from(err).in_context("Failed to generate summary"))
        }
    }
}
