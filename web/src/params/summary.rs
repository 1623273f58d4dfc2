use domain::error::Error as DomainError;
use domain::summary::SummaryRequest;
use log::*;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::decode;

pub(crate) const TRANSCRIPT_REQUIRED: &str = "Transcript is required";
pub(crate) const TRANSCRIPT_EMPTY: &str = "Transcript cannot be empty";

/// Parameters accepted by `POST /api/generate-summary`
///
/// # Fields
///
/// * `transcript` - Raw meeting notes to summarize; must contain non-whitespace text
/// * `custom_prompt` - Optional instruction; defaults to a generic summary instruction
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateSummaryParams {
    pub(crate) transcript: Option<String>,
    #[serde(default, deserialize_with = "instruction_or_default")]
    pub(crate) custom_prompt: Option<String>,
}

/// A `custom_prompt` that is not a string falls back to the default instruction
/// rather than making the whole body unreadable.
fn instruction_or_default<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(instruction)) => Ok(Some(instruction)),
        Some(other) => {
            debug!("Ignoring custom_prompt that is not a string: {other}");
            Ok(None)
        }
        None => Ok(None),
    }
}

impl GenerateSummaryParams {
    /// Decode and validate a raw request body.
    pub(crate) fn validate(body: &[u8]) -> Result<SummaryRequest, DomainError> {
        decode::<Self>(body)
            .ok_or_else(|| DomainError::validation(TRANSCRIPT_REQUIRED))?
            .try_into()
    }
}

impl TryFrom<GenerateSummaryParams> for SummaryRequest {
    type Error = DomainError;

    fn try_from(params: GenerateSummaryParams) -> Result<Self, Self::Error> {
        let transcript = params
            .transcript
            .ok_or_else(|| DomainError::validation(TRANSCRIPT_REQUIRED))?;

        if transcript.trim().is_empty() {
            return Err(DomainError::validation(TRANSCRIPT_EMPTY));
        }

        Ok(SummaryRequest::new(transcript, params.custom_prompt))
    }
}
