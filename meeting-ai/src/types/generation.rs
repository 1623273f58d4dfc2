//! Types for text generation operations.

use serde::{Deserialize, Serialize};

/// Decoding parameters sent along with every generation request.
///
/// Lower temperatures keep summaries factual and repeatable; the token cap bounds
/// both latency and cost for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    pub fn new(temperature: f64, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            max_output_tokens,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            max_output_tokens: 1024,
        }
    }
}
