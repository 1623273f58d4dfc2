//! Gemini API client for summary generation.
//!
//! Calls the `generateContent` REST endpoint of the Generative Language API and maps
//! every failure onto the provider-agnostic `meeting_ai::Error` variants.

use crate::error::Error;
use async_trait::async_trait;
use log::*;
use meeting_ai::traits::generation::Provider;
use meeting_ai::{Error as ProviderError, GenerationConfig};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use service::config::Config;
use std::time::Duration;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

/// Decoding parameters in the shape Gemini expects
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

/// Response from `generateContent`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl From<&GenerationConfig> for GeminiGenerationConfig {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

impl GenerateContentRequest {
    pub fn new(prompt: &str, config: &GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: config.into(),
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, or a description of why there is none.
    pub fn into_text(self) -> Result<String, ProviderError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ProviderError::Provider(format!(
                "Prompt was blocked: {reason}"
            )));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Provider("Response contained no candidates".into()))?;

        let text: Vec<String> = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            let reason = candidate
                .finish_reason
                .unwrap_or_else(|| "UNKNOWN".to_string());
            return Err(ProviderError::Provider(format!(
                "Response contained no text (finish reason: {reason})"
            )));
        }

        Ok(text.concat())
    }
}

/// Gemini API client
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a new Gemini client from the process configuration.
    ///
    /// A missing API key is not an error here; it is reported on the first call instead.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.gemini_timeout_secs))
            .build()
            .map_err(|err| {
                warn!("Failed to build Gemini HTTP client: {err:?}");
                Error::config(format!("Failed to build Gemini HTTP client: {err}"))
            })?;

        Ok(Self {
            client,
            base_url: config.gemini_base_url().to_string(),
            model: config.gemini_model().to_string(),
            api_key: config.gemini_api_key(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn auth_header(&self) -> Result<reqwest::header::HeaderValue, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            warn!("Gemini API key is not configured");
            ProviderError::Configuration("GEMINI_API_KEY is not set".to_string())
        })?;

        let mut header = reqwest::header::HeaderValue::from_str(api_key).map_err(|e| {
            warn!("Failed to create Gemini auth header: {:?}", e);
            ProviderError::Configuration("Invalid API key format".to_string())
        })?;
        header.set_sensitive(true);
        Ok(header)
    }
}

#[async_trait]
impl Provider for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, ProviderError> {
        let auth_header = self.auth_header()?;
        let request = GenerateContentRequest::new(prompt, config);

        debug!(
            "Requesting Gemini generation with model {} (prompt length {})",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.request_url())
            .header(API_KEY_HEADER, auth_header)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to call Gemini: {:?}", e);
                map_transport_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API: {} - {}", status, error_text);
            return Err(map_status_error(status, error_text));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse Gemini response: {:?}", e);
            if e.is_timeout() {
                ProviderError::Timeout(e.to_string())
            } else {
                ProviderError::Deserialization(format!("Invalid response from Gemini: {e}"))
            }
        })?;

        payload.into_text()
    }
}

fn map_transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(err.to_string())
    } else if err.is_builder() {
        ProviderError::Configuration(err.to_string())
    } else if err.is_connect() || err.is_request() {
        ProviderError::Network(err.to_string())
    } else {
        // Redirect loops and body failures are neither network nor provider answers
        ProviderError::Other(Box::new(err))
    }
}

fn map_status_error(status: StatusCode, body: String) -> ProviderError {
    let detail = format!("{status}: {body}");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Authentication(detail),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited(detail),
        _ => ProviderError::Provider(detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mockito::{Matcher, Server};
    use serde_json::json;

    const MODEL_PATH: &str = "/models/gemini-2.5-flash-lite:generateContent";

    fn config_for(server_url: &str, api_key: Option<&str>) -> Config {
        let mut config = Config::try_parse_from(["meeting_summarizer"])
            .unwrap()
            .set_gemini_base_url(server_url.to_string());
        if let Some(key) = api_key {
            config = config.set_gemini_api_key(key.to_string());
        }
        config
    }

    fn client_with_key(config: &Config) -> GeminiClient {
        // GEMINI_MODEL may be set in the host environment
        GeminiClient {
            model: "gemini-2.5-flash-lite".to_string(),
            ..GeminiClient::new(config).unwrap()
        }
    }

    #[test]
    fn test_request_serialization_uses_gemini_field_names() {
        let request =
            GenerateContentRequest::new("Summarize this", &GenerationConfig::new(0.3, 2000));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Summarize this"}]}],
                "generationConfig": {"temperature": 0.3, "maxOutputTokens": 2000}
            })
        );
    }

    #[test]
    fn test_into_text_concatenates_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Team agreed "}, {"text": "to ship Friday."}]}},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();

        assert_eq!(response.into_text().unwrap(), "Team agreed to ship Friday.");
    }

    #[test]
    fn test_into_text_reports_blocked_prompts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();

        let err = response.into_text().unwrap_err();
        assert_eq!(err.to_string(), "Provider error: Prompt was blocked: SAFETY");
    }

    #[test]
    fn test_into_text_reports_finish_reason_when_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "MAX_TOKENS"}]
        }))
        .unwrap();

        let err = response.into_text().unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mut server = Server::new_async().await;
        let config = config_for(&server.url(), Some("test_api_key_123"));
        let client = client_with_key(&config);

        let mock = server
            .mock("POST", MODEL_PATH)
            .match_header(API_KEY_HEADER, "test_api_key_123")
            .match_body(Matcher::PartialJson(json!({
                "generationConfig": {"temperature": 0.3, "maxOutputTokens": 2000}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{
                        "content": {"role": "model", "parts": [{"text": "Team agreed to ship Friday."}]},
                        "finishReason": "STOP"
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let text = client
            .generate("prompt", &GenerationConfig::new(0.3, 2000))
            .await
            .unwrap();

        assert_eq!(text, "Team agreed to ship Friday.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_maps_unauthorized_to_authentication() {
        let mut server = Server::new_async().await;
        let config = config_for(&server.url(), Some("bad_key"));
        let client = client_with_key(&config);

        let _mock = server
            .mock("POST", MODEL_PATH)
            .with_status(403)
            .with_body("API key not valid")
            .create_async()
            .await;

        let err = client
            .generate("prompt", &GenerationConfig::new(0.3, 2000))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Authentication(_)));
        assert!(err.to_string().contains("API key not valid"));
    }

    #[tokio::test]
    async fn test_generate_maps_quota_errors_to_rate_limited() {
        let mut server = Server::new_async().await;
        let config = config_for(&server.url(), Some("test_api_key_123"));
        let client = client_with_key(&config);

        let _mock = server
            .mock("POST", MODEL_PATH)
            .with_status(429)
            .with_body("RESOURCE_EXHAUSTED")
            .create_async()
            .await;

        let err = client
            .generate("prompt", &GenerationConfig::new(0.3, 2000))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::RateLimited(_)));
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_bodies() {
        let mut server = Server::new_async().await;
        let config = config_for(&server.url(), Some("test_api_key_123"));
        let client = client_with_key(&config);

        let _mock = server
            .mock("POST", MODEL_PATH)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client
            .generate("prompt", &GenerationConfig::new(0.3, 2000))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_generate_without_api_key_never_calls_the_api() {
        let mut server = Server::new_async().await;
        let config = config_for(&server.url(), None);
        let client = GeminiClient {
            api_key: None,
            ..client_with_key(&config)
        };

        let mock = server
            .mock("POST", MODEL_PATH)
            .expect(0)
            .create_async()
            .await;

        let err = client
            .generate("prompt", &GenerationConfig::new(0.3, 2000))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Configuration(_)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_maps_redirect_loops_to_other() {
        let mut server = Server::new_async().await;
        let config = config_for(&server.url(), Some("test_api_key_123"));
        let client = client_with_key(&config);

        let _mock = server
            .mock("POST", MODEL_PATH)
            .with_status(307)
            .with_header("location", &format!("{}{}", server.url(), MODEL_PATH))
            .create_async()
            .await;

        let err = client
            .generate("prompt", &GenerationConfig::new(0.3, 2000))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Other(_)));
        assert!(err.to_string().starts_with("Other error: "));
    }

    #[tokio::test]
    async fn test_generate_maps_connection_failures_to_network() {
        // Nothing listens on the tcpmux port on loopback
        let config = config_for("http://127.0.0.1:1", Some("test_api_key_123"));
        let client = client_with_key(&config);

        let err = client
            .generate("prompt", &GenerationConfig::new(0.3, 2000))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Network(_)));
    }
}
