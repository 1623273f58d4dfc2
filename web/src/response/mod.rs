//! Response bodies returned by the API. Every endpoint answers with a flat JSON
//! object; failures always carry a single `error` string.

use serde::Serialize;

pub(crate) mod email;
pub(crate) mod health;
pub(crate) mod summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Status {
    Success,
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub(crate) error: String,
}

impl ErrorResponse {
    pub(crate) fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_status_as_lowercase() {
        assert_eq!(serde_json::to_value(Status::Success).unwrap(), json!("success"));
    }

    #[test]
    fn test_serialize_error_response() {
        let serialized = serde_json::to_string(&ErrorResponse::new("Endpoint not found")).unwrap();
        assert_eq!(serialized, json!({"error": "Endpoint not found"}).to_string());
    }
}
