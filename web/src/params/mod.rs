//! This module holds typed parameters for the endpoint inputs, together with the
//! validation that turns them into domain requests.
//!
//! Bodies are decoded leniently: anything that does not decode into the expected
//! shape (empty body, invalid JSON, non-object, wrong scalar type) is treated as an
//! absent body, and each endpoint answers that with its own "required" message.

use log::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) mod email;
pub(crate) mod summary;

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Option<T> {
    // serde would happily fill a struct from a JSON array, so objects are checked for first
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) => {
            debug!("Treating non-object request body as absent");
            return None;
        }
        Err(err) => {
            debug!("Treating undecodable request body as absent: {err}");
            return None;
        }
    };

    serde_json::from_value(value)
        .map_err(|err| debug!("Treating request body with mistyped fields as absent: {err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        name: Option<String>,
    }

    #[test]
    fn test_decode_returns_none_for_unusable_bodies() {
        assert_eq!(decode::<Probe>(b""), None);
        assert_eq!(decode::<Probe>(b"{not json"), None);
        assert_eq!(decode::<Probe>(b"[1, 2]"), None);
        assert_eq!(decode::<Probe>(br#"["x"]"#), None);
        assert_eq!(decode::<Probe>(b"null"), None);
        assert_eq!(decode::<Probe>(br#"{"name": 5}"#), None);
    }

    #[test]
    fn test_decode_accepts_objects_with_missing_fields() {
        assert_eq!(decode::<Probe>(b"{}"), Some(Probe { name: None }));
        assert_eq!(
            decode::<Probe>(br#"{"name": "x", "extra": true}"#),
            Some(Probe {
                name: Some("x".to_string())
            })
        );
    }
}
