use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use domain::error::{DomainErrorKind, Error as DomainError, InternalErrorKind};
use log::*;

use crate::response::ErrorResponse;

pub(crate) const INTERNAL_SERVER_ERROR: &str = "Internal server error";

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// Validation failures and provider failures carry messages meant for the client.
// Anything else internal is reported generically so no server detail leaks out.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0.error_kind {
            DomainErrorKind::Internal(InternalErrorKind::Validation(message)) => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            DomainErrorKind::Internal(internal_error_kind) => {
                error!("Unhandled internal error: {internal_error_kind:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR.to_string(),
                )
            }
            DomainErrorKind::External(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.message().to_string())
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::error::ExternalErrorKind;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_errors_are_bad_requests() {
        let response = Error::from(DomainError::validation("Transcript is required")).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Transcript is required"})
        );
    }

    #[tokio::test]
    async fn test_external_errors_expose_their_description() {
        let err = DomainError {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Network(
                "Failed to send email: Connection refused".to_string(),
            )),
        };
        let response = Error::from(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Failed to send email: Connection refused"})
        );
    }

    #[tokio::test]
    async fn test_internal_errors_are_reported_generically() {
        let response = Error::from(DomainError::config("MAIL_PASSWORD=hunter2")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Internal server error"})
        );
    }
}
