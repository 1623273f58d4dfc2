use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::INTERNAL_SERVER_ERROR;
use crate::response::ErrorResponse;
use log::*;

pub(crate) const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

/// Answers any request that matched no route, or matched a route with a method it does not serve.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(ENDPOINT_NOT_FOUND)),
    )
}

/// Converts a panic caught by `CatchPanicLayer` into a generic 500 response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!("Handler panicked: {details}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(INTERNAL_SERVER_ERROR)),
    )
        .into_response()
}
