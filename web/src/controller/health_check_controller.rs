use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::response::health::HealthResponse;

/// GET report that the API router is up and responding to requests.
/// Answers the same whether or not the providers are configured.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::HEALTHY))
}
