use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::controller::body_or_empty;
use crate::params::summary::GenerateSummaryParams;
use crate::response::summary::GenerateSummaryResponse;
use crate::{AppState, Error};
use domain::summary as SummaryApi;
use log::*;

/// POST generate a summary of a meeting transcript
///
/// The body is read raw so that malformed JSON is reported with the same
/// validation message as a missing transcript.
pub async fn generate(
    State(app_state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, Error> {
    let request = GenerateSummaryParams::validate(&body_or_empty(body))?;

    debug!(
        "POST Generate Summary for transcript of {} chars",
        request.transcript.chars().count()
    );

    let summary = SummaryApi::generate(app_state.summary_provider(), &request).await?;

    Ok((StatusCode::OK, Json(GenerateSummaryResponse::new(summary))))
}
