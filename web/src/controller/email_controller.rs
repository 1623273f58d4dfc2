use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::controller::body_or_empty;
use crate::params::email::SendEmailParams;
use crate::response::email::SendEmailResponse;
use crate::{AppState, Error};
use domain::emails as EmailsApi;
use log::*;

/// POST send a finalized summary to a list of recipients
pub async fn send(
    State(app_state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, Error> {
    let request = SendEmailParams::validate(&body_or_empty(body))?;

    debug!(
        "POST Send Summary Email to {} recipient(s)",
        request.recipients.len()
    );

    let message = EmailsApi::send_summary_email(app_state.mail_relay(), &request).await?;

    Ok((StatusCode::OK, Json(SendEmailResponse::new(message))))
}
