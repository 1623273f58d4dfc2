use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use log::*;

pub(crate) mod email_controller;
pub(crate) mod fallback_controller;
pub(crate) mod health_check_controller;
pub(crate) mod summary_controller;

/// A body that could not be buffered is handled like a missing one, so the
/// endpoint answers with its usual "required" validation message.
pub(crate) fn body_or_empty(body: Result<Bytes, BytesRejection>) -> Bytes {
    body.unwrap_or_else(|rejection| {
        warn!("Failed to read request body: {rejection}");
        Bytes::new()
    })
}
