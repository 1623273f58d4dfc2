use super::Status;
use serde::Serialize;

/// Body of a successful `POST /api/send-email`
#[derive(Debug, Serialize)]
pub(crate) struct SendEmailResponse {
    pub(crate) message: String,
    pub(crate) status: Status,
}

impl SendEmailResponse {
    pub(crate) fn new(message: String) -> Self {
        Self {
            message,
            status: Status::Success,
        }
    }
}
