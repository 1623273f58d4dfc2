use super::Status;
use serde::Serialize;

/// Body of a successful `POST /api/generate-summary`
#[derive(Debug, Serialize)]
pub(crate) struct GenerateSummaryResponse {
    pub(crate) summary: String,
    pub(crate) status: Status,
}

impl GenerateSummaryResponse {
    pub(crate) fn new(summary: String) -> Self {
        Self {
            summary,
            status: Status::Success,
        }
    }
}
