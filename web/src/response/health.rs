use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) message: &'static str,
}

impl HealthResponse {
    pub(crate) const HEALTHY: HealthResponse = HealthResponse {
        status: "healthy",
        message: "Meeting Summarizer API is running",
    };
}
