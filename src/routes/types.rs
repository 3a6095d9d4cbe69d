use serde::Serialize;

/// Root liveness response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub service: String,
}

/// API health response
#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    pub status: String,
    pub message: String,
    pub urls: usize,
}
