use crate::routes::types::{ApiHealthResponse, HealthCheckResponse};
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use super::AppState;

/// Root liveness check
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        service: "URL Shortener API".to_string(),
    })
}

/// API health check, including the number of stored URLs
pub async fn api_health(State(state): State<Arc<AppState>>) -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "ok".to_string(),
        message: "URL Shortener API is running".to_string(),
        urls: state.store.len(),
    })
}
