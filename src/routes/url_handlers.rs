use crate::error::{AppError, AppResult};
use crate::models::{ShortenRequest, ShortenResponse, UrlStats};
use crate::services::url_validation::{sanitize_url, validate_url};
use crate::util::format_short_url;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;
use validator::Validate;

use super::AppState;

/// Create a short URL
pub async fn shorten_url(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(rejection_to_error)?;

    payload
        .validate()
        .map_err(|e| AppError::InvalidUrl(format!("Validation failed: {}", e)))?;

    let raw_url = payload
        .url
        .ok_or_else(|| AppError::InvalidRequest("URL is required".to_string()))?;

    let original_url = sanitize_url(&raw_url);
    validate_url(&original_url)?;

    let short_code = state.store.shorten(&original_url)?;
    let short_url = format_short_url(&state.base_url, &short_code);

    let response = ShortenResponse {
        short_code,
        short_url,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Resolve a short code, count the click, and redirect
pub async fn redirect_to_url(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> AppResult<Response> {
    let record = state.store.resolve(&code)?;
    state.store.record_click(&code)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, record.original_url)]).into_response())
}

/// Get click statistics for a short code
pub async fn get_url_stats(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> AppResult<Json<UrlStats>> {
    let stats = state.store.stats(&code)?;
    Ok(Json(stats))
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::InvalidRequest("Content-Type must be application/json".to_string())
        }
        other => AppError::InvalidRequest(format!("Invalid JSON body: {}", other.body_text())),
    }
}
