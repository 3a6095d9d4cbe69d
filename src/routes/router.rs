use crate::config::CorsConfig;
use crate::middleware::request_id_middleware;
use axum::middleware;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::fallback;
use super::health;
use super::url_handlers;
use super::AppState;

/// Create application router
pub fn create_router(state: Arc<AppState>, cors_config: &CorsConfig) -> axum::Router {
    // Configure CORS with specific origins
    let cors = if cors_config.allows_any() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|s| s.parse::<http::HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let health_routes = axum::Router::new()
        .route("/", get(health::health_check))
        .route("/api/health", get(health::api_health));

    let url_routes = axum::Router::new()
        .route("/api/shorten", post(url_handlers::shorten_url))
        .route("/api/stats/{code}", get(url_handlers::get_url_stats))
        .route("/{code}", get(url_handlers::redirect_to_url));

    health_routes
        .merge(url_routes)
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
