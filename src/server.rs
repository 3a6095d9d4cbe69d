//! Server startup and shutdown logic.
//!
//! This module contains the `run_server` function which handles:
//! - Store creation
//! - Application state creation
//! - Router creation
//! - Server binding and graceful shutdown

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes;
use crate::services::ShortCodeGenerator;
use crate::state::AppState;
use crate::store::UrlStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Build the application router for `config` around a fresh, empty store.
pub fn build_app(config: &Config) -> axum::Router {
    let generator = ShortCodeGenerator::new(
        config.url.short_code_length,
        config.url.short_code_max_attempts,
    );
    let state = Arc::new(AppState::new(
        UrlStore::new(generator),
        config.url.base_url.clone(),
    ));

    routes::create_router(state, &config.cors)
}

/// Run the web server with the given configuration.
///
/// # Errors
///
/// This function will return an error if:
/// - Server binding fails
/// - Server runtime error occurs
pub async fn run_server(config: Config) -> AppResult<()> {
    info!("Starting snaplink server...");

    let app = build_app(&config);
    let addr = config.server.addr();

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);
    info!("Base URL: {}", config.url.base_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(create_shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C. If a handler cannot be
/// installed the corresponding branch never resolves.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;

    info!("Shutdown signal received");
}
