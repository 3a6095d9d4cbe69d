use crate::store::UrlStore;

/// Application state shared across all HTTP handlers.
///
/// Wrapped in `Arc` and handed to each handler through Axum's `State`
/// extraction. The store is created once at startup and lives until the
/// process exits.
#[derive(Clone)]
pub struct AppState {
    /// In-memory URL store
    pub store: UrlStore,

    /// Base URL for constructing short URLs (e.g., "http://localhost:5000")
    pub base_url: String,
}

impl AppState {
    pub fn new(store: UrlStore, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }
}
