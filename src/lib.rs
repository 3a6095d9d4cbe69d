//! snaplink - a concurrent in-memory URL shortener.
//!
//! The [`store::UrlStore`] is the only shared mutable state: it maps short
//! codes to [`models::UrlRecord`]s, deduplicates repeated submissions of the
//! same URL, and counts clicks. Everything else is the HTTP surface around it.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
pub mod store;
pub mod util;

pub use error::{AppError, AppResult};
pub use store::UrlStore;
