//! Validation of user-submitted URLs before they reach the store.

use crate::error::{AppError, AppResult};
use url::Url as UrlParser;

/// Shortest accepted network location (host plus optional `:port`).
const MIN_NETLOC_LEN: usize = 3;

/// Trim surrounding whitespace from a submitted URL.
pub fn sanitize_url(raw: &str) -> String {
    raw.trim().to_string()
}

/// Check that `url` is an absolute http(s) URL with a plausible host.
pub fn validate_url(url: &str) -> AppResult<()> {
    if url.is_empty() {
        return Err(AppError::InvalidUrl("URL cannot be empty".to_string()));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::InvalidUrl(
            "URL must start with http:// or https://".to_string(),
        ));
    }

    let parsed = UrlParser::parse(url)
        .map_err(|_| AppError::InvalidUrl("Invalid URL format".to_string()))?;

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| AppError::InvalidUrl("Invalid URL format".to_string()))?;

    let netloc_len = host.len() + parsed.port().map_or(0, |p| p.to_string().len() + 1);
    if netloc_len < MIN_NETLOC_LEN {
        return Err(AppError::InvalidUrl("Invalid domain name".to_string()));
    }

    Ok(())
}
