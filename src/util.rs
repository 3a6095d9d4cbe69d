//! Utility functions for general-purpose use across the application.

/// Build the absolute short URL for `short_code`.
///
/// # Examples
///
/// ```
/// use snaplink::util::format_short_url;
///
/// assert_eq!(
///     format_short_url("http://localhost:5000/", "abc123"),
///     "http://localhost:5000/abc123"
/// );
/// ```
pub fn format_short_url(base_url: &str, short_code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), short_code)
}
