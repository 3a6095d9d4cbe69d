use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A shortened URL held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: u64,
}

impl UrlRecord {
    /// A fresh record with no clicks, stamped with the current time.
    pub fn new(short_code: String, original_url: String) -> Self {
        Self {
            short_code,
            original_url,
            created_at: Utc::now(),
            click_count: 0,
        }
    }
}

/// Snapshot of a record's public fields, as returned by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlStats {
    pub url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<&UrlRecord> for UrlStats {
    fn from(record: &UrlRecord) -> Self {
        UrlStats {
            url: record.original_url.clone(),
            clicks: record.click_count,
            created_at: record.created_at,
        }
    }
}

/// Request to create a short URL
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: Option<String>,
}

/// Response after creating a short URL
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}
