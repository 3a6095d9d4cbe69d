//! Process-wide in-memory URL store.
//!
//! A single [`RwLock`] guards both the forward map (`short_code -> record`)
//! and the reverse index (`original_url -> short_code`). Every mutation runs
//! its whole check-and-insert sequence under the write guard, so two callers
//! can never be handed the same fresh code and the two maps never disagree.

use crate::error::{AppError, AppResult};
use crate::models::{UrlRecord, UrlStats};
use crate::services::ShortCodeGenerator;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct StoreInner {
    records: HashMap<String, UrlRecord>,
    by_url: HashMap<String, String>,
}

/// Concurrent mapping from short code to [`UrlRecord`].
///
/// Cloning is cheap and yields a handle to the same underlying maps.
#[derive(Debug, Clone)]
pub struct UrlStore {
    inner: Arc<RwLock<StoreInner>>,
    generator: Arc<ShortCodeGenerator>,
}

impl Default for UrlStore {
    fn default() -> Self {
        Self::new(ShortCodeGenerator::default())
    }
}

impl UrlStore {
    /// Create an empty store that draws codes from `generator`.
    pub fn new(generator: ShortCodeGenerator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
            generator: Arc::new(generator),
        }
    }

    /// Return the short code for `original_url`, creating one if needed.
    ///
    /// Submitting the exact same string again returns the code it was first
    /// given. If no free code is found within the generator's retry budget
    /// the store is left untouched and `ShortCodeGenerationFailed` is returned.
    pub fn shorten(&self, original_url: &str) -> AppResult<String> {
        let mut inner = self.inner.write();

        if let Some(existing) = inner.by_url.get(original_url) {
            debug!(short_code = %existing, "Reusing existing short code");
            return Ok(existing.clone());
        }

        let short_code = self
            .generator
            .generate(|candidate| inner.records.contains_key(candidate))?;

        let record = UrlRecord::new(short_code.clone(), original_url.to_string());
        inner.records.insert(short_code.clone(), record);
        inner
            .by_url
            .insert(original_url.to_string(), short_code.clone());

        info!(short_code = %short_code, "Created short URL");
        Ok(short_code)
    }

    /// Look up the record for `short_code` without touching its click count.
    pub fn resolve(&self, short_code: &str) -> AppResult<UrlRecord> {
        self.inner
            .read()
            .records
            .get(short_code)
            .cloned()
            .ok_or_else(|| AppError::UrlNotFound(short_code.to_string()))
    }

    /// Increment the click count of `short_code` by exactly one.
    pub fn record_click(&self, short_code: &str) -> AppResult<()> {
        let mut inner = self.inner.write();
        let record = inner
            .records
            .get_mut(short_code)
            .ok_or_else(|| AppError::UrlNotFound(short_code.to_string()))?;

        record.click_count += 1;
        Ok(())
    }

    /// Consistent snapshot of the public fields of `short_code`.
    pub fn stats(&self, short_code: &str) -> AppResult<UrlStats> {
        self.inner
            .read()
            .records
            .get(short_code)
            .map(UrlStats::from)
            .ok_or_else(|| AppError::UrlNotFound(short_code.to_string()))
    }

    /// Whether `short_code` has been issued.
    pub fn contains(&self, short_code: &str) -> bool {
        self.inner.read().records.contains_key(short_code)
    }

    /// Number of stored URLs.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
