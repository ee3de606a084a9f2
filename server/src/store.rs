use dashmap::DashMap;
use std::sync::Arc;

use crate::{
    code::{decode_code, derive_code, encode_code},
    error::ShrinkError,
    models::UrlRecord,
};

/// Number of distinct codes; no store can ever hold more records.
pub const CODE_SPACE: usize = 1 << 16;

/// Thread-safe mapping of short code -> [`UrlRecord`].
///
/// Backed by a DashMap, so every operation locks only the shard owning its
/// code. `shrink` is a single insert and `resolve` increments the hit count
/// while holding the shard's write guard, which keeps both atomic per code.
///
/// Cloning is cheap and every clone shares the same records.
#[derive(Clone, Debug)]
pub struct ShrinkStore {
    inner: Arc<DashMap<u16, UrlRecord>>,
}

impl ShrinkStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Pre-size the map. The hint is clamped to [`CODE_SPACE`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(DashMap::with_capacity(capacity.min(CODE_SPACE))),
        }
    }

    /// Map `url` to its derived code and return the code.
    ///
    /// Any record already stored under that code is replaced, including its
    /// hit count, even when it belongs to a different URL.
    pub fn shrink(&self, url: impl Into<String>) -> u16 {
        let url = url.into();
        let code = derive_code(&url);

        if let Some(previous) = self.inner.insert(code, UrlRecord::new(url)) {
            tracing::debug!(
                code = %encode_code(code),
                previous_url = %previous.url,
                previous_hits = previous.hits,
                "Replaced existing mapping"
            );
        }

        code
    }

    /// Look up the URL for `code` and count the hit.
    pub fn resolve(&self, code: u16) -> Result<String, ShrinkError> {
        match self.inner.get_mut(&code) {
            Some(mut record) => {
                record.hits = record.hits.saturating_add(1);
                Ok(record.url.clone())
            }
            None => {
                tracing::debug!(code = %encode_code(code), "Code not found");
                Err(ShrinkError::NotFound(code))
            }
        }
    }

    /// Decode an external code, then [`resolve`](Self::resolve) it.
    pub fn resolve_str(&self, raw: &str) -> Result<String, ShrinkError> {
        let code = decode_code(raw)?;
        self.resolve(code)
    }

    /// Snapshot of the record under `code`. Does not count as a hit.
    pub fn record(&self, code: u16) -> Option<UrlRecord> {
        self.inner.get(&code).map(|r| r.clone())
    }

    /// Number of codes currently mapped.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for ShrinkStore {
    fn default() -> Self {
        Self::new()
    }
}
