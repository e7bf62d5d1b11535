//! Single-slot TTL cache for the decrypted matrix.
//!
//! One taxonomy is cached at a time; the slot is replaced wholesale on
//! refresh. The slot's mutex is held across the whole refresh in
//! [`crate::client::MatrixClient::load`], so concurrent cold-cache callers
//! coalesce on a single fetch+decrypt instead of racing.

use std::time::Instant;

use archon_core::models::CacheStatus;
use tokio::sync::Mutex;

/// A cached decrypted matrix with its load time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub matrix: serde_json::Value,
    pub fetched_at: Instant,
}

impl CacheEntry {
    pub fn new(matrix: serde_json::Value) -> Self {
        Self {
            matrix,
            fetched_at: Instant::now(),
        }
    }

    /// Age in milliseconds.
    pub fn age_ms(&self) -> u64 {
        self.fetched_at.elapsed().as_millis() as u64
    }

    pub fn expired(&self, ttl_ms: u64) -> bool {
        self.age_ms() >= ttl_ms
    }
}

/// The cache itself: one mutex-guarded slot plus its TTL.
#[derive(Debug)]
pub struct MatrixCache {
    pub(crate) slot: Mutex<Option<CacheEntry>>,
    ttl_ms: u64,
}

impl MatrixCache {
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl_ms,
        }
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    /// Evict the entry unconditionally.
    pub async fn clear(&self) {
        *self.slot.lock().await = None;
        tracing::debug!("matrix cache cleared");
    }

    /// Report presence and age without forcing a load.
    pub async fn status(&self) -> CacheStatus {
        let slot = self.slot.lock().await;
        CacheStatus {
            cached: slot.is_some(),
            age_ms: slot.as_ref().map(CacheEntry::age_ms),
            ttl_ms: self.ttl_ms,
        }
    }
}
