//! Time-bounded in-memory cache for the sheet CSV.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// How long one resolved CSV stays valid.
pub const SHEET_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

struct CacheEntry {
    csv: String,
    stored_at: Instant,
}

/// One-slot cache, explicitly owned by the proxy rather than living as
/// module-global state, so tests and multiple instances stay isolated.
pub struct SheetCache {
    ttl: Duration,
    slot: Mutex<Option<CacheEntry>>,
}

impl SheetCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: Mutex::new(None) }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(SHEET_CACHE_TTL)
    }

    /// The cached CSV, or None when the slot is empty or expired.
    pub async fn get(&self) -> Option<String> {
        let slot = self.slot.lock().await;
        slot.as_ref()
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.csv.clone())
    }

    pub async fn set(&self, csv: String) {
        let mut slot = self.slot.lock().await;
        *slot = Some(CacheEntry { csv, stored_at: Instant::now() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_cache_misses() {
        let cache = SheetCache::with_default_ttl();
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = SheetCache::with_default_ttl();
        cache.set("a,b,c".to_string()).await;
        assert_eq!(cache.get().await.as_deref(), Some("a,b,c"));
    }

    #[tokio::test]
    async fn test_expired_entry_misses() {
        let cache = SheetCache::new(Duration::ZERO);
        cache.set("a,b,c".to_string()).await;
        assert!(cache.get().await.is_none());
    }
}
