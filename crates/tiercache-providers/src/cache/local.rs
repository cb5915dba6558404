//! Local LRU cache provider
//!
//! Bounded in-process tier. A `parking_lot` mutex guards an `lru::LruCache`
//! whose entries carry their own expiry instant, so eviction is strictly
//! least-recently-used while expiry is per entry.
//!
//! Time is read from `tokio::time::Instant`, which lets tests drive expiry
//! with a paused clock.
//!
//! ## Example
//!
//! ```ignore
//! use tiercache_providers::cache::LocalLruCache;
//! use std::time::Duration;
//!
//! let l1 = LocalLruCache::with_config(500, Duration::from_secs(15), Duration::from_secs(30))?;
//! ```

use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::time::Duration;
use tiercache_domain::constants::{
    LOCAL_CACHE_MAX_ENTRIES, LOCAL_COLLECTION_TTL_MS, LOCAL_ENTITY_TTL_MS,
};
use tiercache_domain::error::{Error, Result};
use tiercache_domain::ports::LocalCacheProvider;
use tiercache_domain::value_objects::{
    CacheKey, CachedValue, KeyKind, LocalCacheStats, TierCounters,
};
use tokio::time::Instant;
use tracing::debug;

struct LocalEntry {
    value: CachedValue,
    /// `None` when the TTL reaches past the clock's range
    expires_at: Option<Instant>,
}

impl LocalEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| at > now)
    }
}

/// LRU-evicting local cache with per-entry TTL
pub struct LocalLruCache {
    entries: Mutex<LruCache<String, LocalEntry>>,
    counters: TierCounters,
    max_entries: usize,
    entity_ttl: Duration,
    collection_ttl: Duration,
}

impl LocalLruCache {
    /// Create a local cache with the default capacity and TTLs
    pub fn new() -> Self {
        let capacity = NonZeroUsize::new(LOCAL_CACHE_MAX_ENTRIES).unwrap_or(NonZeroUsize::MIN);
        Self::build(
            capacity,
            Duration::from_millis(LOCAL_ENTITY_TTL_MS),
            Duration::from_millis(LOCAL_COLLECTION_TTL_MS),
        )
    }

    /// Create a local cache with explicit capacity and default TTLs
    pub fn with_config(
        max_entries: usize,
        entity_ttl: Duration,
        collection_ttl: Duration,
    ) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_entries)
            .ok_or_else(|| Error::configuration("Local cache capacity must be greater than 0"))?;
        Ok(Self::build(capacity, entity_ttl, collection_ttl))
    }

    fn build(capacity: NonZeroUsize, entity_ttl: Duration, collection_ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            counters: TierCounters::new(),
            max_entries: capacity.get(),
            entity_ttl,
            collection_ttl,
        }
    }

    /// Capacity fixed at construction
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Number of entries held, expired-but-unpurged ones included
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True when nothing is held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LocalLruCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalCacheProvider for LocalLruCache {
    fn get(&self, key: &CacheKey) -> Option<CachedValue> {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        // Some(None) means the key is held but expired
        let lookup = entries
            .get(key.as_str())
            .map(|entry| entry.is_live(now).then(|| entry.value.clone()));

        match lookup {
            Some(Some(value)) => {
                self.counters.record_hit();
                Some(value)
            }
            Some(None) => {
                entries.pop(key.as_str());
                self.counters.record_miss();
                None
            }
            None => {
                self.counters.record_miss();
                None
            }
        }
    }

    fn peek(&self, key: &CacheKey) -> Option<CachedValue> {
        let now = Instant::now();
        self.entries
            .lock()
            .peek(key.as_str())
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone())
    }

    fn set(&self, key: &CacheKey, value: CachedValue, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or_else(|| self.default_ttl(key.kind()));
        let entry = LocalEntry {
            value,
            expires_at: Instant::now().checked_add(ttl),
        };

        self.counters.record_set();
        let displaced = self.entries.lock().push(key.as_str().to_string(), entry);

        if let Some((evicted, _)) = displaced {
            if evicted != key.as_str() {
                debug!(evicted = %evicted, "L1 evicted least-recently-used entry");
            }
        }
    }

    fn delete(&self, key: &CacheKey) -> bool {
        let now = Instant::now();
        self.counters.record_deletes(1);
        self.entries
            .lock()
            .pop(key.as_str())
            .is_some_and(|entry| entry.is_live(now))
    }

    fn has(&self, key: &CacheKey) -> bool {
        let now = Instant::now();
        self.entries
            .lock()
            .peek(key.as_str())
            .is_some_and(|entry| entry.is_live(now))
    }

    fn flush(&self) {
        self.entries.lock().clear();
    }

    fn stats(&self) -> LocalCacheStats {
        let counters = self.counters.snapshot();
        LocalCacheStats {
            layer: "L1 (in-memory LRU)".to_string(),
            hit_rate: counters.hit_rate(),
            counters,
            current_size: self.len(),
            max_size: self.max_entries,
            entity_ttl_ms: duration_millis(self.entity_ttl),
            collection_ttl_ms: duration_millis(self.collection_ttl),
        }
    }

    fn reset_counters(&self) {
        self.counters.reset();
    }

    fn default_ttl(&self, kind: KeyKind) -> Duration {
        match kind {
            KeyKind::Entity => self.entity_ttl,
            KeyKind::Collection => self.collection_ttl,
        }
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl std::fmt::Debug for LocalLruCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalLruCache")
            .field("max_entries", &self.max_entries)
            .field("entries", &self.len())
            .field("entity_ttl", &self.entity_ttl)
            .field("collection_ttl", &self.collection_ttl)
            .finish()
    }
}
