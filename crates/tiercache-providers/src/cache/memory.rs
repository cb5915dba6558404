//! In-memory shared cache provider
//!
//! Single-process implementation of the shared-tier contract. Values are kept
//! as JSON text and TTLs in whole seconds, mirroring what the Redis provider
//! does, so the cache manager behaves identically against either one.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tiercache_domain::error::{Error, Result};
use tiercache_domain::ports::SharedCacheProvider;
use tiercache_domain::value_objects::{SharedCacheStats, SharedValue, TierCounters};
use tokio::time::Instant;

struct SharedEntry {
    text: String,
    expires_at: Option<Instant>,
}

impl SharedEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| at > now)
    }
}

/// Shared-tier stand-in backed by a process-local map
#[derive(Default)]
pub struct InMemorySharedCache {
    entries: Mutex<HashMap<String, SharedEntry>>,
    counters: TierCounters,
}

impl InMemorySharedCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Store text verbatim, bypassing JSON serialization
    ///
    /// Stands in for values written by other clients of a shared cache.
    pub fn set_raw(&self, key: &str, text: &str, ttl_secs: Option<u64>) {
        // An expiry past the clock's range never arrives
        let expires_at =
            ttl_secs.and_then(|secs| Instant::now().checked_add(Duration::from_secs(secs)));
        self.entries.lock().insert(
            key.to_string(),
            SharedEntry {
                text: text.to_string(),
                expires_at,
            },
        );
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .values()
            .filter(|entry| entry.is_live(now))
            .count()
    }

    /// True when no live key is held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn live_text(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.is_live(now) => Some(entry.text.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }
}

#[async_trait]
impl SharedCacheProvider for InMemorySharedCache {
    async fn get(&self, key: &str) -> Result<Option<SharedValue>> {
        match self.live_text(key) {
            Some(text) => {
                self.counters.record_hit();
                Ok(Some(SharedValue::parse(text)))
            }
            None => {
                self.counters.record_miss();
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &serde_json::Value, ttl_secs: u64) -> Result<()> {
        if ttl_secs == 0 {
            return Err(Error::cache(format!("invalid expire time for key {key}")));
        }
        self.counters.record_set();
        let text = serde_json::to_string(value)?;
        self.set_raw(key, &text, Some(ttl_secs));
        Ok(())
    }

    async fn delete(&self, keys: &[&str]) -> Result<u64> {
        let now = Instant::now();
        self.counters.record_deletes(keys.len() as u64);
        let mut entries = self.entries.lock();
        let removed = keys
            .iter()
            .filter_map(|key| entries.remove(*key))
            .filter(|entry| entry.is_live(now))
            .count();
        Ok(removed as u64)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.live_text(key).is_some())
    }

    async fn ttl(&self, key: &str) -> Result<i64> {
        let now = Instant::now();
        let entries = self.entries.lock();
        let remaining = match entries.get(key) {
            Some(entry) if entry.is_live(now) => match entry.expires_at {
                // Round to the nearest second the way Redis TTL does
                Some(at) => {
                    let millis = at.saturating_duration_since(now).as_millis();
                    i64::try_from((millis + 500) / 1000).unwrap_or(i64::MAX)
                }
                None => -1,
            },
            _ => -2,
        };
        Ok(remaining)
    }

    async fn flush(&self) -> Result<()> {
        self.entries.lock().clear();
        Ok(())
    }

    async fn ping(&self) -> Result<String> {
        Ok("PONG".to_string())
    }

    async fn stats(&self) -> SharedCacheStats {
        self.local_stats()
    }

    fn local_stats(&self) -> SharedCacheStats {
        let counters = self.counters.snapshot();
        SharedCacheStats {
            layer: "L2 (in-memory)".to_string(),
            hit_rate: counters.hit_rate(),
            counters,
            server_keyspace_hits: None,
            server_keyspace_misses: None,
        }
    }

    fn reset_counters(&self) {
        self.counters.reset();
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

impl std::fmt::Debug for InMemorySharedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySharedCache")
            .field("entries", &self.len())
            .finish()
    }
}
