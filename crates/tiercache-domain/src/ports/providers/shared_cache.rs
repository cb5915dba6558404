//! Shared Cache Port
//!
//! Contract for the networked tier. Values travel as JSON text; expiry is
//! delegated to the cache server, which retires keys on its own.

use crate::error::Result;
use crate::value_objects::{SharedCacheStats, SharedValue};
use async_trait::async_trait;

/// Networked key/value cache with server-side TTL
///
/// # Example
///
/// ```ignore
/// cache.set("user:user_0001", &json, 60).await?;
/// if let Some(SharedValue::Json(json)) = cache.get("user:user_0001").await? {
///     let user: User = serde_json::from_value(json)?;
/// }
/// ```
#[async_trait]
pub trait SharedCacheProvider: Send + Sync + std::fmt::Debug {
    /// Read a key. Text that is not JSON comes back as [`SharedValue::Raw`].
    async fn get(&self, key: &str) -> Result<Option<SharedValue>>;

    /// Write a key with a TTL in whole seconds
    async fn set(&self, key: &str, value: &serde_json::Value, ttl_secs: u64) -> Result<()>;

    /// Delete keys, returning how many existed
    async fn delete(&self, keys: &[&str]) -> Result<u64>;

    /// Whether a key exists
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Remaining TTL in seconds; `-2` if the key is missing, `-1` if it has no expiry
    async fn ttl(&self, key: &str) -> Result<i64>;

    /// Drop every key in the database
    async fn flush(&self) -> Result<()>;

    /// Liveness check
    async fn ping(&self) -> Result<String>;

    /// Local counters merged with best-effort server figures; never fails
    async fn stats(&self) -> SharedCacheStats;

    /// Local counters only, without a server round-trip
    fn local_stats(&self) -> SharedCacheStats;

    /// Zero the local counters
    fn reset_counters(&self);

    /// Identifier of the implementation (`redis`, `memory`)
    fn provider_name(&self) -> &str;
}
