//! Local Cache Port
//!
//! Contract for the fastest, smallest tier. Calls never suspend; an
//! implementation shared between request handlers must guard its own table.

use crate::value_objects::{CacheKey, CachedValue, KeyKind, LocalCacheStats};
use std::time::Duration;

/// Bounded in-process cache with per-entry TTL
///
/// # Contract
///
/// - Capacity is fixed at construction. Inserting a new key into a full cache
///   evicts the least-recently-used entry, whatever its remaining TTL.
/// - `set` without a TTL uses the default for the key's [`KeyKind`]; an
///   explicit TTL takes precedence. Writing a key replaces its value and expiry.
/// - Expired entries read as absent even before they are purged.
/// - `get` counts a hit or a miss; `has` and `peek` count nothing.
pub trait LocalCacheProvider: Send + Sync + std::fmt::Debug {
    /// Read a live entry, counting a hit or miss and marking it recently used
    fn get(&self, key: &CacheKey) -> Option<CachedValue>;

    /// Read a live entry without touching counters or recency
    fn peek(&self, key: &CacheKey) -> Option<CachedValue>;

    /// Insert or replace an entry
    fn set(&self, key: &CacheKey, value: CachedValue, ttl: Option<Duration>);

    /// Remove an entry, returning whether a live one was present
    fn delete(&self, key: &CacheKey) -> bool;

    /// Whether a live entry exists; no counter effect
    fn has(&self, key: &CacheKey) -> bool;

    /// Drop every entry
    fn flush(&self);

    /// Counters and sizing
    fn stats(&self) -> LocalCacheStats;

    /// Zero the counters without touching cached data
    fn reset_counters(&self);

    /// Default TTL applied to keys of `kind`
    fn default_ttl(&self, kind: KeyKind) -> Duration;
}
