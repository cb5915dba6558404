//! Domain Value Objects
//!
//! Immutable values describing cache state. None of them carry identity;
//! two keys or two snapshots with the same attributes are interchangeable.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`CacheKey`] | Namespaced key for one entity or the collection |
//! | [`CachedValue`] | Payload held by the local tier |
//! | [`SharedValue`] | Payload read back from the shared tier |
//! | [`CacheSource`] | Tier (or store) that resolved a read |
//! | [`InvalidationAction`] | One step taken by a write's invalidation sequence |
//! | [`TierCounters`] | Per-tier hit/miss/set/delete counters |
//! | [`LocalCacheStats`] | Snapshot reported by the local tier |
//! | [`SharedCacheStats`] | Snapshot reported by the shared tier |

/// Cache key naming
pub mod cache_key;
/// Cached payload types
pub mod cached_value;
/// Per-tier counters
pub mod counters;
/// Invalidation log entries
pub mod invalidation;
/// Read-resolution source
pub mod source;
/// Tier statistics snapshots
pub mod stats;

pub use cache_key::{CacheKey, KeyKind};
pub use cached_value::{CachedValue, SharedValue};
pub use counters::{CounterSnapshot, TierCounters};
pub use invalidation::{InvalidationAction, InvalidationOutcome, Tier};
pub use source::CacheSource;
pub use stats::{LocalCacheStats, SharedCacheStats};
