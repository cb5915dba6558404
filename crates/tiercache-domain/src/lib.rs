//! # Domain Layer
//!
//! Core types and port traits for the multi-tier user cache.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | `User` record and the allow-listed `UserPatch` |
//! | [`value_objects`] | Cache keys, cached payloads, counters, stats, invalidation actions |
//! | [`ports`] | Provider traits for the local tier, shared tier and backing store |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Key naming and default TTL policy |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types at the crate root
pub use entities::{User, UserPatch};
pub use error::{Error, Result};
pub use value_objects::{
    CacheKey, CacheSource, CachedValue, CounterSnapshot, InvalidationAction, InvalidationOutcome,
    KeyKind, LocalCacheStats, SharedCacheStats, SharedValue, Tier, TierCounters,
};
