//! Application Service Port Interfaces
//!
//! The operations the cache core exposes to outer layers, together with the
//! values they return.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tiercache_domain::error::Result;
use tiercache_domain::value_objects::{
    CacheSource, InvalidationAction, LocalCacheStats, SharedCacheStats,
};
use tiercache_domain::{User, UserPatch};

// ============================================================================
// Cache Service Interface
// ============================================================================

/// Multi-tier cache service
///
/// Reads resolve L1, then L2, then the backing store; writes go to the store
/// first and then invalidate or patch the cached copies.
#[async_trait]
pub trait CacheServiceInterface: Send + Sync {
    /// One user, with the tier that resolved it
    async fn get_user(&self, id: &str) -> Result<EntityLookup>;

    /// Every user, with the tier that resolved the collection
    async fn get_all_users(&self) -> Result<CollectionLookup>;

    /// Update a user in the store and selectively invalidate cached copies
    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<UpdateOutcome>;

    /// Clear both cache tiers
    async fn flush_all(&self) -> Result<()>;

    /// Per-tier counters and the store record count
    async fn stats(&self) -> Result<CacheStatsReport>;

    /// Zero both tiers' counters; cached data is untouched
    fn reset_counters(&self);

    /// Liveness of the shared tier
    async fn ping_shared(&self) -> Result<String>;
}

// ============================================================================
// Result types
// ============================================================================

/// Outcome of a single-user read
#[derive(Debug, Clone)]
pub struct EntityLookup {
    /// The user; `None` when the store does not know the id
    pub user: Option<Arc<User>>,
    /// Tier that resolved the read
    pub source: CacheSource,
}

/// Outcome of a collection read
#[derive(Debug, Clone)]
pub struct CollectionLookup {
    /// Immutable snapshot of every user, sorted by id
    pub users: Arc<Vec<User>>,
    /// Tier that resolved the read
    pub source: CacheSource,
}

/// Outcome of an update
#[derive(Debug, Clone, Default)]
pub struct UpdateOutcome {
    /// The updated user; `None` when the id is unknown
    pub user: Option<User>,
    /// Invalidation and patch steps, in the order they ran
    pub actions: Vec<InvalidationAction>,
}

/// Combined statistics of both tiers and the store
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsReport {
    /// Local tier
    pub l1: LocalCacheStats,
    /// Shared tier
    pub l2: SharedCacheStats,
    /// Records held by the backing store
    pub store_size: usize,
}
