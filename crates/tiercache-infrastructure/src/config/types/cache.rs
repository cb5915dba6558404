//! Cache configuration types

use serde::{Deserialize, Serialize};
use tiercache_domain::constants::{
    LOCAL_CACHE_MAX_ENTRIES, LOCAL_COLLECTION_TTL_MS, LOCAL_ENTITY_TTL_MS,
    SHARED_COLLECTION_TTL_SECS, SHARED_ENTITY_TTL_SECS, SHARED_OPERATION_TIMEOUT_MS,
};
use tiercache_providers::constants::{
    REDIS_CONNECT_BACKOFF_MAX_MS, REDIS_CONNECT_BACKOFF_STEP_MS, REDIS_CONNECT_MAX_ATTEMPTS,
    REDIS_DEFAULT_URL,
};

/// Shared tier implementations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SharedCacheProviderKind {
    /// Networked cache shared by every instance (Redis)
    Redis,
    /// Process-local stand-in for single-instance runs
    Memory,
}

/// Cache configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Local tier (L1)
    pub local: LocalCacheConfig,
    /// Shared tier (L2)
    pub shared: SharedCacheConfig,
}

/// Local tier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalCacheConfig {
    /// Capacity before LRU eviction
    pub max_entries: usize,
    /// Default TTL for entity keys in milliseconds
    pub entity_ttl_ms: u64,
    /// Default TTL for the collection key in milliseconds
    pub collection_ttl_ms: u64,
}

impl Default for LocalCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: LOCAL_CACHE_MAX_ENTRIES,
            entity_ttl_ms: LOCAL_ENTITY_TTL_MS,
            collection_ttl_ms: LOCAL_COLLECTION_TTL_MS,
        }
    }
}

/// Shared tier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedCacheConfig {
    /// Shared tier implementation
    pub provider: SharedCacheProviderKind,
    /// Redis URL (for the Redis provider)
    pub redis_url: String,
    /// TTL for entity keys in seconds
    pub entity_ttl_secs: u64,
    /// TTL for the collection key in seconds
    pub collection_ttl_secs: u64,
    /// Connection attempts before startup fails
    pub connect_max_attempts: u32,
    /// Backoff added per failed connection attempt
    pub connect_backoff_step_ms: u64,
    /// Cap on the backoff between connection attempts
    pub connect_backoff_max_ms: u64,
    /// Bound on each shared-tier call
    pub operation_timeout_ms: u64,
}

impl Default for SharedCacheConfig {
    fn default() -> Self {
        Self {
            provider: SharedCacheProviderKind::Redis,
            redis_url: REDIS_DEFAULT_URL.to_string(),
            entity_ttl_secs: SHARED_ENTITY_TTL_SECS,
            collection_ttl_secs: SHARED_COLLECTION_TTL_SECS,
            connect_max_attempts: REDIS_CONNECT_MAX_ATTEMPTS,
            connect_backoff_step_ms: REDIS_CONNECT_BACKOFF_STEP_MS,
            connect_backoff_max_ms: REDIS_CONNECT_BACKOFF_MAX_MS,
            operation_timeout_ms: SHARED_OPERATION_TIMEOUT_MS,
        }
    }
}
