//! Tier statistics snapshots

use crate::value_objects::CounterSnapshot;
use serde::{Deserialize, Serialize};

/// Statistics reported by the local tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalCacheStats {
    /// Human-readable tier description
    pub layer: String,
    /// Local counters
    #[serde(flatten)]
    pub counters: CounterSnapshot,
    /// Hits over total reads (0.0 to 1.0)
    pub hit_rate: f64,
    /// Entries currently held, expired-but-unpurged ones included
    pub current_size: usize,
    /// Capacity fixed at construction
    pub max_size: usize,
    /// Default TTL for entity keys
    pub entity_ttl_ms: u64,
    /// Default TTL for the collection key
    pub collection_ttl_ms: u64,
}

/// Statistics reported by the shared tier
///
/// The counters are this process's view; the keyspace figures come from the
/// cache server, cover every client, and are absent when the server does not
/// report them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedCacheStats {
    /// Human-readable tier description
    pub layer: String,
    /// Locally tracked counters
    #[serde(flatten)]
    pub counters: CounterSnapshot,
    /// Hits over total reads (0.0 to 1.0)
    pub hit_rate: f64,
    /// Server-wide keyspace hits
    pub server_keyspace_hits: Option<u64>,
    /// Server-wide keyspace misses
    pub server_keyspace_misses: Option<u64>,
}
