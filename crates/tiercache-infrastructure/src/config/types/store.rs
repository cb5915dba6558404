//! Backing store configuration types

use serde::{Deserialize, Serialize};
use tiercache_domain::constants::STORE_OPERATION_TIMEOUT_MS;
use tiercache_providers::constants::{
    STORE_LATENCY_MAX_MS, STORE_LATENCY_MIN_MS, STORE_SEED_SIZE,
};

/// Seeded in-memory store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of generated users
    pub seed_size: usize,
    /// Lower bound of simulated per-call latency
    pub latency_min_ms: u64,
    /// Upper bound of simulated per-call latency
    pub latency_max_ms: u64,
    /// Bound on each store call
    pub operation_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_size: STORE_SEED_SIZE,
            latency_min_ms: STORE_LATENCY_MIN_MS,
            latency_max_ms: STORE_LATENCY_MAX_MS,
            operation_timeout_ms: STORE_OPERATION_TIMEOUT_MS,
        }
    }
}
