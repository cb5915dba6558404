//! Provider Constants
//!
//! Constants specific to provider implementations. Cache policy defaults live
//! in `tiercache_domain::constants`.

// ============================================================================
// REDIS CONNECTION CONSTANTS
// ============================================================================

/// Default Redis URL
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";

/// Connection attempts before startup gives up
pub const REDIS_CONNECT_MAX_ATTEMPTS: u32 = 10;

/// Backoff grows by this much per failed attempt
pub const REDIS_CONNECT_BACKOFF_STEP_MS: u64 = 200;

/// Backoff never exceeds this
pub const REDIS_CONNECT_BACKOFF_MAX_MS: u64 = 2_000;

/// Bound on a single connection attempt
pub const REDIS_CONNECT_ATTEMPT_TIMEOUT_MS: u64 = 5_000;

/// Bound on the `INFO stats` query behind the shared-tier statistics
pub const REDIS_INFO_TIMEOUT_MS: u64 = 500;

// ============================================================================
// USER STORE CONSTANTS
// ============================================================================

/// Number of users seeded into the in-memory store
pub const STORE_SEED_SIZE: usize = 500;

/// Lower bound of simulated store latency
pub const STORE_LATENCY_MIN_MS: u64 = 5;

/// Upper bound of simulated store latency
pub const STORE_LATENCY_MAX_MS: u64 = 15;
