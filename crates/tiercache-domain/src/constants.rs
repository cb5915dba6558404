//! Domain layer constants
//!
//! Key naming and the default TTL policy shared by every layer. Infrastructure
//! specific constants (ports, file names, env prefixes) remain in
//! `tiercache_infrastructure::constants`.

// ============================================================================
// CACHE KEY NAMING
// ============================================================================

/// Prefix for single-entity keys (`user:<id>`)
pub const ENTITY_KEY_PREFIX: &str = "user";

/// Key holding the full, id-ordered user collection
pub const COLLECTION_KEY: &str = "users:all";

// ============================================================================
// LOCAL TIER (L1) DEFAULTS
// ============================================================================

/// Maximum number of entries held by the local tier
pub const LOCAL_CACHE_MAX_ENTRIES: usize = 500;

/// Default local TTL for single-entity keys (15 seconds)
pub const LOCAL_ENTITY_TTL_MS: u64 = 15_000;

/// Default local TTL for the collection key (30 seconds)
pub const LOCAL_COLLECTION_TTL_MS: u64 = 30_000;

// ============================================================================
// SHARED TIER (L2) DEFAULTS
// ============================================================================

/// Default shared TTL for single-entity keys
pub const SHARED_ENTITY_TTL_SECS: u64 = 60;

/// Default shared TTL for the collection key
pub const SHARED_COLLECTION_TTL_SECS: u64 = 120;

/// Upper bound for a single shared-tier call before it counts as failed
pub const SHARED_OPERATION_TIMEOUT_MS: u64 = 1_000;

// ============================================================================
// BACKING STORE
// ============================================================================

/// Upper bound for a single backing-store call
pub const STORE_OPERATION_TIMEOUT_MS: u64 = 5_000;

/// Fields a `UserPatch` is allowed to change
pub const PATCHABLE_FIELDS: &[&str] = &[
    "firstName",
    "lastName",
    "email",
    "department",
    "role",
    "status",
    "city",
    "salary",
    "age",
];
