//! # tiercache - Provider Implementations
//!
//! Concrete implementations of the ports defined in `tiercache-domain`.
//!
//! ## Provider Categories
//!
//! - Local tier (L1), `LocalCacheProvider`: [`LocalLruCache`](cache::LocalLruCache)
//! - Shared tier (L2), `SharedCacheProvider`: [`RedisSharedCache`](cache::RedisSharedCache)
//!   and [`InMemorySharedCache`](cache::InMemorySharedCache)
//! - Backing store, `UserStore`: [`InMemoryUserStore`](store::InMemoryUserStore)
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! tiercache-providers = { version = "0.1", default-features = false }
//! ```
//!
//! Without `cache-redis` only the in-memory shared tier is available.

// Re-export tiercache-domain types commonly used with providers
pub use tiercache_domain::error::{Error, Result};
pub use tiercache_domain::ports::{LocalCacheProvider, SharedCacheProvider, UserStore};

/// Provider-specific constants
pub mod constants;

/// Cache tier implementations
pub mod cache;

/// Backing store implementations
pub mod store;
