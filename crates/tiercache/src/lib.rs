//! # tiercache
//!
//! A two-tier read-through cache: a bounded in-process LRU (L1) in front of
//! a shared Redis tier (L2) in front of an authoritative store. Writes go to
//! the store first, then evict the affected entity keys and patch the cached
//! collection in place so other entries stay warm.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tiercache::application::{CacheManager, CacheServiceInterface};
//! use tiercache::providers::cache::{InMemorySharedCache, LocalLruCache};
//! use tiercache::providers::store::InMemoryUserStore;
//!
//! let manager = CacheManager::new(
//!     Arc::new(LocalLruCache::new()),
//!     Arc::new(InMemorySharedCache::new()),
//!     Arc::new(InMemoryUserStore::seeded(500)),
//! );
//! let lookup = manager.get_user("user_0001").await?;
//! println!("{} from {}", lookup.user.unwrap().name, lookup.source);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, value objects, ports and the error type
//! - `application` - The cache manager and its service interface
//! - `providers` - L1, L2 and store implementations
//! - `infrastructure` - Configuration, logging and bootstrap
//! - `server` - HTTP surface

pub mod cli;

/// Domain layer - entities, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tiercache_domain::*;
}

/// Application layer - cache manager
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use tiercache_application::*;
}

/// Provider implementations - cache tiers and store
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use tiercache_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use tiercache_infrastructure::*;
}

/// Server layer - HTTP handlers
///
/// Re-exports from the server crate for convenience
pub mod server {
    pub use tiercache_server::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export main entry point at the crate root
pub use server::run_server;

pub use cli::Cli;
