//! Use case implementations

/// Multi-tier cache manager
pub mod cache_manager;

pub use cache_manager::{CacheManager, CacheManagerConfig};
