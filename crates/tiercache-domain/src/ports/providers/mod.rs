//! Provider Ports
//!
//! | Port | Tier | Description |
//! |------|------|-------------|
//! | [`LocalCacheProvider`] | L1 | Bounded in-process cache, synchronous |
//! | [`SharedCacheProvider`] | L2 | Networked cache shared across processes |
//! | [`UserStore`] | Store | Authoritative user records |

/// Local (L1) cache port
pub mod local_cache;
/// Shared (L2) cache port
pub mod shared_cache;
/// Backing store port
pub mod store;

pub use local_cache::LocalCacheProvider;
pub use shared_cache::SharedCacheProvider;
pub use store::UserStore;
