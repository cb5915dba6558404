//! Domain Ports
//!
//! Trait boundaries between the cache manager and the things it composes.
//! Implementations live in `tiercache-providers`.

/// Provider ports
pub mod providers;

pub use providers::{LocalCacheProvider, SharedCacheProvider, UserStore};
