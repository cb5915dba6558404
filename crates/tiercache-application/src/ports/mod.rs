//! Application ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`CacheServiceInterface`] | Service surface of the cache manager |

/// Application service interfaces
pub mod services;

pub use services::{
    CacheServiceInterface, CacheStatsReport, CollectionLookup, EntityLookup, UpdateOutcome,
};
