//! Cache Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Tier | Description |
//! |----------|------|-------------|
//! | [`LocalLruCache`] | L1 | Bounded LRU table with per-entry TTL |
//! | [`RedisSharedCache`] | L2 | Redis-backed, shared across instances |
//! | [`InMemorySharedCache`] | L2 | Single-process stand-in with the same contract |
//!
//! ## Provider Selection Guide
//!
//! - **Multi Instance**: `RedisSharedCache`
//! - **Single Instance / Testing**: `InMemorySharedCache`

pub mod local;
pub mod memory;
#[cfg(feature = "cache-redis")]
pub mod redis;

pub use local::LocalLruCache;
pub use memory::InMemorySharedCache;
#[cfg(feature = "cache-redis")]
pub use redis::{RedisConnectOptions, RedisSharedCache, parse_info_stats};
