//! Configuration types module

pub mod app;
pub mod cache;
pub mod logging;
pub mod server;
pub mod store;

// Re-export main types
pub use app::AppConfig;
pub use cache::{CacheConfig, LocalCacheConfig, SharedCacheConfig, SharedCacheProviderKind};
pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;
