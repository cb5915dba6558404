//! Application configuration root

use super::{CacheConfig, LoggingConfig, ServerConfig, StoreConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server
    pub server: ServerConfig,
    /// Logging output
    pub logging: LoggingConfig,
    /// Cache tiers
    pub cache: CacheConfig,
    /// Backing store
    pub store: StoreConfig,
}
