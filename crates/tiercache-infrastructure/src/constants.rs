//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Cache policy constants are defined in `tiercache_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tiercache.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tiercache";

/// Environment variable prefix for configuration (`TIERCACHE__SERVER__PORT`)
pub const CONFIG_ENV_PREFIX: &str = "TIERCACHE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "TIERCACHE_LOG";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "tiercache";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP server port
pub const DEFAULT_HTTP_PORT: u16 = 3001;

/// Default server host
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Health check endpoint path
pub const HEALTH_CHECK_PATH: &str = "/health";

/// Response header naming the tier that resolved a read
pub const CACHE_SOURCE_HEADER: &str = "X-Cache-Source";
