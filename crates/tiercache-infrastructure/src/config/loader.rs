//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::{
    AppConfig, CacheConfig, LoggingConfig, ServerConfig, SharedCacheProviderKind, StoreConfig,
};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use tiercache_domain::error::{Error, Result};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `TIERCACHE__SERVER__PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys (TIERCACHE__CACHE__SHARED__PROVIDER)
        let prefix = format!("{CONFIG_ENV_PREFIX}{CONFIG_ENV_SEPARATOR}");
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Rejects values that would make a tier or the store unusable.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(&config.server)?;
    validate_logging_config(&config.logging)?;
    validate_cache_config(&config.cache)?;
    validate_store_config(&config.store)?;
    Ok(())
}

fn invalid(message: &str) -> Error {
    Error::configuration(message)
}

fn validate_server_config(server: &ServerConfig) -> Result<()> {
    if server.port == 0 {
        return Err(invalid("Server port cannot be 0"));
    }
    if server.host.trim().is_empty() {
        return Err(invalid("Server host cannot be empty"));
    }
    Ok(())
}

fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    parse_log_level(&logging.level).map(|_| ())
}

fn validate_cache_config(cache: &CacheConfig) -> Result<()> {
    let local = &cache.local;
    if local.max_entries == 0 {
        return Err(invalid("Local cache max_entries cannot be 0"));
    }
    if local.entity_ttl_ms == 0 || local.collection_ttl_ms == 0 {
        return Err(invalid("Local cache TTLs cannot be 0"));
    }

    let shared = &cache.shared;
    if shared.entity_ttl_secs == 0 || shared.collection_ttl_secs == 0 {
        return Err(invalid("Shared cache TTLs cannot be 0"));
    }
    if shared.operation_timeout_ms == 0 {
        return Err(invalid("Shared cache operation timeout cannot be 0"));
    }
    if shared.provider == SharedCacheProviderKind::Redis {
        if shared.redis_url.trim().is_empty() {
            return Err(invalid("Redis URL is required for the redis provider"));
        }
        if shared.connect_max_attempts == 0 {
            return Err(invalid("Redis connect_max_attempts cannot be 0"));
        }
    }
    Ok(())
}

fn validate_store_config(store: &StoreConfig) -> Result<()> {
    if store.latency_min_ms > store.latency_max_ms {
        return Err(invalid(
            "Store latency_min_ms cannot be greater than latency_max_ms",
        ));
    }
    if store.operation_timeout_ms == 0 {
        return Err(invalid("Store operation timeout cannot be 0"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set server configuration
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set cache configuration
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.config.cache = cache;
        self
    }

    /// Select the shared tier implementation
    pub fn with_shared_provider(mut self, provider: SharedCacheProviderKind) -> Self {
        self.config.cache.shared.provider = provider;
        self
    }

    /// Set store configuration
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.config.store = store;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
