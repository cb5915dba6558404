//! Composition root
//!
//! Builds the providers named by the configuration and wires them into the
//! cache manager.
//!
//! ```text
//! AppConfig → LocalLruCache ─┐
//!           → Redis | memory ─┼→ CacheManager → Arc<dyn CacheServiceInterface>
//!           → InMemoryUserStore ┘
//! ```
//!
//! The shared tier is pinged before the context is returned. A failed ping is
//! fatal: the caller must not start serving traffic.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default()).await?;
//! let lookup = context.cache_service().get_user("user_0001").await?;
//! ```

use crate::config::{
    AppConfig, LocalCacheConfig, SharedCacheConfig, SharedCacheProviderKind, StoreConfig,
};
use crate::logging::log_tier_degraded;
use std::sync::Arc;
use std::time::Duration;
use tiercache_application::{CacheManager, CacheManagerConfig, CacheServiceInterface};
use tiercache_domain::error::{Error, Result};
use tiercache_domain::ports::{LocalCacheProvider, SharedCacheProvider, UserStore};
use tiercache_providers::cache::{
    InMemorySharedCache, LocalLruCache, RedisConnectOptions, RedisSharedCache,
};
use tiercache_providers::constants::REDIS_CONNECT_ATTEMPT_TIMEOUT_MS;
use tiercache_providers::store::InMemoryUserStore;
use tracing::info;

/// Application context: configuration plus the wired cache service
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    cache_service: Arc<dyn CacheServiceInterface>,
}

impl AppContext {
    /// Context over an already-built cache service
    pub fn new(config: AppConfig, cache_service: Arc<dyn CacheServiceInterface>) -> Self {
        Self {
            config: Arc::new(config),
            cache_service,
        }
    }

    /// The cache service shared by every request handler
    pub fn cache_service(&self) -> Arc<dyn CacheServiceInterface> {
        Arc::clone(&self.cache_service)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Build every provider, wire the cache manager and verify the shared tier
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let local = build_local_cache(&config.cache.local)?;
    let shared = build_shared_cache(&config.cache.shared).await?;
    let store = build_store(&config.store)?;
    let provider = shared.provider_name().to_string();

    let manager = CacheManager::with_config(local, shared, store, manager_config(&config));

    match manager.ping_shared().await {
        Ok(pong) => info!(provider = %provider, "[L2] Ping: {pong}"),
        Err(e) => {
            log_tier_degraded("L2", "PING", &e);
            return Err(Error::connection(format!(
                "Shared cache ({provider}) is not reachable; refusing to start: {e}"
            )));
        }
    }

    info!(
        provider = %provider,
        store_size = config.store.seed_size,
        "Cache manager ready"
    );
    Ok(AppContext::new(config, Arc::new(manager)))
}

/// TTL policy and time bounds for the cache manager
pub fn manager_config(config: &AppConfig) -> CacheManagerConfig {
    let shared = &config.cache.shared;
    CacheManagerConfig {
        shared_entity_ttl_secs: shared.entity_ttl_secs,
        shared_collection_ttl_secs: shared.collection_ttl_secs,
        shared_timeout: Duration::from_millis(shared.operation_timeout_ms),
        store_timeout: Duration::from_millis(config.store.operation_timeout_ms),
    }
}

fn build_local_cache(config: &LocalCacheConfig) -> Result<Arc<dyn LocalCacheProvider>> {
    let cache = LocalLruCache::with_config(
        config.max_entries,
        Duration::from_millis(config.entity_ttl_ms),
        Duration::from_millis(config.collection_ttl_ms),
    )?;
    Ok(Arc::new(cache))
}

async fn build_shared_cache(config: &SharedCacheConfig) -> Result<Arc<dyn SharedCacheProvider>> {
    match config.provider {
        SharedCacheProviderKind::Memory => Ok(Arc::new(InMemorySharedCache::new())),
        SharedCacheProviderKind::Redis => {
            let options = RedisConnectOptions {
                max_attempts: config.connect_max_attempts,
                backoff_step: Duration::from_millis(config.connect_backoff_step_ms),
                backoff_max: Duration::from_millis(config.connect_backoff_max_ms),
                attempt_timeout: Duration::from_millis(REDIS_CONNECT_ATTEMPT_TIMEOUT_MS),
            };
            let cache = RedisSharedCache::connect(&config.redis_url, &options).await?;
            Ok(Arc::new(cache))
        }
    }
}

fn build_store(config: &StoreConfig) -> Result<Arc<dyn UserStore>> {
    let store = InMemoryUserStore::seeded(config.seed_size)
        .with_latency(config.latency_min_ms, config.latency_max_ms)?;
    Ok(Arc::new(store))
}
