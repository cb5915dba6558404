//! Redis shared cache provider
//!
//! Shared tier backed by Redis. Suitable for multi-instance deployments:
//! every process sees the same keys, and entries survive process restarts.
//!
//! ## Features
//!
//! - One `ConnectionManager` shared by all requests; it multiplexes
//!   concurrent calls and reconnects on its own after a drop
//! - Bounded connection retry with capped linear backoff
//! - TTL delegated to Redis (`SET .. EX`)
//! - Local hit/miss counters merged with server `INFO stats` figures
//!
//! ## Example
//!
//! ```ignore
//! use tiercache_providers::cache::{RedisConnectOptions, RedisSharedCache};
//!
//! let options = RedisConnectOptions::default();
//! let l2 = RedisSharedCache::connect("redis://localhost:6379", &options).await?;
//! l2.ping().await?;
//! ```

use crate::constants::{
    REDIS_CONNECT_ATTEMPT_TIMEOUT_MS, REDIS_CONNECT_BACKOFF_MAX_MS, REDIS_CONNECT_BACKOFF_STEP_MS,
    REDIS_CONNECT_MAX_ATTEMPTS, REDIS_INFO_TIMEOUT_MS,
};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};
use std::collections::HashMap;
use std::time::Duration;
use tiercache_domain::error::{Error, Result};
use tiercache_domain::ports::SharedCacheProvider;
use tiercache_domain::value_objects::{SharedCacheStats, SharedValue, TierCounters};
use tracing::{info, warn};

/// Retry policy for establishing the Redis connection
#[derive(Debug, Clone)]
pub struct RedisConnectOptions {
    /// Attempts before the connection is declared failed
    pub max_attempts: u32,
    /// Backoff added per failed attempt
    pub backoff_step: Duration,
    /// Cap on the backoff between attempts
    pub backoff_max: Duration,
    /// Bound on each individual attempt
    pub attempt_timeout: Duration,
}

impl RedisConnectOptions {
    /// Delay after the `attempt`-th failure (1-based): `min(step * attempt, max)`
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_step
            .saturating_mul(attempt)
            .min(self.backoff_max)
    }
}

impl Default for RedisConnectOptions {
    fn default() -> Self {
        Self {
            max_attempts: REDIS_CONNECT_MAX_ATTEMPTS,
            backoff_step: Duration::from_millis(REDIS_CONNECT_BACKOFF_STEP_MS),
            backoff_max: Duration::from_millis(REDIS_CONNECT_BACKOFF_MAX_MS),
            attempt_timeout: Duration::from_millis(REDIS_CONNECT_ATTEMPT_TIMEOUT_MS),
        }
    }
}

/// Redis shared cache provider
pub struct RedisSharedCache {
    connection: ConnectionManager,
    counters: TierCounters,
    address: String,
}

impl RedisSharedCache {
    /// Connect to Redis, retrying with capped linear backoff
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    /// * `options` - Attempt ceiling and backoff policy
    ///
    /// Returns `Error::Connection` once `options.max_attempts` attempts have
    /// failed; the caller decides whether that is fatal.
    pub async fn connect(url: &str, options: &RedisConnectOptions) -> Result<Self> {
        let client = Client::open(url).map_err(|e| {
            Error::configuration_with_source(format!("Invalid Redis URL '{url}': {e}"), e)
        })?;
        let address = redacted_address(url);
        let max_attempts = options.max_attempts.max(1);

        let mut attempt = 0;
        loop {
            attempt += 1;
            let connect = ConnectionManager::new(client.clone());
            let outcome = tokio::time::timeout(options.attempt_timeout, connect).await;

            let failure = match outcome {
                Ok(Ok(connection)) => {
                    info!(address = %address, attempt, "[L2] Redis connected");
                    return Ok(Self {
                        connection,
                        counters: TierCounters::new(),
                        address,
                    });
                }
                Ok(Err(e)) => Error::connection_with_source(
                    format!("Failed to connect to Redis at {address}: {e}"),
                    e,
                ),
                Err(_) => Error::timeout(
                    format!("Redis connection to {address}"),
                    options.attempt_timeout,
                ),
            };

            if attempt >= max_attempts {
                return Err(Error::connection(format!(
                    "Giving up on Redis at {address} after {attempt} attempts: {failure}"
                )));
            }

            let delay = options.backoff(attempt);
            warn!(
                address = %address,
                attempt,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                error = %failure,
                "[L2] Redis reconnecting"
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn conn(&self) -> ConnectionManager {
        self.connection.clone()
    }
}

/// Map a Redis failure onto the domain taxonomy
fn map_redis_error(operation: &str, e: RedisError) -> Error {
    let message = format!("Redis {operation} failed: {e}");
    if e.is_io_error() || e.is_timeout() || e.is_connection_dropped() {
        Error::connection_with_source(message, e)
    } else {
        Error::cache_with_source(message, e)
    }
}

/// Strip `user:password@` from a Redis URL for logging
fn redacted_address(url: &str) -> String {
    match (url.split_once("://"), url.rsplit_once('@')) {
        (Some((scheme, _)), Some((_, host))) => format!("{scheme}://{host}"),
        _ => url.to_string(),
    }
}

/// Parse the `key:value` lines of an `INFO` reply
pub fn parse_info_stats(raw: &str) -> HashMap<String, String> {
    raw.lines()
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, v)| !k.is_empty() && !v.is_empty())
        .collect()
}

#[async_trait]
impl SharedCacheProvider for RedisSharedCache {
    async fn get(&self, key: &str) -> Result<Option<SharedValue>> {
        let mut conn = self.conn();
        let raw: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| map_redis_error("GET", e))?;

        match raw {
            Some(text) => {
                self.counters.record_hit();
                Ok(Some(SharedValue::parse(text)))
            }
            None => {
                self.counters.record_miss();
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &serde_json::Value, ttl_secs: u64) -> Result<()> {
        self.counters.record_set();
        let text = serde_json::to_string(value)?;
        let mut conn = self.conn();
        conn.set_ex::<_, _, ()>(key, text, ttl_secs)
            .await
            .map_err(|e| map_redis_error("SET", e))
    }

    async fn delete(&self, keys: &[&str]) -> Result<u64> {
        if keys.is_empty() {
            return Ok(0);
        }
        self.counters.record_deletes(keys.len() as u64);
        let mut conn = self.conn();
        conn.del::<_, u64>(keys.to_vec())
            .await
            .map_err(|e| map_redis_error("DEL", e))
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn();
        conn.exists::<_, bool>(key)
            .await
            .map_err(|e| map_redis_error("EXISTS", e))
    }

    async fn ttl(&self, key: &str) -> Result<i64> {
        let mut conn = self.conn();
        conn.ttl::<_, i64>(key)
            .await
            .map_err(|e| map_redis_error("TTL", e))
    }

    async fn flush(&self) -> Result<()> {
        let mut conn = self.conn();
        let _: () = redis::cmd("FLUSHDB")
            .query_async(&mut conn)
            .await
            .map_err(|e| map_redis_error("FLUSHDB", e))?;
        Ok(())
    }

    async fn ping(&self) -> Result<String> {
        let mut conn = self.conn();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| map_redis_error("PING", e))?;
        Ok(pong)
    }

    async fn stats(&self) -> SharedCacheStats {
        let mut stats = self.local_stats();

        let mut conn = self.conn();
        let limit = Duration::from_millis(REDIS_INFO_TIMEOUT_MS);
        let mut cmd = redis::cmd("INFO");
        cmd.arg("stats");
        let query = cmd.query_async::<String>(&mut conn);
        let info: HashMap<String, String> = match tokio::time::timeout(limit, query).await {
            Ok(Ok(raw)) => parse_info_stats(&raw),
            Ok(Err(e)) => {
                warn!(error = %e, "[L2] Redis INFO unavailable; reporting local counters only");
                HashMap::new()
            }
            Err(_) => {
                warn!(timeout = ?limit, "[L2] Redis INFO timed out; reporting local counters only");
                HashMap::new()
            }
        };
        let server_figure = |name: &str| info.get(name).and_then(|v| v.parse::<u64>().ok());

        stats.server_keyspace_hits = server_figure("keyspace_hits");
        stats.server_keyspace_misses = server_figure("keyspace_misses");
        stats
    }

    fn local_stats(&self) -> SharedCacheStats {
        let counters = self.counters.snapshot();
        SharedCacheStats {
            layer: "L2 (Redis)".to_string(),
            hit_rate: counters.hit_rate(),
            counters,
            server_keyspace_hits: None,
            server_keyspace_misses: None,
        }
    }

    fn reset_counters(&self) {
        self.counters.reset();
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisSharedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSharedCache")
            .field("server", &self.address)
            .finish_non_exhaustive()
    }
}
