//! Cache Manager Use Case
//!
//! Composes the local tier (L1), the shared tier (L2) and the backing store
//! into one read/write protocol.
//!
//! ## Reads
//!
//! L1 → L2 → store. A miss resolved by a slower tier backfills every faster
//! tier. An unknown id is never cached.
//!
//! ## Writes
//!
//! Strictly sequential: store update, L1 entity delete, L2 entity delete, L1
//! collection patch, L2 collection patch. The L2 collection keeps its
//! remaining TTL so a frequently patched collection still expires on
//! schedule.
//!
//! ## Failure handling
//!
//! Every L2 and store call is individually time-bounded. L2 failures and
//! timeouts degrade to a miss on reads and to a `failed` invalidation action
//! on writes. Store failures fail the request.

use crate::ports::services::{
    CacheServiceInterface, CacheStatsReport, CollectionLookup, EntityLookup, UpdateOutcome,
};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tiercache_domain::constants::{
    SHARED_COLLECTION_TTL_SECS, SHARED_ENTITY_TTL_SECS, SHARED_OPERATION_TIMEOUT_MS,
    STORE_OPERATION_TIMEOUT_MS,
};
use tiercache_domain::error::{Error, Result};
use tiercache_domain::ports::{LocalCacheProvider, SharedCacheProvider, UserStore};
use tiercache_domain::value_objects::{
    CacheKey, CacheSource, CachedValue, InvalidationAction, InvalidationOutcome, KeyKind, Tier,
};
use tiercache_domain::{User, UserPatch};
use tracing::{debug, info, warn};

/// TTL policy and time bounds applied by the cache manager
#[derive(Debug, Clone)]
pub struct CacheManagerConfig {
    /// L2 TTL for entity keys, in seconds
    pub shared_entity_ttl_secs: u64,
    /// L2 TTL for the collection key when no remaining TTL applies
    pub shared_collection_ttl_secs: u64,
    /// Bound on each L2 call
    pub shared_timeout: Duration,
    /// Bound on each store call
    pub store_timeout: Duration,
}

impl CacheManagerConfig {
    fn shared_ttl(&self, kind: KeyKind) -> u64 {
        match kind {
            KeyKind::Entity => self.shared_entity_ttl_secs,
            KeyKind::Collection => self.shared_collection_ttl_secs,
        }
    }
}

impl Default for CacheManagerConfig {
    fn default() -> Self {
        Self {
            shared_entity_ttl_secs: SHARED_ENTITY_TTL_SECS,
            shared_collection_ttl_secs: SHARED_COLLECTION_TTL_SECS,
            shared_timeout: Duration::from_millis(SHARED_OPERATION_TIMEOUT_MS),
            store_timeout: Duration::from_millis(STORE_OPERATION_TIMEOUT_MS),
        }
    }
}

/// Run `future`, failing with `Error::Timeout` once `limit` elapses
async fn bounded<T, F>(operation: &str, limit: Duration, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(limit, future)
        .await
        .unwrap_or_else(|_| Err(Error::timeout(operation, limit)))
}

/// Read-through, write-through cache over the user store
pub struct CacheManager {
    local: Arc<dyn LocalCacheProvider>,
    shared: Arc<dyn SharedCacheProvider>,
    store: Arc<dyn UserStore>,
    config: CacheManagerConfig,
}

impl CacheManager {
    /// Create a cache manager with the default TTL policy
    pub fn new(
        local: Arc<dyn LocalCacheProvider>,
        shared: Arc<dyn SharedCacheProvider>,
        store: Arc<dyn UserStore>,
    ) -> Self {
        Self::with_config(local, shared, store, CacheManagerConfig::default())
    }

    /// Create a cache manager with an explicit TTL policy
    pub fn with_config(
        local: Arc<dyn LocalCacheProvider>,
        shared: Arc<dyn SharedCacheProvider>,
        store: Arc<dyn UserStore>,
        config: CacheManagerConfig,
    ) -> Self {
        Self {
            local,
            shared,
            store,
            config,
        }
    }

    /// Name of the shared tier implementation
    pub fn shared_provider_name(&self) -> &str {
        self.shared.provider_name()
    }

    /// Look `key` up in L2, treating failures and foreign values as a miss
    async fn shared_lookup(&self, key: &CacheKey) -> Option<CachedValue> {
        let fetched = bounded(
            "L2 GET",
            self.config.shared_timeout,
            self.shared.get(key.as_str()),
        )
        .await;

        match fetched {
            Ok(Some(raw)) => match CachedValue::from_shared(key.kind(), raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(
                        key = %key,
                        error = %e,
                        "[L2] cached value has an unexpected shape; treating as miss"
                    );
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key = %key, error = %e, "[L2] read failed; falling through");
                None
            }
        }
    }

    /// Write `value` to L2; failures are logged and swallowed
    async fn shared_fill(&self, key: &CacheKey, value: &CachedValue) {
        let ttl_secs = self.config.shared_ttl(key.kind());
        let outcome = match value.to_json() {
            Ok(json) => {
                bounded(
                    "L2 SET",
                    self.config.shared_timeout,
                    self.shared.set(key.as_str(), &json, ttl_secs),
                )
                .await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            warn!(key = %key, error = %e, "[L2] backfill failed");
        }
    }

    /// Replace `updated` inside the L1 collection snapshot, if it is there
    fn patch_local_collection(&self, updated: &User) -> Option<InvalidationAction> {
        let key = CacheKey::collection();
        let users = match self.local.peek(&key)? {
            CachedValue::Collection(users) => users,
            CachedValue::Entity(_) => return None,
        };
        let snapshot = replace_user(&users, updated)?;

        self.local.set(&key, CachedValue::collection(snapshot), None);
        Some(InvalidationAction::new(
            Tier::L1,
            key.as_str(),
            InvalidationOutcome::Patched,
        ))
    }

    /// Replace `updated` inside the L2 collection, keeping its remaining TTL
    async fn patch_shared_collection(&self, updated: &User) -> Option<InvalidationAction> {
        let key = CacheKey::collection();
        let timeout = self.config.shared_timeout;

        let cached = match bounded("L2 GET", timeout, self.shared.get(key.as_str())).await {
            Ok(cached) => cached?,
            Err(e) => {
                warn!(key = %key, error = %e, "[L2] collection read failed during patch");
                return Some(InvalidationAction::failed(Tier::L2, key.as_str(), e));
            }
        };
        let users = match CachedValue::from_shared(KeyKind::Collection, cached) {
            Ok(CachedValue::Collection(users)) => users,
            Ok(CachedValue::Entity(_)) => return None,
            Err(e) => {
                debug!(
                    key = %key,
                    error = %e,
                    "[L2] collection has an unexpected shape; not patching"
                );
                return None;
            }
        };
        let snapshot = replace_user(&users, updated)?;

        let default_ttl = self.config.shared_collection_ttl_secs;
        let ttl_secs = match bounded("L2 TTL", timeout, self.shared.ttl(key.as_str())).await {
            Ok(remaining) if remaining > 0 => u64::try_from(remaining).unwrap_or(default_ttl),
            Ok(_) => default_ttl,
            Err(e) => {
                warn!(key = %key, error = %e, "[L2] TTL read failed; using the collection default");
                default_ttl
            }
        };

        let written = match CachedValue::collection(snapshot).to_json() {
            Ok(json) => {
                bounded(
                    "L2 SET",
                    timeout,
                    self.shared.set(key.as_str(), &json, ttl_secs),
                )
                .await
            }
            Err(e) => Err(e),
        };

        Some(match written {
            Ok(()) => {
                debug!(key = %key, ttl_secs, "[L2] collection patched");
                InvalidationAction::new(Tier::L2, key.as_str(), InvalidationOutcome::Patched)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "[L2] collection patch failed");
                InvalidationAction::failed(Tier::L2, key.as_str(), e)
            }
        })
    }
}

/// Fresh snapshot with `updated` in place of the element sharing its id
fn replace_user(users: &[User], updated: &User) -> Option<Vec<User>> {
    let index = users.iter().position(|user| user.id == updated.id)?;
    let mut snapshot = users.to_vec();
    snapshot[index] = updated.clone();
    Some(snapshot)
}

#[async_trait]
impl CacheServiceInterface for CacheManager {
    async fn get_user(&self, id: &str) -> Result<EntityLookup> {
        let key = CacheKey::entity(id);

        if let Some(CachedValue::Entity(user)) = self.local.get(&key) {
            debug!(key = %key, "[L1] hit");
            return Ok(EntityLookup {
                user: Some(user),
                source: CacheSource::L1,
            });
        }

        if let Some(value) = self.shared_lookup(&key).await {
            if let CachedValue::Entity(user) = &value {
                let user = Arc::clone(user);
                debug!(key = %key, "[L2] hit; backfilling L1");
                self.local.set(&key, value, None);
                return Ok(EntityLookup {
                    user: Some(user),
                    source: CacheSource::L2,
                });
            }
        }

        let found = bounded(
            "store find_by_id",
            self.config.store_timeout,
            self.store.find_by_id(id),
        )
        .await?;

        let Some(user) = found else {
            debug!(key = %key, "[STORE] not found; nothing cached");
            return Ok(EntityLookup {
                user: None,
                source: CacheSource::Store,
            });
        };

        let value = CachedValue::entity(user);
        self.shared_fill(&key, &value).await;
        self.local.set(&key, value.clone(), None);
        debug!(key = %key, "[STORE] resolved; filled L2 and L1");

        Ok(EntityLookup {
            user: value.as_entity().cloned(),
            source: CacheSource::Store,
        })
    }

    async fn get_all_users(&self) -> Result<CollectionLookup> {
        let key = CacheKey::collection();

        if let Some(CachedValue::Collection(users)) = self.local.get(&key) {
            debug!(key = %key, "[L1] hit");
            return Ok(CollectionLookup {
                users,
                source: CacheSource::L1,
            });
        }

        if let Some(value) = self.shared_lookup(&key).await {
            if let CachedValue::Collection(users) = &value {
                let users = Arc::clone(users);
                debug!(key = %key, count = users.len(), "[L2] hit; backfilling L1");
                self.local.set(&key, value, None);
                return Ok(CollectionLookup {
                    users,
                    source: CacheSource::L2,
                });
            }
        }

        let users = bounded(
            "store find_all",
            self.config.store_timeout,
            self.store.find_all(),
        )
        .await?;

        let users = Arc::new(users);
        let value = CachedValue::Collection(Arc::clone(&users));
        self.shared_fill(&key, &value).await;
        self.local.set(&key, value, None);
        debug!(key = %key, count = users.len(), "[STORE] resolved; filled L2 and L1");

        Ok(CollectionLookup {
            users,
            source: CacheSource::Store,
        })
    }

    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<UpdateOutcome> {
        let updated = bounded(
            "store update",
            self.config.store_timeout,
            self.store.update(id, patch),
        )
        .await?;

        let Some(updated) = updated else {
            return Ok(UpdateOutcome::default());
        };

        let key = CacheKey::entity(id);
        let mut actions = Vec::with_capacity(4);

        let was_cached = self.local.delete(&key);
        actions.push(InvalidationAction::deleted(Tier::L1, key.as_str(), was_cached));

        let shared_delete = bounded(
            "L2 DEL",
            self.config.shared_timeout,
            self.shared.delete(&[key.as_str()]),
        )
        .await;
        actions.push(match shared_delete {
            Ok(removed) => InvalidationAction::deleted(Tier::L2, key.as_str(), removed > 0),
            Err(e) => {
                warn!(key = %key, error = %e, "[L2] invalidation failed");
                InvalidationAction::failed(Tier::L2, key.as_str(), e)
            }
        });

        actions.extend(self.patch_local_collection(&updated));
        actions.extend(self.patch_shared_collection(&updated).await);

        let summary: Vec<String> = actions.iter().map(ToString::to_string).collect();
        info!(id = %id, actions = %summary.join(", "), "user updated");

        Ok(UpdateOutcome {
            user: Some(updated),
            actions,
        })
    }

    async fn flush_all(&self) -> Result<()> {
        self.local.flush();
        bounded("L2 FLUSHDB", self.config.shared_timeout, self.shared.flush()).await?;
        info!("all cache tiers flushed");
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStatsReport> {
        let l1 = self.local.stats();
        let l2 = match tokio::time::timeout(self.config.shared_timeout, self.shared.stats()).await {
            Ok(stats) => stats,
            Err(_) => {
                warn!(
                    timeout = ?self.config.shared_timeout,
                    "[L2] stats timed out; reporting local counters only"
                );
                self.shared.local_stats()
            }
        };
        let store_size = bounded(
            "store size",
            self.config.store_timeout,
            self.store.size(),
        )
        .await?;

        Ok(CacheStatsReport { l1, l2, store_size })
    }

    fn reset_counters(&self) {
        self.local.reset_counters();
        self.shared.reset_counters();
        info!("cache counters reset");
    }

    async fn ping_shared(&self) -> Result<String> {
        bounded("L2 PING", self.config.shared_timeout, self.shared.ping()).await
    }
}

impl std::fmt::Debug for CacheManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheManager")
            .field("local", &self.local)
            .field("shared", &self.shared)
            .field("store", &self.store)
            .field("config", &self.config)
            .finish()
    }
}
