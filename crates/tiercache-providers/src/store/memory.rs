//! In-memory user store
//!
//! Authoritative user table held in a `BTreeMap`, so `find_all` is id-ordered
//! without a sort. Every call sleeps for a random delay within the configured
//! latency range before touching the table, standing in for a database
//! round-trip.

use crate::constants::{STORE_LATENCY_MAX_MS, STORE_LATENCY_MIN_MS, STORE_SEED_SIZE};
use crate::store::seed::seed_users;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use rand::Rng;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::time::Duration;
use tiercache_domain::error::{Error, Result};
use tiercache_domain::ports::UserStore;
use tiercache_domain::{User, UserPatch};
use tracing::debug;

/// User table with simulated latency
pub struct InMemoryUserStore {
    users: RwLock<BTreeMap<String, User>>,
    latency: RangeInclusive<u64>,
}

impl InMemoryUserStore {
    /// Store seeded with `count` deterministic users and the default latency
    pub fn seeded(count: usize) -> Self {
        Self::from_users(seed_users(count))
    }

    /// Store holding exactly `users`
    pub fn from_users(users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        Self {
            users: RwLock::new(users),
            latency: STORE_LATENCY_MIN_MS..=STORE_LATENCY_MAX_MS,
        }
    }

    /// Replace the simulated latency range (milliseconds, inclusive)
    pub fn with_latency(mut self, min_ms: u64, max_ms: u64) -> Result<Self> {
        if min_ms > max_ms {
            return Err(Error::configuration(format!(
                "Store latency range is inverted: {min_ms}ms > {max_ms}ms"
            )));
        }
        self.latency = min_ms..=max_ms;
        Ok(self)
    }

    /// Store without simulated latency
    pub fn instant(self) -> Self {
        Self {
            latency: 0..=0,
            ..self
        }
    }

    async fn simulate_latency(&self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn next_delay(&self) -> Duration {
        let (min, max) = (*self.latency.start(), *self.latency.end());
        if min == max {
            return Duration::from_millis(min);
        }
        Duration::from_millis(rand::rng().random_range(min..=max))
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::seeded(STORE_SEED_SIZE)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_all(&self) -> Result<Vec<User>> {
        self.simulate_latency().await;
        Ok(self.users.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        self.simulate_latency().await;
        Ok(self.users.read().get(id).cloned())
    }

    async fn update(&self, id: &str, patch: &UserPatch) -> Result<Option<User>> {
        self.simulate_latency().await;
        let mut users = self.users.write();
        let Some(existing) = users.get_mut(id) else {
            return Ok(None);
        };

        let updated = existing.apply_patch(patch, Utc::now());
        existing.clone_from(&updated);
        debug!(id = %id, "store record updated");
        Ok(Some(updated))
    }

    async fn size(&self) -> Result<usize> {
        Ok(self.users.read().len())
    }
}

impl std::fmt::Debug for InMemoryUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserStore")
            .field("users", &self.users.read().len())
            .field("latency_ms", &self.latency)
            .finish()
    }
}
