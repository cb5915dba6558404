//! Tests for behaviour when the shared tier or the store misbehaves

use crate::test_utils::mock_providers::{
    CountingStore, FailingStore, Outage, UnavailableSharedCache,
};
use crate::test_utils::test_fixtures::manager_with;
use std::sync::Arc;
use tiercache_application::CacheServiceInterface;
use tiercache_domain::ports::LocalCacheProvider;
use tiercache_domain::{CacheKey, CacheSource, Error, InvalidationOutcome, Tier, UserPatch};
use tiercache_providers::cache::InMemorySharedCache;

fn refused() -> Arc<UnavailableSharedCache> {
    Arc::new(UnavailableSharedCache::new(Outage::Refused))
}

#[tokio::test]
async fn test_refused_shared_tier_degrades_to_store() {
    let store = Arc::new(CountingStore::seeded(20));
    let (manager, local) = manager_with(refused(), store.clone());

    let lookup = manager.get_user("user_0001").await.unwrap();
    assert_eq!(lookup.source, CacheSource::Store);
    assert!(lookup.user.is_some());
    assert!(local.has(&CacheKey::entity("user_0001")));

    let again = manager.get_user("user_0001").await.unwrap();
    assert_eq!(again.source, CacheSource::L1);
    assert_eq!(store.reads(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stalled_shared_tier_times_out_to_store() {
    let stalled = Arc::new(UnavailableSharedCache::new(Outage::Stalled));
    let (manager, _local) = manager_with(stalled, Arc::new(CountingStore::seeded(20)));

    let listing = manager.get_all_users().await.unwrap();
    assert_eq!(listing.source, CacheSource::Store);
    assert_eq!(listing.users.len(), 20);
}

#[tokio::test]
async fn test_update_survives_failed_invalidation() {
    let (manager, _local) = manager_with(refused(), Arc::new(CountingStore::seeded(20)));
    manager.get_all_users().await.unwrap();

    let outcome = manager
        .update_user("user_0007", &UserPatch::department("Legal"))
        .await
        .unwrap();

    assert_eq!(outcome.user.map(|u| u.department), Some("Legal".to_string()));
    let l2_failures: Vec<_> = outcome
        .actions
        .iter()
        .filter(|a| a.tier == Tier::L2)
        .map(|a| &a.outcome)
        .collect();
    assert_eq!(l2_failures.len(), 2);
    assert!(
        l2_failures
            .iter()
            .all(|o| matches!(o, InvalidationOutcome::Failed { .. }))
    );
    assert!(
        outcome
            .actions
            .iter()
            .any(|a| a.tier == Tier::L1 && a.outcome == InvalidationOutcome::Patched)
    );
}

#[tokio::test]
async fn test_store_failure_fails_request_without_caching() {
    let (manager, local) =
        manager_with(Arc::new(InMemorySharedCache::new()), Arc::new(FailingStore));

    let err = manager.get_user("user_0001").await.unwrap_err();
    assert!(matches!(err, Error::Store { .. }));
    assert!(!local.has(&CacheKey::entity("user_0001")));

    assert!(manager.get_all_users().await.is_err());
    assert!(!local.has(&CacheKey::collection()));

    assert!(
        manager
            .update_user("user_0001", &UserPatch::department("Legal"))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_flush_reports_shared_failure_after_clearing_local() {
    let (manager, local) = manager_with(refused(), Arc::new(CountingStore::seeded(5)));
    manager.get_user("user_0001").await.unwrap();

    let err = manager.flush_all().await.unwrap_err();
    assert!(err.is_unavailable());
    assert!(local.is_empty());
}

#[tokio::test]
async fn test_ping_shared() {
    let (healthy, _) = manager_with(
        Arc::new(InMemorySharedCache::new()),
        Arc::new(CountingStore::seeded(1)),
    );
    assert_eq!(healthy.ping_shared().await.unwrap(), "PONG");

    let (down, _) = manager_with(refused(), Arc::new(CountingStore::seeded(1)));
    assert!(down.ping_shared().await.unwrap_err().is_unavailable());
}

#[tokio::test(start_paused = true)]
async fn test_stalled_ping_is_a_timeout() {
    let stalled = Arc::new(UnavailableSharedCache::new(Outage::Stalled));
    let (manager, _) = manager_with(stalled, Arc::new(CountingStore::seeded(1)));

    let err = manager.ping_shared().await.unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }));
}
