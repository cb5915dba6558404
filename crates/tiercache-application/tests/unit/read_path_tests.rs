//! Tests for the L1 → L2 → store read path

use crate::test_utils::test_fixtures::Harness;
use serde_json::json;
use std::time::Duration;
use tiercache_application::CacheServiceInterface;
use tiercache_domain::ports::{LocalCacheProvider, SharedCacheProvider};
use tiercache_domain::{CacheKey, CacheSource, CachedValue};
use tiercache_providers::store::generate_user;

#[tokio::test]
async fn test_store_resolved_read_fills_both_tiers() {
    let h = Harness::new();
    let key = CacheKey::entity("user_0001");

    let first = h.manager.get_user("user_0001").await.unwrap();
    assert_eq!(first.source, CacheSource::Store);
    assert_eq!(first.user.as_ref().map(|u| u.id.as_str()), Some("user_0001"));
    assert!(h.local.has(&key));
    assert!(h.shared.exists(key.as_str()).await.unwrap());

    let second = h.manager.get_user("user_0001").await.unwrap();
    assert_eq!(second.source, CacheSource::L1);
    assert_eq!(second.user, first.user);
    assert_eq!(h.store.reads(), 1);
}

#[tokio::test]
async fn test_shared_resolved_read_fills_only_local() {
    let h = Harness::new();
    let user = generate_user(42);
    let key = CacheKey::entity(&user.id);
    let json = CachedValue::entity(user.clone()).to_json().unwrap();
    h.shared.set(key.as_str(), &json, 60).await.unwrap();

    let lookup = h.manager.get_user(&user.id).await.unwrap();
    assert_eq!(lookup.source, CacheSource::L2);
    assert_eq!(lookup.user.as_deref(), Some(&user));
    assert!(h.local.has(&key));
    assert_eq!(h.store.reads(), 0);
    // L2 was read, not rewritten
    assert_eq!(h.shared.stats().await.counters.sets, 1);
}

#[tokio::test]
async fn test_unknown_entity_is_never_cached() {
    let h = Harness::new();
    let key = CacheKey::entity("user_9999");

    let lookup = h.manager.get_user("user_9999").await.unwrap();
    assert!(lookup.user.is_none());
    assert_eq!(lookup.source, CacheSource::Store);
    assert!(!h.local.has(&key));
    assert!(!h.shared.exists(key.as_str()).await.unwrap());

    // Still resolved by the store next time
    let again = h.manager.get_user("user_9999").await.unwrap();
    assert_eq!(again.source, CacheSource::Store);
    assert_eq!(h.store.reads(), 2);
}

#[tokio::test]
async fn test_collection_read_path() {
    let h = Harness::new();

    let first = h.manager.get_all_users().await.unwrap();
    assert_eq!(first.source, CacheSource::Store);
    assert_eq!(first.users.len(), 500);
    assert!(first.users.windows(2).all(|pair| pair[0].id < pair[1].id));
    assert_eq!(h.shared.ttl("users:all").await.unwrap(), 120);

    let second = h.manager.get_all_users().await.unwrap();
    assert_eq!(second.source, CacheSource::L1);
    assert_eq!(second.users.len(), 500);
    assert_eq!(h.store.reads(), 1);
}

#[tokio::test]
async fn test_collection_backfills_local_from_shared() {
    let h = Harness::new();
    h.manager.get_all_users().await.unwrap();
    h.local.flush();

    let lookup = h.manager.get_all_users().await.unwrap();
    assert_eq!(lookup.source, CacheSource::L2);
    assert_eq!(lookup.users.len(), 500);
    assert!(h.local.has(&CacheKey::collection()));
    assert_eq!(h.store.reads(), 1);
}

#[tokio::test]
async fn test_empty_collection_is_still_cached() {
    let h = Harness::with_store_size(0);

    let first = h.manager.get_all_users().await.unwrap();
    assert_eq!(first.source, CacheSource::Store);
    assert!(first.users.is_empty());

    let second = h.manager.get_all_users().await.unwrap();
    assert_eq!(second.source, CacheSource::L1);
}

#[tokio::test]
async fn test_foreign_shared_value_is_refilled_from_store() {
    let h = Harness::new();
    h.shared.set_raw("user:user_0003", "<<not json>>", Some(60));

    let lookup = h.manager.get_user("user_0003").await.unwrap();
    assert_eq!(lookup.source, CacheSource::Store);
    assert!(lookup.user.is_some());

    let stored = h.shared.get("user:user_0003").await.unwrap().unwrap();
    let decoded = CachedValue::from_shared(CacheKey::entity("user_0003").kind(), stored);
    assert!(decoded.is_ok());
}

#[tokio::test]
async fn test_wrongly_shaped_shared_value_is_a_miss() {
    let h = Harness::new();
    h.shared
        .set("user:user_0004", &json!({"unexpected": true}), 60)
        .await
        .unwrap();

    let lookup = h.manager.get_user("user_0004").await.unwrap();
    assert_eq!(lookup.source, CacheSource::Store);
}

#[tokio::test(start_paused = true)]
async fn test_expired_local_entry_falls_back_to_shared() {
    let h = Harness::new();
    h.manager.get_user("user_0005").await.unwrap();

    // Past the 15s L1 entity TTL, inside the 60s L2 one
    tokio::time::advance(Duration::from_secs(16)).await;
    let lookup = h.manager.get_user("user_0005").await.unwrap();
    assert_eq!(lookup.source, CacheSource::L2);

    tokio::time::advance(Duration::from_secs(61)).await;
    let lookup = h.manager.get_user("user_0005").await.unwrap();
    assert_eq!(lookup.source, CacheSource::Store);
    assert_eq!(h.store.reads(), 2);
}
