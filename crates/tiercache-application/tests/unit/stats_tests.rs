//! Tests for statistics, counter reset and flush

use crate::test_utils::mock_providers::{CountingStore, StalledStatsCache};
use crate::test_utils::test_fixtures::{Harness, manager_with};
use std::sync::Arc;
use tiercache_application::CacheServiceInterface;
use tiercache_domain::CacheSource;

#[tokio::test]
async fn test_counters_count_hits_then_misses() {
    let h = Harness::new();
    h.manager.get_user("user_0001").await.unwrap();
    h.manager.reset_counters();

    let hits = 5;
    let misses = 3;
    for _ in 0..hits {
        h.manager.get_user("user_0001").await.unwrap();
    }
    for _ in 0..misses {
        h.manager.get_user("user_0404x").await.unwrap();
    }

    let stats = h.manager.stats().await.unwrap();
    assert_eq!(stats.l1.counters.hits, hits);
    assert_eq!(stats.l1.counters.misses, misses);
    assert_eq!(stats.l2.counters.hits, 0);
    assert_eq!(stats.l2.counters.misses, misses);
    assert_eq!(stats.store_size, 500);

    h.manager.reset_counters();
    let stats = h.manager.stats().await.unwrap();
    assert_eq!(stats.l1.counters.hits, 0);
    assert_eq!(stats.l1.counters.misses, 0);
    assert_eq!(stats.l2.counters.misses, 0);
    // Cached data survives a counter reset
    assert_eq!(stats.l1.current_size, 1);
}

#[tokio::test]
async fn test_flush_empties_both_tiers() {
    let h = Harness::new();
    h.manager.get_user("user_0001").await.unwrap();
    h.manager.get_all_users().await.unwrap();

    h.manager.flush_all().await.unwrap();

    assert!(h.local.is_empty());
    assert!(h.shared.is_empty());
    let lookup = h.manager.get_user("user_0001").await.unwrap();
    assert_eq!(lookup.source, CacheSource::Store);
    assert_eq!(h.manager.stats().await.unwrap().store_size, 500);
}

#[tokio::test]
async fn test_stats_serialize_flat_counters() {
    let h = Harness::new();
    h.manager.get_user("user_0001").await.unwrap();

    let json = serde_json::to_value(h.manager.stats().await.unwrap()).unwrap();
    assert_eq!(json["l1"]["misses"], 1);
    assert_eq!(json["l1"]["max_size"], 500);
    assert_eq!(json["l2"]["sets"], 1);
    assert_eq!(json["store_size"], 500);
}

#[test]
fn test_shared_provider_name() {
    let h = Harness::with_store_size(1);
    assert_eq!(h.manager.shared_provider_name(), "memory");
}

#[tokio::test(start_paused = true)]
async fn test_stalled_shared_stats_fall_back_to_local_counters() {
    let (manager, _local) = manager_with(
        Arc::new(StalledStatsCache::new()),
        Arc::new(CountingStore::seeded(10)),
    );
    let lookup = manager.get_user("user_0001").await.unwrap();
    assert_eq!(lookup.source, CacheSource::Store);

    let stats = manager.stats().await.unwrap();
    assert_eq!(stats.l1.counters.misses, 1);
    assert_eq!(stats.l2.layer, "L2 (in-memory)");
    assert_eq!(stats.l2.counters.misses, 1);
    assert_eq!(stats.l2.counters.sets, 1);
    assert!(stats.l2.server_keyspace_hits.is_none());
    assert!(stats.l2.server_keyspace_misses.is_none());
    assert_eq!(stats.store_size, 10);
}
