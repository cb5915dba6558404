//! Tests for the Redis shared tier
//!
//! Tests that talk to a server are ignored by default. Run them with a local
//! Redis on the default port: `cargo test -p tiercache-providers -- --ignored`

use serde_json::json;
use std::time::Duration;
use tiercache_domain::SharedValue;
use tiercache_providers::SharedCacheProvider;
use tiercache_providers::cache::{RedisConnectOptions, RedisSharedCache, parse_info_stats};
use tiercache_providers::constants::REDIS_DEFAULT_URL;

#[test]
fn test_parse_info_stats() {
    let raw = concat!(
        "# Stats\r\n",
        "total_connections_received:4\r\n",
        "keyspace_hits:12\r\n",
        "keyspace_misses:3\r\n\r\n",
    );
    let info = parse_info_stats(raw);

    assert_eq!(info.get("keyspace_hits").map(String::as_str), Some("12"));
    assert_eq!(info.get("keyspace_misses").map(String::as_str), Some("3"));
    assert!(!info.contains_key("# Stats"));
}

#[test]
fn test_backoff_is_linear_and_capped() {
    let options = RedisConnectOptions::default();
    assert_eq!(options.backoff(1), Duration::from_millis(200));
    assert_eq!(options.backoff(4), Duration::from_millis(800));
    assert_eq!(options.backoff(10), Duration::from_millis(2_000));
    assert_eq!(options.backoff(50), Duration::from_millis(2_000));
}

#[tokio::test]
async fn test_invalid_url_fails_without_retry() {
    let result = RedisSharedCache::connect("not-a-url", &RedisConnectOptions::default()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_unreachable_server_gives_up_after_ceiling() {
    let options = RedisConnectOptions {
        max_attempts: 2,
        backoff_step: Duration::from_millis(1),
        backoff_max: Duration::from_millis(1),
        attempt_timeout: Duration::from_millis(200),
    };
    let result = RedisSharedCache::connect("redis://127.0.0.1:1", &options).await;
    let err = result.unwrap_err();
    assert!(err.is_unavailable());
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_round_trip_against_server() {
    let cache = RedisSharedCache::connect(REDIS_DEFAULT_URL, &RedisConnectOptions::default())
        .await
        .unwrap();
    assert_eq!(cache.ping().await.unwrap(), "PONG");

    let key = "tiercache:test:round_trip";
    cache.set(key, &json!({"id": "user_0001"}), 30).await.unwrap();
    assert_eq!(
        cache.get(key).await.unwrap(),
        Some(SharedValue::Json(json!({"id": "user_0001"})))
    );
    let ttl = cache.ttl(key).await.unwrap();
    assert!(ttl > 0 && ttl <= 30);

    assert_eq!(cache.delete(&[key]).await.unwrap(), 1);
    assert_eq!(cache.ttl(key).await.unwrap(), -2);

    let stats = cache.stats().await;
    assert_eq!(stats.counters.hits, 1);
    assert!(stats.server_keyspace_hits.is_some());
}
