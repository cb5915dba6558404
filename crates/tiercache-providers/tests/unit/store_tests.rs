//! Tests for the seeded user store

use tiercache_domain::UserPatch;
use tiercache_providers::UserStore;
use tiercache_providers::store::{InMemoryUserStore, generate_user, seed_users};

#[test]
fn test_generation_is_deterministic() {
    let a = generate_user(7);
    let b = generate_user(7);
    assert_eq!(a.id, "user_0007");
    assert_eq!(a.first_name, b.first_name);
    assert_eq!(a.email, b.email);
    assert_eq!(a.joined_at, b.joined_at);
    assert_eq!(a.name, format!("{} {}", a.first_name, a.last_name));
}

#[test]
fn test_generated_fields_stay_in_range() {
    for user in seed_users(50) {
        assert!((40_000..160_000).contains(&user.salary));
        assert!((22..60).contains(&user.age));
        assert!(user.email.ends_with("@company.com"));
        assert_eq!(user.joined_at.len(), 10);
    }
}

#[tokio::test]
async fn test_find_all_is_sorted_by_id() {
    let store = InMemoryUserStore::seeded(25).instant();
    let users = store.find_all().await.unwrap();

    assert_eq!(users.len(), 25);
    assert!(users.windows(2).all(|pair| pair[0].id < pair[1].id));
    assert_eq!(store.size().await.unwrap(), 25);
}

#[tokio::test]
async fn test_find_by_id() {
    let store = InMemoryUserStore::seeded(10).instant();
    assert!(store.find_by_id("user_0003").await.unwrap().is_some());
    assert!(store.find_by_id("user_0404").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_applies_patch_and_persists() {
    let store = InMemoryUserStore::seeded(10).instant();
    let patch = UserPatch {
        first_name: Some("Zed".to_string()),
        ..UserPatch::department("Legal")
    };

    let updated = store.update("user_0002", &patch).await.unwrap().unwrap();
    assert_eq!(updated.department, "Legal");
    assert!(updated.name.starts_with("Zed "));

    let stored = store.find_by_id("user_0002").await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_of_unknown_id_is_none() {
    let store = InMemoryUserStore::seeded(3).instant();
    let result = store.update("user_0404", &UserPatch::department("Legal")).await;
    assert!(result.unwrap().is_none());
    assert_eq!(store.size().await.unwrap(), 3);
}

#[test]
fn test_inverted_latency_is_rejected() {
    assert!(InMemoryUserStore::seeded(1).with_latency(10, 5).is_err());
}

#[tokio::test(start_paused = true)]
async fn test_calls_incur_latency() {
    let store = InMemoryUserStore::seeded(1).with_latency(5, 15).unwrap();
    let started = tokio::time::Instant::now();
    store.find_all().await.unwrap();
    assert!(started.elapsed() >= std::time::Duration::from_millis(5));
}
