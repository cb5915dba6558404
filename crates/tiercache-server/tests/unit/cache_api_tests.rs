//! Cache statistics and maintenance endpoint tests

use crate::test_utils::{SEED_SIZE, client, json_body};
use rocket::http::Status;
use rocket::local::asynchronous::Client;

async fn stats(client: &Client) -> serde_json::Value {
    let response = client.get("/api/cache/stats").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    json_body(response).await
}

#[rocket::async_test]
async fn test_stats_report_both_tiers() {
    let client = client().await;
    client.get("/api/users/user_0001").dispatch().await;
    client.get("/api/users/user_0001").dispatch().await;

    let json = stats(&client).await;
    assert_eq!(json["success"], true);
    let data = &json["data"];
    assert_eq!(data["store_size"], SEED_SIZE);
    assert_eq!(data["l1"]["hits"], 1);
    assert_eq!(data["l1"]["misses"], 1);
    assert_eq!(data["l2"]["misses"], 1);
    assert_eq!(data["l2"]["layer"], "L2 (in-memory)");
}

#[rocket::async_test]
async fn test_reset_flushes_and_zeroes_counters() {
    let client = client().await;
    client.get("/api/users").dispatch().await;

    let response = client.post("/api/cache/reset").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(json_body(response).await["success"], true);

    let data = stats(&client).await["data"].clone();
    assert_eq!(data["l1"]["hits"], 0);
    assert_eq!(data["l1"]["misses"], 0);
    assert_eq!(data["l1"]["current_size"], 0);

    let listing = client.get("/api/users").dispatch().await;
    assert_eq!(listing.headers().get_one("X-Cache-Source"), Some("STORE"));
}

#[rocket::async_test]
async fn test_flush_keeps_counters() {
    let client = client().await;
    client.get("/api/users").dispatch().await;

    let response = client.post("/api/cache/flush").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let data = stats(&client).await["data"].clone();
    assert_eq!(data["l1"]["misses"], 1);
    assert_eq!(data["l1"]["current_size"], 0);
}

#[rocket::async_test]
async fn test_counter_reset_keeps_cached_data() {
    let client = client().await;
    client.get("/api/users").dispatch().await;

    let response = client.post("/api/cache/counters/reset").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let data = stats(&client).await["data"].clone();
    assert_eq!(data["l1"]["misses"], 0);
    assert_eq!(data["l1"]["current_size"], 1);

    let listing = client.get("/api/users").dispatch().await;
    assert_eq!(listing.headers().get_one("X-Cache-Source"), Some("L1"));
}
