//! User endpoint tests

use crate::test_utils::{SEED_SIZE, UnreachableStore, client, client_over, json_body, service_over};
use rocket::http::{ContentType, Status};
use std::sync::Arc;

const SOURCE_HEADER: &str = "X-Cache-Source";

#[rocket::async_test]
async fn test_list_users_reports_source_per_tier() {
    let client = client().await;

    let cold = client.get("/api/users").dispatch().await;
    assert_eq!(cold.status(), Status::Ok);
    assert_eq!(cold.headers().get_one(SOURCE_HEADER), Some("STORE"));
    let json = json_body(cold).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["source"], "STORE");
    assert_eq!(json["count"], SEED_SIZE);
    assert_eq!(json["data"].as_array().map(Vec::len), Some(SEED_SIZE));
    assert_eq!(json["data"][0]["id"], "user_0001");

    let warm = client.get("/api/users").dispatch().await;
    assert_eq!(warm.headers().get_one(SOURCE_HEADER), Some("L1"));
}

#[rocket::async_test]
async fn test_get_user() {
    let client = client().await;

    let response = client.get("/api/users/user_0003").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.headers().get_one(SOURCE_HEADER), Some("STORE"));
    let json = json_body(response).await;
    assert_eq!(json["data"]["id"], "user_0003");
    assert!(json["data"]["email"].as_str().is_some_and(|e| e.ends_with("3@company.com")));

    let again = client.get("/api/users/user_0003").dispatch().await;
    assert_eq!(again.headers().get_one(SOURCE_HEADER), Some("L1"));
}

#[rocket::async_test]
async fn test_get_unknown_user_is_404() {
    let client = client().await;

    let response = client.get("/api/users/user_9999").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    assert!(response.headers().get_one(SOURCE_HEADER).is_none());
    let json = json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "User not found");
}

#[rocket::async_test]
async fn test_update_user_returns_invalidation_actions() {
    let client = client().await;
    client.get("/api/users").dispatch().await;

    let response = client
        .put("/api/users/user_0007")
        .header(ContentType::JSON)
        .body(r#"{"department":"Legal","id":"user_9999","salary":1}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["id"], "user_0007");
    assert_eq!(json["data"]["department"], "Legal");
    assert_eq!(json["data"]["salary"], 1);

    let invalidated = json["invalidated"].as_array().expect("actions");
    let keys: Vec<&str> = invalidated
        .iter()
        .filter_map(|a| a["key"].as_str())
        .collect();
    assert_eq!(keys, ["user:user_0007", "user:user_0007", "users:all", "users:all"]);

    // The patched collection is served from L1 with the new value
    let listing = client.get("/api/users").dispatch().await;
    assert_eq!(listing.headers().get_one(SOURCE_HEADER), Some("L1"));
    let json = json_body(listing).await;
    assert_eq!(json["data"][6]["department"], "Legal");
}

#[rocket::async_test]
async fn test_update_unknown_user_is_404() {
    let client = client().await;

    let response = client
        .put("/api/users/user_9999")
        .header(ContentType::JSON)
        .body(r#"{"department":"Legal"}"#)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_malformed_update_body_is_rejected() {
    let client = client().await;

    let response = client
        .put("/api/users/user_0001")
        .header(ContentType::JSON)
        .body("{not json")
        .dispatch()
        .await;
    assert!(response.status().class().is_client_error());
    let json = json_body(response).await;
    assert_eq!(json["success"], false);
}

#[rocket::async_test]
async fn test_unreachable_store_is_503() {
    let client = client_over(service_over(Arc::new(UnreachableStore))).await;

    let response = client.get("/api/users/user_0001").dispatch().await;
    assert_eq!(response.status(), Status::ServiceUnavailable);
    let json = json_body(response).await;
    assert_eq!(json["success"], false);
}
