//! Cache statistics and maintenance endpoints

use crate::responses::{ApiResult, DataBody, MessageBody, service_error};
use crate::routes::ServerState;
use rocket::serde::json::Json;
use rocket::{State, get, post};
use tiercache_application::CacheStatsReport;
use tracing::info;

/// Per-tier counters and the store record count
///
/// GET /api/cache/stats
#[get("/cache/stats")]
pub async fn cache_stats(
    state: &State<ServerState>,
) -> ApiResult<Json<DataBody<CacheStatsReport>>> {
    let report = state
        .cache
        .stats()
        .await
        .map_err(|e| service_error("stats", e))?;
    Ok(Json(DataBody {
        success: true,
        data: report,
    }))
}

/// Flush both tiers, then zero both tiers' counters
///
/// POST /api/cache/reset
#[post("/cache/reset")]
pub async fn reset_cache(state: &State<ServerState>) -> ApiResult<Json<MessageBody>> {
    state
        .cache
        .flush_all()
        .await
        .map_err(|e| service_error("flush_all", e))?;
    state.cache.reset_counters();
    info!("Cache tiers flushed and counters reset");
    Ok(MessageBody::ok(
        "All cache layers flushed and counters reset.",
    ))
}

/// Flush both tiers, keeping counters
///
/// POST /api/cache/flush
#[post("/cache/flush")]
pub async fn flush_cache(state: &State<ServerState>) -> ApiResult<Json<MessageBody>> {
    state
        .cache
        .flush_all()
        .await
        .map_err(|e| service_error("flush_all", e))?;
    Ok(MessageBody::ok("All cache layers flushed."))
}

/// Zero both tiers' counters, keeping cached data
///
/// POST /api/cache/counters/reset
#[post("/cache/counters/reset")]
pub fn reset_counters(state: &State<ServerState>) -> Json<MessageBody> {
    state.cache.reset_counters();
    MessageBody::ok("Cache counters reset.")
}
