//! Rocket assembly: managed state, routes and catchers

use crate::handlers::{cache, health, users};
use crate::responses::ErrorBody;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, catch, catchers, routes};
use std::sync::Arc;
use tiercache_application::CacheServiceInterface;

/// State shared by every handler
#[derive(Clone)]
pub struct ServerState {
    /// The multi-tier cache service
    pub cache: Arc<dyn CacheServiceInterface>,
}

/// Build the Rocket application over `cache`
///
/// The returned instance is unconfigured: callers bind address and port
/// through [`Rocket::configure`].
pub fn build_rocket(cache: Arc<dyn CacheServiceInterface>) -> Rocket<Build> {
    rocket::build()
        .manage(ServerState { cache })
        .mount(
            "/api",
            routes![
                users::list_users,
                users::get_user,
                users::update_user,
                cache::cache_stats,
                cache::reset_cache,
                cache::flush_cache,
                cache::reset_counters,
            ],
        )
        .mount("/", routes![health::health_check])
        .register("/", catchers![not_found, default_catcher])
}

#[catch(404)]
fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody::new("Not found"))
}

#[catch(default)]
fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorBody>) {
    let message = status.reason().unwrap_or("Internal server error");
    (status, Json(ErrorBody::new(message)))
}
