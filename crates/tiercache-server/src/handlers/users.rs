//! User endpoints

use crate::responses::{
    ApiResult, Sourced, UpdateBody, UserBody, UserListBody, not_found, service_error,
};
use crate::routes::ServerState;
use rocket::serde::json::Json;
use rocket::{State, get, put};
use tiercache_domain::UserPatch;

const USER_NOT_FOUND: &str = "User not found";

/// Every user, resolved L1 → L2 → store
///
/// GET /api/users
#[get("/users")]
pub async fn list_users(state: &State<ServerState>) -> ApiResult<Sourced<UserListBody>> {
    let lookup = state
        .cache
        .get_all_users()
        .await
        .map_err(|e| service_error("get_all_users", e))?;

    Ok(Sourced::new(
        UserListBody {
            success: true,
            source: lookup.source,
            count: lookup.users.len(),
            data: lookup.users,
        },
        lookup.source,
    ))
}

/// One user
///
/// GET /api/users/<id>
#[get("/users/<id>")]
pub async fn get_user(state: &State<ServerState>, id: &str) -> ApiResult<Sourced<UserBody>> {
    let lookup = state
        .cache
        .get_user(id)
        .await
        .map_err(|e| service_error("get_user", e))?;

    let Some(user) = lookup.user else {
        return Err(not_found(USER_NOT_FOUND));
    };
    Ok(Sourced::new(
        UserBody {
            success: true,
            source: lookup.source,
            data: user,
        },
        lookup.source,
    ))
}

/// Update a user and selectively invalidate its cached copies
///
/// PUT /api/users/<id>
///
/// Unknown body fields are ignored; only patchable fields are applied.
#[put("/users/<id>", format = "json", data = "<patch>")]
pub async fn update_user(
    state: &State<ServerState>,
    id: &str,
    patch: Json<UserPatch>,
) -> ApiResult<Json<UpdateBody>> {
    let outcome = state
        .cache
        .update_user(id, &patch)
        .await
        .map_err(|e| service_error("update_user", e))?;

    let Some(user) = outcome.user else {
        return Err(not_found(USER_NOT_FOUND));
    };
    Ok(Json(UpdateBody {
        success: true,
        message: "User updated. Selective cache invalidation applied.",
        invalidated: outcome.actions,
        data: user,
    }))
}
