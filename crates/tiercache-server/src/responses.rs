//! Response bodies and the error mapping shared by every handler

use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{Request, Response};
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tiercache_domain::error::Error;
use tiercache_domain::{CacheSource, InvalidationAction, User};
use tiercache_infrastructure::constants::CACHE_SOURCE_HEADER;
use tracing::error;

/// Error body returned for every non-2xx response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// Human readable reason
    pub message: String,
}

impl ErrorBody {
    /// Error body with `message`
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Handler error: status plus JSON body
pub type ApiError = (Status, Json<ErrorBody>);

/// Handler result
pub type ApiResult<T> = Result<T, ApiError>;

/// 404 with the standard body
pub fn not_found(message: &str) -> ApiError {
    (Status::NotFound, Json(ErrorBody::new(message)))
}

/// Map a service error to a response, logging it
///
/// Unreachable dependencies surface as 503, everything else as 500.
pub fn service_error(operation: &str, err: Error) -> ApiError {
    error!(operation = operation, error = %err, "Request failed");
    let status = if err.is_unavailable() {
        Status::ServiceUnavailable
    } else {
        Status::InternalServerError
    };
    (status, Json(ErrorBody::new(err.to_string())))
}

/// JSON body tagged with the tier that resolved the read
///
/// Sets the `X-Cache-Source` header next to the body.
#[derive(Debug)]
pub struct Sourced<T> {
    body: T,
    source: CacheSource,
}

impl<T> Sourced<T> {
    /// Tag `body` with `source`
    pub fn new(body: T, source: CacheSource) -> Self {
        Self { body, source }
    }
}

impl<'r, T: Serialize> Responder<'r, 'static> for Sourced<T> {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        Response::build_from(Json(self.body).respond_to(request)?)
            .raw_header(CACHE_SOURCE_HEADER, self.source.as_str())
            .ok()
    }
}

fn serialize_shared<T: Serialize, S: Serializer>(
    value: &Arc<T>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    T::serialize(value, serializer)
}

/// `GET /api/users` body
#[derive(Debug, Serialize)]
pub struct UserListBody {
    pub success: bool,
    pub source: CacheSource,
    pub count: usize,
    #[serde(serialize_with = "serialize_shared")]
    pub data: Arc<Vec<User>>,
}

/// `GET /api/users/<id>` body
#[derive(Debug, Serialize)]
pub struct UserBody {
    pub success: bool,
    pub source: CacheSource,
    #[serde(serialize_with = "serialize_shared")]
    pub data: Arc<User>,
}

/// `PUT /api/users/<id>` body
#[derive(Debug, Serialize)]
pub struct UpdateBody {
    pub success: bool,
    pub message: &'static str,
    /// Invalidation steps in the order they ran
    pub invalidated: Vec<InvalidationAction>,
    pub data: User,
}

/// Body carrying arbitrary data
#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub success: bool,
    pub data: T,
}

/// Body carrying only a confirmation message
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub success: bool,
    pub message: &'static str,
}

impl MessageBody {
    /// Successful response with `message`
    pub fn ok(message: &'static str) -> Json<Self> {
        Json(Self {
            success: true,
            message,
        })
    }
}
