//! Backing Store Port

use crate::entities::{User, UserPatch};
use crate::error::Result;
use async_trait::async_trait;

/// Authoritative source of user records
///
/// Calls may take real time. Errors are propagated by the cache manager as a
/// failure of the whole request.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// Every user, sorted by id
    async fn find_all(&self) -> Result<Vec<User>>;

    /// One user by id
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Apply an allow-listed patch; `None` if the id is unknown
    async fn update(&self, id: &str, patch: &UserPatch) -> Result<Option<User>>;

    /// Number of records
    async fn size(&self) -> Result<usize>;
}
