//! Cached payload types
//!
//! Collections are immutable snapshots behind an `Arc`: a write that patches
//! the collection builds a fresh `Vec` and stores that, so a reader holding
//! the previous snapshot never observes a half-applied change.

use crate::entities::User;
use crate::error::{Error, Result};
use crate::value_objects::KeyKind;
use std::sync::Arc;

/// Payload held by the local tier
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    /// A single user
    Entity(Arc<User>),
    /// The full user collection, sorted by id
    Collection(Arc<Vec<User>>),
}

impl CachedValue {
    /// Wrap a single user
    pub fn entity(user: User) -> Self {
        Self::Entity(Arc::new(user))
    }

    /// Wrap a collection snapshot
    pub fn collection(users: Vec<User>) -> Self {
        Self::Collection(Arc::new(users))
    }

    /// Kind of key this payload belongs under
    pub fn kind(&self) -> KeyKind {
        match self {
            Self::Entity(_) => KeyKind::Entity,
            Self::Collection(_) => KeyKind::Collection,
        }
    }

    /// The user, if this is an entity payload
    pub fn as_entity(&self) -> Option<&Arc<User>> {
        match self {
            Self::Entity(user) => Some(user),
            Self::Collection(_) => None,
        }
    }

    /// The collection, if this is a collection payload
    pub fn as_collection(&self) -> Option<&Arc<Vec<User>>> {
        match self {
            Self::Collection(users) => Some(users),
            Self::Entity(_) => None,
        }
    }

    /// Serialize to the JSON interchange form used by the shared tier
    pub fn to_json(&self) -> Result<serde_json::Value> {
        let value = match self {
            Self::Entity(user) => serde_json::to_value(user.as_ref())?,
            Self::Collection(users) => serde_json::to_value(users.as_ref())?,
        };
        Ok(value)
    }

    /// Decode a shared-tier payload expected under a key of `kind`
    pub fn from_shared(kind: KeyKind, value: SharedValue) -> Result<Self> {
        let SharedValue::Json(json) = value else {
            return Err(Error::cache("shared value is not JSON"));
        };
        match kind {
            KeyKind::Entity => Ok(Self::entity(serde_json::from_value(json)?)),
            KeyKind::Collection => Ok(Self::collection(serde_json::from_value(json)?)),
        }
    }
}

/// Payload read back from the shared tier
///
/// Values this system wrote are always JSON. Anything else found under a key
/// is handed back verbatim instead of failing the read.
#[derive(Debug, Clone, PartialEq)]
pub enum SharedValue {
    /// Parsed JSON document
    Json(serde_json::Value),
    /// Stored text that did not parse as JSON
    Raw(String),
}

impl SharedValue {
    /// Parse stored text, falling back to the raw string
    pub fn parse(raw: String) -> Self {
        match serde_json::from_str(&raw) {
            Ok(json) => Self::Json(json),
            Err(_) => Self::Raw(raw),
        }
    }
}
