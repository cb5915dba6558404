//! Cache key value object
//!
//! Keys are namespaced by kind so an entity key can never collide with the
//! collection key: entities live under `user:<id>`, the collection under
//! `users:all`.

use crate::constants::{COLLECTION_KEY, ENTITY_KEY_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a key addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    /// A single entity
    Entity,
    /// The full, id-ordered collection
    Collection,
}

/// A cache key together with its kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    kind: KeyKind,
    key: String,
}

impl CacheKey {
    /// Key for a single entity
    pub fn entity(id: &str) -> Self {
        Self {
            kind: KeyKind::Entity,
            key: format!("{ENTITY_KEY_PREFIX}:{id}"),
        }
    }

    /// Key for the full collection
    pub fn collection() -> Self {
        Self {
            kind: KeyKind::Collection,
            key: COLLECTION_KEY.to_string(),
        }
    }

    /// Recover a typed key from its string form
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == COLLECTION_KEY {
            return Some(Self::collection());
        }
        raw.split_once(':')
            .filter(|(prefix, id)| *prefix == ENTITY_KEY_PREFIX && !id.is_empty())
            .map(|(_, id)| Self::entity(id))
    }

    /// The kind of this key
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// The string form stored in the tiers
    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}
