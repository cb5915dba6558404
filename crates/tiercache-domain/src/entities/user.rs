//! User entity
//!
//! The record cached under `user:<id>` and, as an id-ordered sequence, under
//! `users:all`. Field names serialize in camelCase so cached JSON matches the
//! wire format of the HTTP surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as held by the backing store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identifier (`user_0001` ...)
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Display name, always `"{first_name} {last_name}"`
    pub name: String,
    /// Contact email
    pub email: String,
    /// Department name
    pub department: String,
    /// Role within the department
    pub role: String,
    /// Account status (`active`, `inactive`, `pending`)
    pub status: String,
    /// Office city
    pub city: String,
    /// Yearly salary
    pub salary: u32,
    /// Age in years
    pub age: u32,
    /// Join date (`YYYY-MM-DD`)
    pub joined_at: String,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Apply an allow-listed patch, returning the updated record
    ///
    /// Fields absent from the patch keep their value. The display name is
    /// recomputed and `updated_at` is set to `now` even when the patch is
    /// empty.
    pub fn apply_patch(&self, patch: &UserPatch, now: DateTime<Utc>) -> Self {
        let mut updated = self.clone();

        if let Some(first_name) = &patch.first_name {
            updated.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &patch.last_name {
            updated.last_name.clone_from(last_name);
        }
        if let Some(email) = &patch.email {
            updated.email.clone_from(email);
        }
        if let Some(department) = &patch.department {
            updated.department.clone_from(department);
        }
        if let Some(role) = &patch.role {
            updated.role.clone_from(role);
        }
        if let Some(status) = &patch.status {
            updated.status.clone_from(status);
        }
        if let Some(city) = &patch.city {
            updated.city.clone_from(city);
        }
        if let Some(salary) = patch.salary {
            updated.salary = salary;
        }
        if let Some(age) = patch.age {
            updated.age = age;
        }

        updated.name = format!("{} {}", updated.first_name, updated.last_name);
        updated.updated_at = now;
        updated
    }
}

/// Partial update for a [`User`]
///
/// Only the allow-listed fields exist here; any other field present in an
/// incoming JSON body is dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl UserPatch {
    /// Patch that only changes the department
    pub fn department<S: Into<String>>(department: S) -> Self {
        Self {
            department: Some(department.into()),
            ..Self::default()
        }
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
