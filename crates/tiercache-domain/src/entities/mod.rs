//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`User`] | Authoritative user record served through the cache tiers |
//! | [`UserPatch`] | Allow-listed partial update applied by the backing store |

/// User record and patch types
pub mod user;

pub use user::{User, UserPatch};
