//! Backing store implementations
//!
//! | Store | Description |
//! |-------|-------------|
//! | [`InMemoryUserStore`] | Seeded user table with simulated latency |

pub mod memory;
pub mod seed;

pub use memory::InMemoryUserStore;
pub use seed::{generate_user, seed_users};
