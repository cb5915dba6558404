//! Request handlers
//!
//! - [`users`]: user reads and updates
//! - [`cache`]: statistics and maintenance
//! - [`health`]: liveness

pub mod cache;
pub mod health;
pub mod users;
