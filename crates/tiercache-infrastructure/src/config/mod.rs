//! Configuration
//!
//! Layered configuration: built-in defaults, then a TOML file, then
//! `TIERCACHE__` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
