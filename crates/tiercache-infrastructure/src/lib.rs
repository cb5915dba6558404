//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns of tiercache.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading and validation |
//! | [`logging`] | tracing-subscriber initialisation and log helpers |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`bootstrap`] | Composition root wiring providers into the cache manager |
//! | [`constants`] | File names, env prefixes, HTTP defaults |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{AppContext, init_app};
pub use config::{AppConfig, ConfigLoader};
