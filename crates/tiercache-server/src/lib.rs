//! # tiercache HTTP server
//!
//! Thin Rocket surface over [`CacheServiceInterface`]. Handlers translate
//! requests into cache service calls and shape the JSON responses; every
//! caching decision lives in the application layer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tiercache_server::run_server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config: ./tiercache.toml, then TIERCACHE__* environment
//!     run_server(None).await
//! }
//! ```
//!
//! ## Endpoints
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/api/users` | GET | Every user (`X-Cache-Source` header) |
//! | `/api/users/<id>` | GET | One user (`X-Cache-Source` header) |
//! | `/api/users/<id>` | PUT | Update with selective invalidation |
//! | `/api/cache/stats` | GET | Per-tier counters and store size |
//! | `/api/cache/reset` | POST | Flush both tiers and zero counters |
//! | `/api/cache/flush` | POST | Flush both tiers |
//! | `/api/cache/counters/reset` | POST | Zero counters only |
//! | `/health` | GET | Liveness |
//!
//! [`CacheServiceInterface`]: tiercache_application::CacheServiceInterface

pub mod handlers;
pub mod init;
pub mod responses;
pub mod routes;

pub use init::run_server;
pub use routes::{ServerState, build_rocket};
