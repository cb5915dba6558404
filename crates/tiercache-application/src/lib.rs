//! Application Layer - tiercache
//!
//! Use cases of the multi-tier user cache, composed from the port traits of
//! `tiercache-domain`.
//!
//! ## Architecture
//!
//! The application layer:
//! - Implements the read, write and invalidation protocol across L1, L2 and
//!   the backing store
//! - Owns TTL policy decisions and statistics aggregation
//! - Has no dependencies on infrastructure, providers or HTTP frameworks
//!
//! ## Ports (Interfaces)
//!
//! - `ports::services::CacheServiceInterface`: the service surface consumed
//!   by the HTTP layer
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `tiercache-domain`: entities, value objects and provider ports
//! - Pure Rust libraries for async, serialization and logging

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
