//! Environment variable overrides
//!
//! # Running These Tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p tiercache-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Tests use `unsafe` blocks for `env::set_var`/`env::remove_var` because
//! Rust 2024 edition requires this for environment variable mutations.

use std::env;
use tempfile::TempDir;
use tiercache_infrastructure::config::{ConfigLoader, SharedCacheProviderKind};

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

fn loader() -> (TempDir, ConfigLoader) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let loader = ConfigLoader::new().with_config_path(dir.path().join("none.toml"));
    (dir, loader)
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_double_underscore_env_vars_override_nested_keys() {
    set_env("TIERCACHE__SERVER__PORT", "4200");
    set_env("TIERCACHE__CACHE__SHARED__PROVIDER", "memory");

    let (_dir, loader) = loader();
    let config = loader.load().expect("Should load config");

    assert_eq!(config.server.port, 4200);
    assert_eq!(config.cache.shared.provider, SharedCacheProviderKind::Memory);

    remove_env("TIERCACHE__SERVER__PORT");
    remove_env("TIERCACHE__CACHE__SHARED__PROVIDER");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_is_ignored() {
    set_env("TIERCACHE_SERVER_PORT", "4300");

    let (_dir, loader) = loader();
    let config = loader.load().expect("Should load config");
    assert_ne!(config.server.port, 4300);

    remove_env("TIERCACHE_SERVER_PORT");
}
