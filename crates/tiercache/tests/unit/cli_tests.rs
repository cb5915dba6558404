//! CLI parsing tests

use clap::Parser;
use std::path::Path;
use tiercache::Cli;

#[test]
fn test_config_is_optional() {
    let cli = Cli::try_parse_from(["tiercache"]).unwrap();
    assert!(cli.config.is_none());
}

#[test]
fn test_config_flag() {
    let cli = Cli::try_parse_from(["tiercache", "--config", "/etc/tiercache.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/tiercache.toml")));

    let short = Cli::try_parse_from(["tiercache", "-c", "local.toml"]).unwrap();
    assert_eq!(short.config.as_deref(), Some(Path::new("local.toml")));
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["tiercache", "--server"]).is_err());
}
