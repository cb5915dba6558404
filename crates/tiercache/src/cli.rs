//! Command line interface

use clap::Parser;
use std::path::PathBuf;

/// Command line interface for tiercache
#[derive(Parser, Debug)]
#[command(name = "tiercache")]
#[command(about = "tiercache - Two-tier read-through cache server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    ///
    /// Defaults to `tiercache.toml` in the working directory, then
    /// `tiercache/tiercache.toml`, then the user config directory.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
