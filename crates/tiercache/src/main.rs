//! tiercache - Entry Point
//!
//! Binary entry point for the tiercache server. Exits non-zero when
//! configuration is invalid or the shared tier is unreachable at startup.

use clap::Parser;
use tiercache::{Cli, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run_server(cli.config.as_deref()).await
}
