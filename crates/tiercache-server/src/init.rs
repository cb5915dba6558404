//! Server Initialization
//!
//! Loads configuration, installs logging, wires the cache tiers and launches
//! Rocket. An unreachable shared tier aborts startup before the listener is
//! bound.

use crate::routes::build_rocket;
use std::path::Path;
use tiercache_infrastructure::config::{AppConfig, ConfigLoader};
use tiercache_infrastructure::logging::init_logging;
use tiercache_infrastructure::{AppContext, init_app};
use tracing::{error, info};

/// Run the tiercache server until shutdown
pub async fn run_server(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        shared = ?config.cache.shared.provider,
        "Starting tiercache server"
    );

    let context = match init_app(config).await {
        Ok(context) => context,
        Err(e) => {
            error!(error = %e, "Startup aborted");
            return Err(e.into());
        }
    };

    launch(context).await
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

async fn launch(context: AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let server = &context.config.server;
    let figment = rocket::Config::figment()
        .merge(("address", server.host.clone()))
        .merge(("port", server.port));

    info!("HTTP server listening on {}:{}", server.host, server.port);
    build_rocket(context.cache_service())
        .configure(figment)
        .launch()
        .await?;
    Ok(())
}
