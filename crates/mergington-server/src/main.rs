//! Server binary for the Mergington activities API.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from YAML (plus environment overrides)
//! 2. Initialize structured logging (tracing)
//! 3. Seed the roster store with the built-in activity catalogue
//! 4. Serve the HTTP API until `Ctrl-C`

mod config;
mod error;

use std::path::PathBuf;
use std::sync::Arc;

use mergington_api::{start_server, AppState};
use mergington_roster::RosterStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat, LoggingConfig, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use crate::error::AppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, seeding, or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so failures surface
    //    through the returned error.
    let (config, config_path, from_file) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);

    info!("mergington-server starting");
    if from_file {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        static_dir = %config.server.static_dir.display(),
        capacity_policy = ?config.roster.capacity_policy,
        "Effective configuration"
    );

    run(&config).await?;

    info!("mergington-server shutdown complete");
    Ok(())
}

/// Seed the store and serve until shutdown.
async fn run(config: &AppConfig) -> Result<(), AppError> {
    // 3. Seed the roster store.
    let roster = Arc::new(RosterStore::with_seed(config.roster.capacity_policy)?);
    info!(
        activities = roster.len(),
        capacity_policy = ?roster.capacity_policy(),
        "Activity roster seeded"
    );

    // 4. Serve.
    let state = Arc::new(AppState::new(roster));
    start_server(&config.server.to_server_config(), state).await?;

    Ok(())
}

/// Load configuration from the file named by `MERGINGTON_CONFIG`, or
/// `mergington.yaml` in the working directory.
///
/// Returns the config, the path that was consulted, and whether the file
/// existed.
fn load_config() -> Result<(AppConfig, PathBuf, bool), AppError> {
    let config_path = std::env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if config_path.exists() {
        let config = AppConfig::from_file(&config_path)?;
        Ok((config, config_path, true))
    } else {
        let mut config = AppConfig::default();
        config.apply_env_overrides()?;
        Ok((config, config_path, false))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `logging.level` when it is set and valid.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
