//! Prize wheel server binary.
//!
//! Wires together configuration, logging, the game state store and the HTTP
//! API, then serves until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `wheel-config.yaml` (or `$WHEEL_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Create the state store with the configured durations
//! 4. Prepare the wheel image directory
//! 5. Serve the HTTP API

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wheel_api::{AppState, ServerConfig};
use wheel_core::assets::AssetSource;
use wheel_core::config::WheelConfig;
use wheel_core::store::StateStore;
use wheel_types::GameState;

use crate::error::AppError;

/// Default config file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "wheel-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server cannot bind.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Load configuration.
    let (config, config_path) = load_config()?;

    // 2. Initialize structured logging. `RUST_LOG` wins over the config file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("wheel-server starting");
    match &config_path {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Config file not found, using defaults"),
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        static_dir = %config.assets.static_dir.display(),
        overrides_file = %config.assets.overrides_file.display(),
        result_duration = config.game.result_duration,
        global_time_set = config.game.global_time_set,
        "Effective configuration"
    );

    // 3. Create the state store.
    let store = Arc::new(StateStore::new(GameState::with_durations(
        config.game.result_duration,
        config.game.global_time_set,
    )));

    // 4. Prepare the image directory so the first listing is not a surprise.
    let assets = AssetSource::from_config(&config.assets);
    let initial = assets.list();
    if initial.is_empty() {
        warn!(
            image_dir = %assets.image_dir().display(),
            "No wheel images found; add png/jpg/jpeg/gif files to fill the wheel"
        );
    } else {
        info!(entries = initial.len(), "Wheel images found");
    }

    // 5. Serve.
    let state = Arc::new(AppState::new(store, assets, config.assets.static_dir.clone()));
    wheel_api::start_server(&ServerConfig::from(&config.server), state).await?;

    info!("wheel-server shutdown complete");
    Ok(())
}

/// Load configuration from `$WHEEL_CONFIG` or [`DEFAULT_CONFIG_PATH`].
///
/// Returns the path actually read, or `None` when no file exists and
/// defaults (plus environment overrides) are used.
fn load_config() -> Result<(WheelConfig, Option<PathBuf>), AppError> {
    let path = std::env::var_os("WHEEL_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if path.exists() {
        let config = WheelConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        let mut config = WheelConfig::default();
        config.apply_env_overrides()?;
        Ok((config, None))
    }
}
