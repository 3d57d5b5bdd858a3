//! Dispatch engine binary for Brigada.
//!
//! Loads configuration, builds the shared dispatch engine, optionally
//! replays a scenario file against it and prints the final state as JSON
//! on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! brigada-engine [scenario.yaml]
//! ```
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `brigada-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build the dispatch engine from the roster and map
//! 4. Replay the scenario, if one was given
//! 5. Print the dispatch snapshot

mod error;
mod scenario;

use std::path::Path;

use brigada_dispatch::{DispatchConfig, DispatchEngine, LoggingConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::scenario::Scenario;

/// Default configuration file, relative to the working directory.
const CONFIG_PATH: &str = "brigada-config.yaml";

/// Application entry point for the dispatch engine.
///
/// # Errors
///
/// Returns an error if configuration, scenario loading or an internal
/// engine failure stops the run.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_found = Path::new(CONFIG_PATH).exists();
    let config = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("brigada-engine starting");
    if !config_found {
        info!("Config file not found, using defaults");
    }
    info!(
        teams = config.teams.len(),
        locations = config.map.locations.len(),
        edges = config.map.edges.len(),
        "Configuration loaded"
    );

    // 3. Build the engine.
    let engine = DispatchEngine::from_config(&config).map_err(EngineError::from)?;
    info!("Dispatch engine ready");

    // 4. Replay the scenario.
    if let Some(path) = std::env::args().nth(1) {
        let scenario = load_scenario(&path).await?;
        info!(path = %path, steps = scenario.steps.len(), "Replaying scenario");
        let report = scenario::replay(&engine, &scenario).map_err(EngineError::from)?;
        info!(
            succeeded = report.succeeded,
            failed = report.failures.len(),
            "Scenario complete"
        );
    }

    // 5. Print the final state.
    let snapshot = engine.snapshot().map_err(EngineError::from)?;
    let json = serde_json::to_string_pretty(&snapshot).map_err(EngineError::from)?;
    println!("{json}");

    Ok(())
}

/// Load configuration from `brigada-config.yaml`, falling back to the
/// built-in defaults when the file does not exist.
fn load_config() -> Result<DispatchConfig, EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok(DispatchConfig::from_file(config_path)?)
    } else {
        Ok(DispatchConfig::parse("")?)
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured
/// level.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn load_scenario(path: &str) -> Result<Scenario, EngineError> {
    let contents = tokio::fs::read_to_string(path).await?;
    Ok(Scenario::parse(&contents)?)
}
