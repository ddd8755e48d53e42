//! Engine binary for the Furrow farm simulation.
//!
//! Wires configuration, logging, and a [`GameSession`] to a line protocol:
//! commands arrive as JSON objects on stdin, one per line, and every
//! outcome is written as one JSON object per line on stdout. Logs go to
//! stderr so they never interleave with protocol output.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `$FURROW_CONFIG`, the first argument, or
//!    `furrow-config.yaml`
//! 3. Scatter rocks and start the session
//! 4. Run the command loop until the session ends or stdin closes

mod driver;
mod error;
mod protocol;

use std::io;
use std::path::PathBuf;

use furrow_core::{GameConfig, GameSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Default configuration file, read from the working directory.
const DEFAULT_CONFIG_PATH: &str = "furrow-config.yaml";

/// Environment variable naming an alternative configuration file.
const CONFIG_ENV_VAR: &str = "FURROW_CONFIG";

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!("furrow-engine starting");

    let config = load_config()?;
    info!(
        rows = config.farm.rows,
        columns = config.farm.columns,
        rocks = config.farm.rocks,
        seed = ?config.farm.seed,
        "Configuration loaded"
    );

    let rng = config.random_source();
    let mut session = GameSession::from_config(&config, rng)?;

    let outcome = driver::run(&mut session, io::stdin().lock(), io::stdout().lock())?;
    match outcome {
        Some(reason) => info!(day = session.day(), reason = %reason, "furrow-engine finished"),
        None => info!(day = session.day(), "furrow-engine finished without an ending"),
    }
    Ok(())
}

/// Load configuration, falling back to defaults when no file is present.
///
/// An explicitly named file must exist; the default path may be absent.
fn load_config() -> Result<GameConfig, EngineError> {
    let explicit = std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .or_else(|| std::env::args_os().nth(1).map(PathBuf::from));

    if let Some(path) = explicit {
        info!(path = %path.display(), "Loading configuration");
        return Ok(GameConfig::from_file(&path)?);
    }

    let path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if path.exists() {
        Ok(GameConfig::from_file(&path)?)
    } else {
        info!("Config file not found, using defaults");
        Ok(GameConfig::default())
    }
}
