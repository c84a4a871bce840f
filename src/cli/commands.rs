//! CLI command implementations.
//!
//! An absent config file means "all defaults"; a present but malformed one
//! is an error, same policy as the roster file itself.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::RosterConfig;
use crate::http_server::HttpServer;
use crate::store::{RosterStore, StoreError};
use crate::telemetry;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file {path} is invalid: {reason}")]
    Config { path: String, reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = super::Cli::parse_args();
    match cli.command {
        super::Command::Init { config } => init(&config),
        super::Command::Serve { config } => serve(&config),
    }
}

/// Create the roster file if absent and report its state
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = RosterStore::new(&config.data_file);
    let table = store.load_all()?;
    println!(
        "roster at {} holds {} employee(s)",
        store.path().display(),
        table.len()
    );
    Ok(())
}

/// Initialize telemetry and run the HTTP server until shutdown
pub fn serve(config_path: &Path) -> CliResult<()> {
    telemetry::init_telemetry();
    let config = load_config(config_path)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(HttpServer::new(config).start())?;
    Ok(())
}

fn load_config(path: &Path) -> CliResult<RosterConfig> {
    if !path.exists() {
        return Ok(RosterConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Config {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
