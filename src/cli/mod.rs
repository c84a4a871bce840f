//! CLI module for rosterdb
//!
//! Provides the command-line interface:
//! - init: create the roster file and report its state
//! - serve: boot telemetry and enter the HTTP serving loop

mod args;
mod commands;

pub use args::{Cli, Command};
pub use commands::{init, run, serve, CliError, CliResult};
