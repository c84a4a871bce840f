//! rosterdb entry point
//!
//! Parses CLI arguments, dispatches to the CLI commands, prints errors to
//! stderr, and exits non-zero on failure. All logic lives in the library.

use rosterdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
