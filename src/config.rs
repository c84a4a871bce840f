//! Service Configuration
//!
//! Bind address, CORS origins, roster file location, and the write-lock
//! wait bound. Loadable from a JSON file; every field has a default so a
//! partial (or absent) config file works.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// rosterdb configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Path to the roster CSV file (default: "./employees.csv")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Upper bound on waiting for the write lock, in milliseconds
    /// (default: 5000). A writer that waits longer fails retryable.
    #[serde(default = "default_lock_wait_ms")]
    pub lock_wait_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./employees.csv")
}

fn default_lock_wait_ms() -> u64 {
    5000
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            data_file: default_data_file(),
            lock_wait_ms: default_lock_wait_ms(),
        }
    }
}

impl RosterConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn lock_wait(&self) -> Duration {
        Duration::from_millis(self.lock_wait_ms)
    }
}
