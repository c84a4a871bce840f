//! Record store error types.
//!
//! Both variants mean the durable store is unavailable: an unreadable or
//! unparsable roster file must surface to the caller and must never be
//! reported as an empty (successful) table.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Disk I/O failure while reading or replacing the roster file
    #[error("roster file I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The roster file exists but does not parse as the expected table
    #[error("roster file at {path} is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        StoreError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
