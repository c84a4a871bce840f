//! Mutation API error taxonomy.
//!
//! Four client-visible kinds plus `Busy` for a bounded lock wait that ran
//! out. `Storage` is the only kind that indicates the system itself is
//! degraded; it is always surfaced, never mapped to an empty success.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for mutation API operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the employee service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing input; the client's fault, never retried
    #[error("{0}")]
    Validation(String),

    /// Uniqueness violation (duplicate email)
    #[error("email {0:?} is already in use")]
    Conflict(String),

    /// No record with the given id
    #[error("no employee with id {0}")]
    NotFound(u64),

    /// The write lock could not be acquired within the configured bound;
    /// retryable by the caller
    #[error("another write is in progress, try again")]
    Busy,

    /// Durable store I/O or parse failure
    #[error("storage unavailable: {0}")]
    Storage(#[from] StoreError),
}

impl ServiceError {
    /// Machine-readable error code, stable across message changes
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "VALIDATION_ERROR",
            ServiceError::Conflict(_) => "DUPLICATE_EMAIL",
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::Busy => "WRITE_BUSY",
            ServiceError::Storage(_) => "STORAGE_UNAVAILABLE",
        }
    }
}
