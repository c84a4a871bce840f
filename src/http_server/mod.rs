//! HTTP adapter for rosterdb
//!
//! Routes, error-to-status mapping, and the server itself. Everything here
//! is a thin shell over [`crate::service`]; nothing in this module touches
//! the roster file directly.

mod employee_routes;
mod errors;
mod server;

pub use employee_routes::{employee_routes, DeleteEmployeeResponse, EmployeeState};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
