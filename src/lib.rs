//! rosterdb - a small, file-backed employee roster service
//!
//! One CSV file of employee records, a whole-table record store with atomic
//! replacement, a mutation service enforcing id/email uniqueness, and an
//! axum HTTP adapter.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod service;
pub mod store;
pub mod telemetry;
