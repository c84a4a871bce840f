//! Record Store subsystem for rosterdb
//!
//! The store holds the canonical persistent state of the employee roster:
//! one CSV file, read and replaced as a whole on every mutation.
//!
//! # Design Principles
//!
//! - Whole-table read/write (no row-level updates)
//! - Strictly typed rows, validated on read and write
//! - Atomic replacement (temp file + fsync + rename)
//! - A malformed file is an error, never an empty table
//!
//! # Invariants Enforced
//!
//! - Ids are pairwise distinct
//! - Emails are pairwise distinct, case-insensitively
//! - New ids are max + 1 (1 for an empty table)
//! - The file always holds a complete table

mod errors;
mod file;
mod table;

pub use errors::{StoreError, StoreResult};
pub use file::RosterStore;
pub use table::{Employee, Table};
