//! The in-memory roster table.
//!
//! A `Table` is the entire persisted state materialized for one
//! read-mutate-write cycle. It is rebuilt from the roster file at the start
//! of every operation and discarded at the end; no component holds a table
//! across cycles.
//!
//! # Invariants
//!
//! - All ids are pairwise distinct
//! - All emails are pairwise distinct, compared case-insensitively
//! - A new id is `max(existing ids) + 1`, or 1 for an empty table

use serde::{Deserialize, Serialize};

/// A single employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// Ordered collection of employee records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Employee>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows, rejecting duplicate ids or
    /// case-insensitively duplicate emails.
    pub fn from_rows(rows: Vec<Employee>) -> Result<Self, String> {
        for (i, row) in rows.iter().enumerate() {
            for earlier in &rows[..i] {
                if earlier.id == row.id {
                    return Err(format!("duplicate id {}", row.id));
                }
                if earlier.email.eq_ignore_ascii_case(&row.email) {
                    return Err(format!("duplicate email {:?}", row.email));
                }
            }
        }
        Ok(Self { rows })
    }

    /// Next identifier to assign: max existing id + 1, or 1 when empty.
    ///
    /// Pure function of the table. Ids freed by deleting the max-id record
    /// are reused by the next create; this mirrors the documented behavior
    /// of the max-based scheme. The roster file rejects `u64::MAX` ids on
    /// load, so the increment cannot overflow for any loadable table.
    pub fn next_id(&self) -> u64 {
        self.rows.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    pub fn get(&self, id: u64) -> Option<&Employee> {
        self.rows.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Employee> {
        self.rows.iter_mut().find(|e| e.id == id)
    }

    /// True if `email` is already held by a record other than `exclude`
    /// (case-insensitive comparison, stored casing untouched).
    pub fn email_in_use(&self, email: &str, exclude: Option<u64>) -> bool {
        self.rows
            .iter()
            .filter(|e| Some(e.id) != exclude)
            .any(|e| e.email.eq_ignore_ascii_case(email))
    }

    /// Append a record. The caller is responsible for id and email
    /// uniqueness; this is enforced at the service layer before insertion.
    pub fn push(&mut self, employee: Employee) {
        self.rows.push(employee);
    }

    /// Remove and return the record with the given id, preserving the order
    /// of the remaining rows.
    pub fn remove(&mut self, id: u64) -> Option<Employee> {
        let idx = self.rows.iter().position(|e| e.id == id)?;
        Some(self.rows.remove(idx))
    }

    pub fn rows(&self) -> &[Employee] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Employee> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: u64, email: &str) -> Employee {
        Employee {
            id,
            name: "Test Person".to_string(),
            email: email.to_string(),
            department: "Testing".to_string(),
        }
    }

    #[test]
    fn test_next_id_empty_table_is_one() {
        assert_eq!(Table::new().next_id(), 1);
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let table = Table::from_rows(vec![emp(3, "a@x.com"), emp(7, "b@x.com")]).unwrap();
        assert_eq!(table.next_id(), 8);
    }

    #[test]
    fn test_next_id_reuses_freed_max() {
        let mut table = Table::from_rows(vec![emp(1, "a@x.com"), emp(2, "b@x.com")]).unwrap();
        table.remove(2);
        assert_eq!(table.next_id(), 2);
    }

    #[test]
    fn test_from_rows_rejects_duplicate_id() {
        let err = Table::from_rows(vec![emp(1, "a@x.com"), emp(1, "b@x.com")]).unwrap_err();
        assert!(err.contains("duplicate id"));
    }

    #[test]
    fn test_from_rows_rejects_duplicate_email_case_insensitive() {
        let err = Table::from_rows(vec![emp(1, "ann@x.com"), emp(2, "ANN@X.COM")]).unwrap_err();
        assert!(err.contains("duplicate email"));
    }

    #[test]
    fn test_email_in_use_respects_exclusion() {
        let table = Table::from_rows(vec![emp(1, "ann@x.com")]).unwrap();
        assert!(table.email_in_use("Ann@X.com", None));
        assert!(!table.email_in_use("Ann@X.com", Some(1)));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut table =
            Table::from_rows(vec![emp(1, "a@x.com"), emp(2, "b@x.com"), emp(3, "c@x.com")])
                .unwrap();
        let removed = table.remove(2).unwrap();
        assert_eq!(removed.id, 2);
        let ids: Vec<u64> = table.rows().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
