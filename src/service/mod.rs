//! Mutation API for the employee roster.
//!
//! `EmployeeService` validates input, enforces cross-record invariants, and
//! orchestrates the record store. Every mutating operation is one logical
//! unit: load the whole table, mutate it, persist the whole table.
//!
//! # Concurrency
//!
//! All mutating operations serialize on one async mutex held across the
//! entire read-mutate-write cycle. Without it, two concurrent writers would
//! both read the same snapshot and the second save would silently overwrite
//! the first (last-writer-wins). Lock acquisition is bounded; a writer that
//! cannot get the lock in time fails with `Busy` rather than queueing
//! indefinitely. Read-only operations go straight to the store and may
//! observe state that is about to change.

mod errors;
mod validate;

pub use errors::{ServiceError, ServiceResult};

use std::time::Duration;

use serde::Deserialize;
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::timeout;

use crate::store::{Employee, RosterStore};

/// Input for `create`; all fields are required but arrive optional so that
/// a missing field surfaces as a validation error, not a deserialization
/// failure at the transport layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewEmployee {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

/// Input for `update`; omitted fields keep their prior values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.department.is_none()
    }
}

/// The mutation API over the roster store
pub struct EmployeeService {
    store: RosterStore,
    write_lock: Mutex<()>,
    lock_wait: Duration,
}

impl EmployeeService {
    pub fn new(store: RosterStore, lock_wait: Duration) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
            lock_wait,
        }
    }

    /// All records, store order
    pub fn list(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.store.load_all()?.into_rows())
    }

    /// Single record by id
    pub fn get(&self, id: u64) -> ServiceResult<Employee> {
        let table = self.store.load_all()?;
        table
            .get(id)
            .cloned()
            .ok_or(ServiceError::NotFound(id))
    }

    /// Create a record. Assigns the next id, appends, persists.
    pub async fn create(&self, input: NewEmployee) -> ServiceResult<Employee> {
        let name = validate::required("name", input.name)?;
        let email = validate::required("email", input.email)?;
        let department = validate::required("department", input.department)?;
        validate::name(&name)?;
        validate::email(&email)?;
        validate::department(&department)?;

        let _guard = self.acquire_write().await?;
        let mut table = self.store.load_all()?;
        if table.email_in_use(&email, None) {
            return Err(ServiceError::Conflict(email));
        }

        let employee = Employee {
            id: table.next_id(),
            name,
            email,
            department,
        };
        table.push(employee.clone());
        self.store.save_all(&table)?;
        tracing::info!(id = employee.id, "employee created");
        Ok(employee)
    }

    /// Update a record in place. Supplied fields are validated; omitted
    /// fields are untouched. An empty update still re-persists the table
    /// without changing any record contents.
    pub async fn update(&self, id: u64, input: EmployeeUpdate) -> ServiceResult<Employee> {
        if let Some(name) = &input.name {
            validate::name(name)?;
        }
        if let Some(email) = &input.email {
            validate::email(email)?;
        }
        if let Some(department) = &input.department {
            validate::department(department)?;
        }

        let _guard = self.acquire_write().await?;
        let mut table = self.store.load_all()?;
        if table.get(id).is_none() {
            return Err(ServiceError::NotFound(id));
        }

        if let Some(email) = &input.email {
            // collision against any OTHER record; re-submitting your own
            // email (any casing) is fine
            if table.email_in_use(email, Some(id)) {
                return Err(ServiceError::Conflict(email.clone()));
            }
        }

        let employee = {
            let record = table.get_mut(id).ok_or(ServiceError::NotFound(id))?;
            if let Some(name) = input.name {
                record.name = name;
            }
            if let Some(email) = input.email {
                record.email = email;
            }
            if let Some(department) = input.department {
                record.department = department;
            }
            record.clone()
        };

        self.store.save_all(&table)?;
        tracing::info!(id, "employee updated");
        Ok(employee)
    }

    /// Remove a record, returning it for confirmation display
    pub async fn delete(&self, id: u64) -> ServiceResult<Employee> {
        let _guard = self.acquire_write().await?;
        let mut table = self.store.load_all()?;
        let removed = table.remove(id).ok_or(ServiceError::NotFound(id))?;
        self.store.save_all(&table)?;
        tracing::info!(id, "employee deleted");
        Ok(removed)
    }

    async fn acquire_write(&self) -> ServiceResult<MutexGuard<'_, ()>> {
        timeout(self.lock_wait, self.write_lock.lock())
            .await
            .map_err(|_| ServiceError::Busy)
    }

    #[cfg(test)]
    fn snapshot(&self) -> crate::store::Table {
        self.store.load_all().expect("snapshot")
    }
}
