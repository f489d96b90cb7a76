//! # Employee Commands
//!
//! Create, delete, and edit-lookup for the HR employee table.
//! All three need access to the HR page.

use inlin_core::{Collection, Employee, NewEmployee, RecordId};
use tracing::debug;

use super::authorized;
use crate::error::ApiError;
use crate::state::StoreState;

/// Adds an employee from the "add employee" form.
///
/// ## Returns
/// The new record: next id, status `Active`.
pub fn create_employee(state: &StoreState, form: NewEmployee) -> Result<Employee, ApiError> {
    debug!(name = %form.name, department = %form.department, "create_employee command");

    authorized(state, Collection::Employees, |store, _| {
        Ok(store.employees_mut().create(form)?)
    })
}

/// Removes an employee. `Ok(None)` if the id was not there.
pub fn delete_employee(state: &StoreState, id: RecordId) -> Result<Option<Employee>, ApiError> {
    debug!(id, "delete_employee command");

    authorized(state, Collection::Employees, |store, _| {
        Ok(store.employees_mut().delete(id))
    })
}

/// The record behind an "edit" button.
pub fn get_employee(state: &StoreState, id: RecordId) -> Result<Employee, ApiError> {
    debug!(id, "get_employee command");

    authorized(state, Collection::Employees, |store, _| {
        Ok(store.employees().require(id)?.clone())
    })
}
