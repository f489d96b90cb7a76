//! # Repository Module
//!
//! One [`Table`] per collection, plus entity-specific operations.
//!
//! ## Organization
//! ```text
//! repository/
//! ├── mod.rs        ◄─── Table<T> (list, get, delete, id issuance)
//! ├── employee.rs   ◄─── create from the "add employee" form
//! ├── inventory.rs  ◄─── create from the "add asset" form
//! ├── leave.rs      ◄─── submit, approve/reject
//! └── user.rs       ◄─── email lookup, unique-email create
//! ```

pub mod employee;
pub mod inventory;
pub mod leave;
pub mod user;

use inlin_core::validation::ValidationResult;
use inlin_core::{Collection, Employee, InventoryItem, LeaveRequest, RecordId, User};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::sequence::IdSequence;

/// A record kind stored in a [`Table`].
pub trait Record: Clone {
    const COLLECTION: Collection;

    fn id(&self) -> RecordId;
}

impl Record for User {
    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Employee {
    const COLLECTION: Collection = Collection::Employees;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for InventoryItem {
    const COLLECTION: Collection = Collection::Inventory;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for LeaveRequest {
    const COLLECTION: Collection = Collection::LeaveRequests;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// An ordered collection with its own id sequence.
///
/// ## Invariants
/// - Ids are unique within the table
/// - Insertion order is display order
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    ids: IdSequence,
}

pub type UserRepository = Table<User>;
pub type EmployeeRepository = Table<Employee>;
pub type InventoryRepository = Table<InventoryItem>;
pub type LeaveRequestRepository = Table<LeaveRequest>;

impl<T: Record> Table<T> {
    /// Builds a table from existing rows; new ids continue past the largest.
    pub fn from_rows(rows: Vec<T>) -> Self {
        let ids = IdSequence::after(rows.iter().map(Record::id));
        Table { rows, ids }
    }

    pub fn list(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Like [`Table::get`], with an explicit not-found error.
    pub fn require(&self, id: RecordId) -> StoreResult<&T> {
        self.get(id)
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, id))
    }

    pub(crate) fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.rows.iter_mut().find(|r| r.id() == id)
    }

    /// Removes the record with `id`.
    ///
    /// ## Returns
    /// - `Some(record)` if it was present
    /// - `None` if not; nothing changes, so repeating a delete is harmless
    ///
    /// Callers confirm intent before getting here; there is no undo.
    pub fn delete(&mut self, id: RecordId) -> Option<T> {
        let position = self.rows.iter().position(|r| r.id() == id)?;
        let removed = self.rows.remove(position);
        debug!(collection = ?T::COLLECTION, id, "Record deleted");
        Some(removed)
    }

    /// Validates and appends a record built around the next id.
    pub(crate) fn insert_with(
        &mut self,
        build: impl FnOnce(RecordId) -> ValidationResult<T>,
    ) -> StoreResult<T> {
        let record = self.ids.issue_with(build)?;
        self.rows.push(record.clone());
        debug!(collection = ?T::COLLECTION, id = record.id(), "Record created");
        Ok(record)
    }
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Table::from_rows(Vec::new())
    }
}
