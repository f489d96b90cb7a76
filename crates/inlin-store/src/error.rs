//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (inlin-core)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds missing-record and duplicate-key cases│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in console app) ← Serialized for the presentation layer     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inlin_core::{Collection, CoreError, RecordId, ValidationError};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// No record with this id in the collection.
    ///
    /// Lookups and status updates report this explicitly. Deletes do not:
    /// deleting a missing id is a no-op that returns `None`.
    #[error("{} not found: {id}", .collection.noun())]
    NotFound {
        collection: Collection,
        id: RecordId,
    },

    /// A unique key (the login email) is already taken.
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Domain rule violation bubbled up from inlin-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates a NotFound error for a collection and id.
    pub fn not_found(collection: Collection, id: RecordId) -> Self {
        StoreError::NotFound { collection, id }
    }

    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
