//! # Error Types
//!
//! Domain-specific error types for inlin-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inlin-core errors (this file)                                         │
//! │  ├── CoreError        - Session, access and lifecycle errors           │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  inlin-store errors (separate crate)                                   │
//! │  └── StoreError       - Missing records, duplicate keys                │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → UI toast  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No variant here is fatal. Every error leaves the dashboard interactive
//! and the store unchanged.

use thiserror::Error;

use crate::types::{LeaveStatus, Page, RecordId, Role};

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// No user account matches the submitted email.
    ///
    /// Distinct from [`ValidationError::Required`]: the form was filled in,
    /// it just didn't match anybody.
    #[error("Invalid credentials. Please try demo users.")]
    InvalidCredentials,

    /// The operation needs a signed-in session.
    #[error("You must be signed in")]
    Unauthenticated,

    /// The role may not reach the requested page.
    ///
    /// ## When This Occurs
    /// - Navigation to a page outside the role's visible set
    /// - Mutating a collection owned by such a page
    ///
    /// The current page is never changed as a side effect.
    #[error("Role {role} may not access the {page} page")]
    Unauthorized { role: Role, page: Page },

    /// A leave request may only leave `Pending` once.
    ///
    /// ## Lifecycle
    /// ```text
    ///            ┌──► Approved (terminal)
    /// Pending ───┤
    ///            └──► Rejected (terminal)
    /// ```
    #[error("Leave request {id} is {from}, cannot move to {to}")]
    InvalidLeaveTransition {
        id: RecordId,
        from: LeaveStatus,
        to: LeaveStatus,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state is touched; a failing form submission changes
/// nothing.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed date, unparseable amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., an email already used as a login key).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A date range ends before it starts.
    #[error("{end_field} must not be before {start_field}")]
    DateOrder {
        start_field: String,
        end_field: String,
    },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::Required`].
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Shorthand for [`ValidationError::InvalidFormat`].
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
