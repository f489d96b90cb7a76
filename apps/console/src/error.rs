//! # API Error Type
//!
//! Unified error type for intent dispatch.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Dashboard                          │
//! │                                                                         │
//! │  Presentation                Rust Backend                               │
//! │  ────────────                ────────────                               │
//! │                                                                         │
//! │  {"intent":"navigate","page":"admin"}                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Missing record? ─── StoreError::NotFound ─────────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Role check? ──────── CoreError::Unauthorized ─── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──── {"ok":false,"error":{"code":"UNAUTHORIZED","message":"..."}}    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No error ends the session loop. The presentation layer shows `message`
//! as an error toast and stays interactive.

use inlin_core::{CoreError, ValidationError};
use inlin_store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// API error returned from every command.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Employee not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// switch (response.error.code) {
///   case 'VALIDATION_ERROR':
///     highlightForm(response.error.message);
///     break;
///   case 'UNAUTHENTICATED':
///     showLogin();
///     break;
///   default:
///     toast(response.error.message, 'error');
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input or intent payload rejected
    ValidationError,

    /// Referenced record does not exist
    NotFound,

    /// No signed-in session
    Unauthenticated,

    /// Role may not reach the page (or its collection)
    Unauthorized,

    /// Login email matched no account
    InvalidCredentials,

    /// Rule violation such as a second leave decision
    BusinessLogic,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a business-logic error.
    pub fn business(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BusinessLogic, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidCredentials => ErrorCode::InvalidCredentials,
            CoreError::Unauthenticated => ErrorCode::Unauthenticated,
            CoreError::Unauthorized { .. } => ErrorCode::Unauthorized,
            CoreError::InvalidLeaveTransition { .. } => ErrorCode::BusinessLogic,
            CoreError::Validation(e) => return ApiError::from_validation(e),
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::from_validation(&err)
    }
}

impl ApiError {
    fn from_validation(err: &ValidationError) -> Self {
        match err {
            ValidationError::Required { field }
                if field == "email" || field == "password" =>
            {
                ApiError::validation("Please enter both email and password")
            }
            other => ApiError::validation(other.to_string()),
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::new(ErrorCode::NotFound, err.to_string()),
            StoreError::UniqueViolation { field, value } => {
                ApiError::validation(format!("{field} '{value}' already exists"))
            }
            StoreError::Core(e) => ApiError::from(e),
        }
    }
}

/// Malformed intent lines.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::validation(format!("Malformed intent: {err}"))
    }
}
