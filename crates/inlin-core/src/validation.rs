//! # Validation Module
//!
//! Form validation for the dashboard.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (browser form)                                  │
//! │  └── `required` attributes, date pickers                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Intent deserialization (console)                             │
//! │  └── Shape of the payload                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── Blank fields, lengths, email shape                                │
//! │  ├── Date parsing and ordering                                         │
//! │  └── Form payload → record conversion                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Conversions take the id as an argument so the store can issue it only
//! after validation succeeds.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::leave::leave_days;
use crate::money::Money;
use crate::types::{
    AccountStatus, AssetStatus, Employee, EmploymentStatus, InventoryItem, LeaveRequest,
    LeaveStatus, LoginForm, NewAsset, NewEmployee, NewLeaveRequest, NewUser, RecordId, User,
    UNASSIGNED,
};
use crate::MAX_TEXT_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Date format used by every date field (`2025-10-15`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Field Validators
// =============================================================================

/// Trims `value` and checks it is present and not oversized.
///
/// ## Returns
/// The trimmed value.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(value.to_string())
}

/// A person's display name: required, and must contain a letter.
///
/// Leave requests and the portal match people by this name, so a value
/// like `"--"` is refused up front.
pub fn validate_name(field: &str, value: &str) -> ValidationResult<String> {
    let name = validate_required(field, value)?;

    if !name.chars().any(char::is_alphabetic) || name.chars().any(char::is_control) {
        return Err(ValidationError::invalid_format(field, "expected a person's name"));
    }

    Ok(name)
}

/// Checks the login form: both fields must be non-blank.
///
/// The password is never compared to anything; it only has to be there.
///
/// ## Returns
/// The trimmed email, the lookup key for authentication.
pub fn validate_credentials(form: &LoginForm) -> ValidationResult<String> {
    let email = form.email.trim();
    let password = form.password.trim();

    if email.is_empty() || password.is_empty() {
        let field = if email.is_empty() { "email" } else { "password" };
        return Err(ValidationError::required(field));
    }

    Ok(email.to_string())
}

/// Validates an email address for a new account.
///
/// ## Rules
/// - Required
/// - Exactly one `@`, with text on both sides
/// - A `.` somewhere in the domain, no whitespace
///
/// ## Example
/// ```rust
/// use inlin_core::validation::validate_email;
///
/// assert!(validate_email("sarah@inlintech.net").is_ok());
/// assert!(validate_email("sarah").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = validate_required("email", email)?;

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::invalid_format(
            "email",
            "expected an address such as name@inlintech.net",
        ));
    }

    Ok(email)
}

/// Parses a `YYYY-MM-DD` date field.
pub fn parse_date(field: &str, value: &str) -> ValidationResult<NaiveDate> {
    let value = validate_required(field, value)?;

    NaiveDate::parse_from_str(&value, DATE_FORMAT)
        .map_err(|_| ValidationError::invalid_format(field, "expected YYYY-MM-DD"))
}

// =============================================================================
// Form Conversions
// =============================================================================

impl NewEmployee {
    /// Builds an `Active` employee record.
    pub fn into_employee(self, id: RecordId) -> ValidationResult<Employee> {
        Ok(Employee {
            id,
            name: validate_name("name", &self.name)?,
            position: validate_required("position", &self.position)?,
            department: validate_required("department", &self.department)?,
            join_date: parse_date("joinDate", &self.join_date)?,
            status: EmploymentStatus::Active,
        })
    }
}

impl NewAsset {
    /// Builds an `Available`, unassigned inventory item.
    pub fn into_item(self, id: RecordId) -> ValidationResult<InventoryItem> {
        Ok(InventoryItem {
            id,
            name: validate_required("name", &self.name)?,
            category: validate_required("category", &self.category)?,
            assigned_to: UNASSIGNED.to_string(),
            status: AssetStatus::Available,
            purchase_date: parse_date("purchaseDate", &self.purchase_date)?,
            value: Money::parse(&self.value)?,
        })
    }
}

impl NewLeaveRequest {
    /// Builds a `Pending` request for `employee` with its day count.
    pub fn into_request(self, id: RecordId, employee: &str) -> ValidationResult<LeaveRequest> {
        let leave_type = validate_required("type", &self.leave_type)?;
        let start_date = parse_date("startDate", &self.start_date)?;
        let end_date = parse_date("endDate", &self.end_date)?;
        let days = leave_days(start_date, end_date)?;

        Ok(LeaveRequest {
            id,
            employee: validate_name("employee", employee)?,
            leave_type,
            start_date,
            end_date,
            status: LeaveStatus::Pending,
            days,
        })
    }
}

impl NewUser {
    /// Builds an `active` user account. Email uniqueness is the store's job.
    pub fn into_user(self, id: RecordId) -> ValidationResult<User> {
        Ok(User {
            id,
            name: validate_name("name", &self.name)?,
            email: validate_email(&self.email)?,
            role: self.role,
            department: validate_required("department", &self.department)?,
            status: AccountStatus::Active,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validate_credentials() {
        assert_eq!(
            validate_credentials(&login("  sarah@inlintech.net ", "x")).unwrap(),
            "sarah@inlintech.net"
        );
        assert_eq!(
            validate_credentials(&login("", "demo123")),
            Err(ValidationError::required("email"))
        );
        assert_eq!(
            validate_credentials(&login("sarah@inlintech.net", "   ")),
            Err(ValidationError::required("password"))
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("admin@inlintech.net").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("admin").is_err());
        assert!(validate_email("@inlintech.net").is_err());
        assert!(validate_email("admin@localhost").is_err());
        assert!(validate_email("a@b@c.net").is_err());
        assert!(validate_email("john doe@inlintech.net").is_err());
    }

    #[test]
    fn test_validate_required_length() {
        assert!(validate_required("name", &"A".repeat(MAX_TEXT_LEN)).is_ok());
        assert!(matches!(
            validate_required("name", &"A".repeat(MAX_TEXT_LEN + 1)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("name", "  Test User ").unwrap(), "Test User");
        assert_eq!(validate_name("name", ""), Err(ValidationError::required("name")));
        assert!(matches!(
            validate_name("name", "1234"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_name("name", "Ana\tLópez").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("joinDate", "2023-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()
        );
        assert!(parse_date("joinDate", "15/03/2023").is_err());
        assert!(parse_date("joinDate", "2023-02-30").is_err());
        assert_eq!(
            parse_date("joinDate", ""),
            Err(ValidationError::required("joinDate"))
        );
    }

    #[test]
    fn test_new_employee_defaults_to_active() {
        let employee = NewEmployee {
            name: "Test User".to_string(),
            position: "Analyst".to_string(),
            department: "Finance".to_string(),
            join_date: "2025-01-06".to_string(),
        }
        .into_employee(5)
        .unwrap();

        assert_eq!(employee.id, 5);
        assert_eq!(employee.status, EmploymentStatus::Active);
    }

    #[test]
    fn test_new_asset_defaults() {
        let item = NewAsset {
            name: "Monitor".to_string(),
            category: "Electronics".to_string(),
            purchase_date: "2025-02-01".to_string(),
            value: "$240".to_string(),
        }
        .into_item(9)
        .unwrap();

        assert_eq!(item.status, AssetStatus::Available);
        assert_eq!(item.assigned_to, UNASSIGNED);
        assert_eq!(item.value, Money::from_whole(240));
    }

    #[test]
    fn test_new_leave_request_computes_days() {
        let request = NewLeaveRequest {
            leave_type: "Vacation".to_string(),
            start_date: "2025-10-15".to_string(),
            end_date: "2025-10-20".to_string(),
        }
        .into_request(4, "Alice Employee")
        .unwrap();

        assert_eq!(request.days, 6);
        assert_eq!(request.status, LeaveStatus::Pending);
        assert_eq!(request.employee, "Alice Employee");
    }

    #[test]
    fn test_new_leave_request_rejects_reversed_dates() {
        let result = NewLeaveRequest {
            leave_type: "Personal".to_string(),
            start_date: "2025-11-02".to_string(),
            end_date: "2025-11-01".to_string(),
        }
        .into_request(4, "Alice Employee");

        assert!(matches!(result, Err(ValidationError::DateOrder { .. })));
    }
}
