//! # Domain Types
//!
//! Core record and session types used throughout the admin dashboard.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │    Employee     │   │  InventoryItem  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  email (login)  │   │  position       │   │  assigned_to    │       │
//! │  │  role           │   │  join_date      │   │  status         │       │
//! │  │  status         │   │  status         │   │  value (Money)  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  LeaveRequest   │   │      Role       │   │      Page       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  employee       │   │  admin          │   │  dashboard      │       │
//! │  │  start / end    │   │  hr_manager     │   │  hr             │       │
//! │  │  days (≥ 1)     │   │  inventory_mgr  │   │  inventory      │       │
//! │  │  status         │   │  employee       │   │  portal, admin  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The four record kinds are deliberately flat. Employees, assets and leave
//! requests refer to people by free-text name, not by id; there is no
//! referential integrity between collections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

/// Record identifier, unique within its collection.
pub type RecordId = u32;

/// Placeholder `assigned_to` value for assets nobody holds.
pub const UNASSIGNED: &str = "Unassigned";

// =============================================================================
// Role
// =============================================================================

/// Permission class of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    HrManager,
    InventoryManager,
    Employee,
}

impl Role {
    /// Every defined role.
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::HrManager,
        Role::InventoryManager,
        Role::Employee,
    ];

    /// Wire name (`"hr_manager"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::HrManager => "hr_manager",
            Role::InventoryManager => "inventory_manager",
            Role::Employee => "employee",
        }
    }

    /// Human-readable form shown in the admin table (`"HR MANAGER"`).
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s.trim())
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: Role::ALL.iter().map(|r| r.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Page
// =============================================================================

/// A named page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Dashboard,
    Hr,
    Inventory,
    Portal,
    Admin,
}

impl Page {
    /// Every page, in navigation-bar order.
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Hr,
        Page::Inventory,
        Page::Portal,
        Page::Admin,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Hr => "hr",
            Page::Inventory => "inventory",
            Page::Portal => "portal",
            Page::Admin => "admin",
        }
    }
}

/// Where a signed-out session rests.
impl Default for Page {
    fn default() -> Self {
        Page::Dashboard
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == s.trim())
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "page".to_string(),
                allowed: Page::ALL.iter().map(|p| p.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Statuses
// =============================================================================

/// Whether a user account may sign in (informational only).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
        })
    }
}

/// Employment status of an HR record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EmploymentStatus {
    #[default]
    Active,
    Inactive,
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EmploymentStatus::Active => "Active",
            EmploymentStatus::Inactive => "Inactive",
        })
    }
}

/// Lifecycle state of an inventory asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AssetStatus {
    #[serde(rename = "In Use")]
    InUse,
    #[default]
    Available,
    Maintenance,
    Retired,
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssetStatus::InUse => "In Use",
            AssetStatus::Available => "Available",
            AssetStatus::Maintenance => "Maintenance",
            AssetStatus::Retired => "Retired",
        })
    }
}

/// Decision state of a leave request. See [`crate::leave`] for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        })
    }
}

// =============================================================================
// Records
// =============================================================================

/// A login-capable user account. `email` is the login key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub status: AccountStatus,
}

/// An HR employee record. Independent of [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    pub position: String,
    pub department: String,
    #[ts(as = "String")]
    pub join_date: NaiveDate,
    pub status: EmploymentStatus,
}

/// A tracked company asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    /// Free-text holder name or [`UNASSIGNED`].
    pub assigned_to: String,
    pub status: AssetStatus,
    #[ts(as = "String")]
    pub purchase_date: NaiveDate,
    pub value: Money,
}

impl InventoryItem {
    pub fn is_in_use(&self) -> bool {
        self.status == AssetStatus::InUse
    }
}

/// A request for time off.
///
/// `days` is computed once at creation (inclusive count) and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: RecordId,
    /// Free-text employee name.
    pub employee: String,
    #[serde(rename = "type")]
    pub leave_type: String,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    pub days: i64,
}

// =============================================================================
// Form Payloads
// =============================================================================
// What the create forms submit. Text stays text until validation parses it.

/// Login form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// "Add employee" form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub department: String,
    pub join_date: String,
}

/// "Add asset" form. New assets start `Available` and [`UNASSIGNED`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    pub category: String,
    pub purchase_date: String,
    /// Currency text such as `"$1,200"`.
    pub value: String,
}

/// Leave request form. The employee is always the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveRequest {
    #[serde(rename = "type")]
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
}

/// "Add user" form on the admin page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
}

// =============================================================================
// Collections
// =============================================================================

/// The four record collections, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    Users,
    Employees,
    Inventory,
    LeaveRequests,
}

impl Collection {
    /// The page whose table shows this collection (and gates its mutation).
    pub const fn owning_page(&self) -> Page {
        match self {
            Collection::Users => Page::Admin,
            Collection::Employees | Collection::LeaveRequests => Page::Hr,
            Collection::Inventory => Page::Inventory,
        }
    }

    /// Singular noun used in notifications.
    pub const fn noun(&self) -> &'static str {
        match self {
            Collection::Users => "User",
            Collection::Employees => "Employee",
            Collection::Inventory => "Asset",
            Collection::LeaveRequests => "Leave request",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_label_normalizes_underscores() {
        assert_eq!(Role::HrManager.label(), "HR MANAGER");
        assert_eq!(Role::InventoryManager.label(), "INVENTORY MANAGER");
        assert_eq!(Role::Admin.label(), "ADMIN");
    }

    #[test]
    fn test_role_and_page_parse() {
        assert_eq!("hr_manager".parse::<Role>().unwrap(), Role::HrManager);
        assert!("superuser".parse::<Role>().is_err());
        assert_eq!("portal".parse::<Page>().unwrap(), Page::Portal);
        assert!("settings".parse::<Page>().is_err());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Role::InventoryManager).unwrap(),
            "\"inventory_manager\""
        );
        assert_eq!(serde_json::to_string(&AssetStatus::InUse).unwrap(), "\"In Use\"");
        assert_eq!(serde_json::to_string(&AccountStatus::Active).unwrap(), "\"active\"");
        assert_eq!(serde_json::to_string(&Page::Hr).unwrap(), "\"hr\"");
    }

    #[test]
    fn test_leave_request_serializes_type_field() {
        let request = LeaveRequest {
            id: 1,
            employee: "Alice Johnson".to_string(),
            leave_type: "Vacation".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
            status: LeaveStatus::Pending,
            days: 6,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "Vacation");
        assert_eq!(json["startDate"], "2025-10-15");
        assert_eq!(json["status"], "Pending");
    }

    #[test]
    fn test_collection_owning_page() {
        assert_eq!(Collection::Employees.owning_page(), Page::Hr);
        assert_eq!(Collection::LeaveRequests.owning_page(), Page::Hr);
        assert_eq!(Collection::Inventory.owning_page(), Page::Inventory);
        assert_eq!(Collection::Users.owning_page(), Page::Admin);
    }
}
