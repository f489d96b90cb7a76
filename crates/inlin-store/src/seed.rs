//! # Seed Dataset
//!
//! The fixed sample data every dashboard session starts from.
//!
//! ## Contents
//! - 4 user accounts, one per role (these are the demo logins)
//! - 4 employees
//! - 4 assets, three in use
//! - 3 leave requests, two pending
//!
//! Leave day counts are computed from the date ranges like any other
//! request, so request #1 (Oct 15 – Oct 20) covers 6 days.

use chrono::NaiveDate;
use inlin_core::leave::leave_days;
use inlin_core::{
    AccountStatus, AssetStatus, Employee, EmploymentStatus, InventoryItem, LeaveRequest,
    LeaveStatus, Money, Role, User,
};
use serde::{Deserialize, Serialize};

/// All four collections, as plain vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub users: Vec<User>,
    pub employees: Vec<Employee>,
    pub inventory: Vec<InventoryItem>,
    pub leave_requests: Vec<LeaveRequest>,
}

/// (name, email, role, department)
const USERS: &[(&str, &str, Role, &str)] = &[
    ("John Admin", "admin@inlintech.net", Role::Admin, "IT"),
    ("Sarah HR", "sarah@inlintech.net", Role::HrManager, "Human Resources"),
    ("Mike Inventory", "mike@inlintech.net", Role::InventoryManager, "Operations"),
    ("Alice Employee", "alice@inlintech.net", Role::Employee, "Marketing"),
];

/// (name, position, department, join date)
const EMPLOYEES: &[(&str, &str, &str, (i32, u32, u32))] = &[
    ("Alice Johnson", "Marketing Specialist", "Marketing", (2023, 3, 15)),
    ("Bob Smith", "Software Developer", "IT", (2022, 11, 20)),
    ("Carol Wilson", "HR Assistant", "Human Resources", (2024, 1, 10)),
    ("David Brown", "Operations Manager", "Operations", (2021, 8, 5)),
];

/// (name, category, assigned to, status, purchase date, value in whole dollars)
const INVENTORY: &[(&str, &str, &str, AssetStatus, (i32, u32, u32), i64)] = &[
    ("Dell Laptop XPS 13", "Computers", "Alice Johnson", AssetStatus::InUse, (2024, 2, 15), 1200),
    ("iPhone 14 Pro", "Mobile Devices", "Bob Smith", AssetStatus::InUse, (2024, 3, 10), 999),
    ("Office Chair", "Furniture", "Carol Wilson", AssetStatus::InUse, (2024, 1, 20), 350),
    ("Projector", "Electronics", inlin_core::UNASSIGNED, AssetStatus::Available, (2023, 12, 5), 800),
];

/// (employee, type, start, end, status)
const LEAVE_REQUESTS: &[(&str, &str, (i32, u32, u32), (i32, u32, u32), LeaveStatus)] = &[
    ("Alice Johnson", "Vacation", (2025, 10, 15), (2025, 10, 20), LeaveStatus::Pending),
    ("Bob Smith", "Sick Leave", (2025, 9, 10), (2025, 9, 12), LeaveStatus::Approved),
    ("Carol Wilson", "Personal", (2025, 11, 1), (2025, 11, 1), LeaveStatus::Pending),
];

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid calendar dates")
}

fn next_id(index: usize) -> inlin_core::RecordId {
    index as inlin_core::RecordId + 1
}

pub fn users() -> Vec<User> {
    USERS
        .iter()
        .enumerate()
        .map(|(i, (name, email, role, department))| User {
            id: next_id(i),
            name: name.to_string(),
            email: email.to_string(),
            role: *role,
            department: department.to_string(),
            status: AccountStatus::Active,
        })
        .collect()
}

pub fn employees() -> Vec<Employee> {
    EMPLOYEES
        .iter()
        .enumerate()
        .map(|(i, (name, position, department, joined))| Employee {
            id: next_id(i),
            name: name.to_string(),
            position: position.to_string(),
            department: department.to_string(),
            join_date: date(*joined),
            status: EmploymentStatus::Active,
        })
        .collect()
}

pub fn inventory() -> Vec<InventoryItem> {
    INVENTORY
        .iter()
        .enumerate()
        .map(
            |(i, (name, category, assigned_to, status, purchased, value))| InventoryItem {
                id: next_id(i),
                name: name.to_string(),
                category: category.to_string(),
                assigned_to: assigned_to.to_string(),
                status: *status,
                purchase_date: date(*purchased),
                value: Money::from_whole(*value),
            },
        )
        .collect()
}

pub fn leave_requests() -> Vec<LeaveRequest> {
    LEAVE_REQUESTS
        .iter()
        .enumerate()
        .map(|(i, (employee, leave_type, start, end, status))| {
            let (start_date, end_date) = (date(*start), date(*end));
            LeaveRequest {
                id: next_id(i),
                employee: employee.to_string(),
                leave_type: leave_type.to_string(),
                start_date,
                end_date,
                status: *status,
                days: leave_days(start_date, end_date).unwrap_or(1),
            }
        })
        .collect()
}

/// The complete seed dataset.
pub fn dataset() -> Dataset {
    Dataset {
        users: users(),
        employees: employees(),
        inventory: inventory(),
        leave_requests: leave_requests(),
    }
}
