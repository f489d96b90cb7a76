//! # View Renderer
//!
//! Pure derivation of display rows from the collections and the active page.
//!
//! ## Derivation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Store ──snapshot()──► Snapshot<'_> ──derive(page)──► PageView         │
//! │                          │                                              │
//! │                          ├── employee_rows()   (after employee CRUD)   │
//! │                          ├── leave_rows()      (after leave decisions) │
//! │                          ├── asset_rows()      (after asset CRUD)      │
//! │                          └── user_rows()       (after account CRUD)    │
//! │                                                                         │
//! │  No state lives here. Every call re-derives from scratch.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The dashboard chart is decorative and static; only its summary cards
//! are computed from live data.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{
    AccountStatus, AssetStatus, Employee, InventoryItem, LeaveRequest, LeaveStatus, Page,
    RecordId, Role, User,
};

// =============================================================================
// Inputs
// =============================================================================

/// Read-only borrow of the four collections.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub users: &'a [User],
    pub employees: &'a [Employee],
    pub inventory: &'a [InventoryItem],
    pub leave_requests: &'a [LeaveRequest],
}

/// Who is looking, and how to format.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub viewer: &'a User,
    pub currency_symbol: &'a str,
    pub company_name: &'a str,
}

// =============================================================================
// Row Decorations
// =============================================================================

/// Colour class of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Info,
}

/// Buttons in a row's action cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    Edit,
    Delete,
    Approve,
    Reject,
    View,
}

/// In-use vs available badge on asset rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AssetIndicator {
    InUse,
    Available,
}

impl LeaveStatus {
    /// UI category: Approved → success, Pending → warning, Rejected → error.
    pub const fn tone(&self) -> StatusTone {
        match self {
            LeaveStatus::Approved => StatusTone::Success,
            LeaveStatus::Pending => StatusTone::Warning,
            LeaveStatus::Rejected => StatusTone::Error,
        }
    }
}

// =============================================================================
// Rows
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRow {
    #[serde(flatten)]
    pub employee: Employee,
    pub tone: StatusTone,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRow {
    #[serde(flatten)]
    pub request: LeaveRequest,
    pub tone: StatusTone,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AssetRow {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub assigned_to: String,
    pub status: AssetStatus,
    pub indicator: AssetIndicator,
    pub tone: StatusTone,
    pub purchase_date: String,
    /// Formatted, e.g. `"$1,200"`.
    pub value: String,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// `"HR MANAGER"` for `hr_manager`.
    pub role_label: String,
    /// Role badges are always informational.
    pub role_tone: StatusTone,
    pub department: String,
    pub status: AccountStatus,
    pub actions: Vec<RowAction>,
}

pub fn employee_rows(employees: &[Employee]) -> Vec<EmployeeRow> {
    employees
        .iter()
        .map(|employee| EmployeeRow {
            employee: employee.clone(),
            tone: StatusTone::Success,
            actions: vec![RowAction::Edit, RowAction::Delete],
        })
        .collect()
}

/// HR review rows: Pending requests get approve/reject, decided ones view.
pub fn leave_rows(requests: &[LeaveRequest]) -> Vec<LeaveRow> {
    requests
        .iter()
        .map(|request| {
            let actions = if request.status.is_terminal() {
                vec![RowAction::View]
            } else {
                vec![RowAction::Approve, RowAction::Reject]
            };
            LeaveRow {
                request: request.clone(),
                tone: request.status.tone(),
                actions,
            }
        })
        .collect()
}

pub fn asset_rows(items: &[InventoryItem], currency_symbol: &str) -> Vec<AssetRow> {
    items
        .iter()
        .map(|item| {
            let (indicator, tone) = if item.is_in_use() {
                (AssetIndicator::InUse, StatusTone::Warning)
            } else {
                (AssetIndicator::Available, StatusTone::Success)
            };
            AssetRow {
                id: item.id,
                name: item.name.clone(),
                category: item.category.clone(),
                assigned_to: item.assigned_to.clone(),
                status: item.status,
                indicator,
                tone,
                purchase_date: item.purchase_date.to_string(),
                value: item.value.display(currency_symbol),
                actions: vec![RowAction::Edit, RowAction::Delete],
            }
        })
        .collect()
}

pub fn user_rows(users: &[User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|user| UserRow {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            role_label: user.role.label(),
            role_tone: StatusTone::Info,
            department: user.department.clone(),
            status: user.status,
            actions: vec![RowAction::Edit, RowAction::Delete],
        })
        .collect()
}

// =============================================================================
// Page Views
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartSlice {
    pub label: String,
    pub value: u32,
}

/// Department headcount shown in the dashboard doughnut. Decorative.
pub const DEPARTMENT_CHART: [(&str, u32); 5] = [
    ("IT", 45),
    ("Marketing", 30),
    ("HR", 25),
    ("Operations", 35),
    ("Others", 21),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub employees: usize,
    pub users: usize,
    pub assets_in_use: usize,
    pub assets_available: usize,
    pub pending_leave_requests: usize,
    pub total_asset_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub department_chart: Vec<ChartSlice>,
    pub summary: DashboardSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HrView {
    pub employees: Vec<EmployeeRow>,
    pub leave_requests: Vec<LeaveRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryView {
    pub assets: Vec<AssetRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdminView {
    pub users: Vec<UserRow>,
}

/// Informational landing page for employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PortalView {
    pub company_name: String,
    pub name: String,
    pub role_label: String,
    pub department: String,
    /// The viewer's own requests, matched by name.
    pub my_leave_requests: Vec<LeaveRow>,
}

/// Everything a page needs to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum PageView {
    Dashboard(DashboardView),
    Hr(HrView),
    Inventory(InventoryView),
    Portal(PortalView),
    Admin(AdminView),
}

impl PageView {
    pub fn page(&self) -> Page {
        match self {
            PageView::Dashboard(_) => Page::Dashboard,
            PageView::Hr(_) => Page::Hr,
            PageView::Inventory(_) => Page::Inventory,
            PageView::Portal(_) => Page::Portal,
            PageView::Admin(_) => Page::Admin,
        }
    }

    /// The table search box: keeps rows whose visible text contains
    /// `query`, ignoring case. A blank query keeps everything.
    ///
    /// Dashboard and portal have no searchable table and pass through.
    pub fn filter(self, query: &str) -> PageView {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self;
        }

        match self {
            PageView::Hr(mut view) => {
                view.employees.retain(|row| {
                    let e = &row.employee;
                    let status = e.status.to_string();
                    contains_any(
                        &[
                            e.name.as_str(),
                            e.position.as_str(),
                            e.department.as_str(),
                            status.as_str(),
                        ],
                        &needle,
                    )
                });
                view.leave_requests.retain(|row| {
                    let r = &row.request;
                    let status = r.status.to_string();
                    contains_any(
                        &[r.employee.as_str(), r.leave_type.as_str(), status.as_str()],
                        &needle,
                    )
                });
                PageView::Hr(view)
            }
            PageView::Inventory(mut view) => {
                view.assets.retain(|a| {
                    let status = a.status.to_string();
                    contains_any(
                        &[
                            a.name.as_str(),
                            a.category.as_str(),
                            a.assigned_to.as_str(),
                            status.as_str(),
                            a.value.as_str(),
                        ],
                        &needle,
                    )
                });
                PageView::Inventory(view)
            }
            PageView::Admin(mut view) => {
                view.users.retain(|u| {
                    contains_any(
                        &[
                            u.name.as_str(),
                            u.email.as_str(),
                            u.role_label.as_str(),
                            u.department.as_str(),
                        ],
                        &needle,
                    )
                });
                PageView::Admin(view)
            }
            other @ (PageView::Dashboard(_) | PageView::Portal(_)) => other,
        }
    }
}

/// `needle` is already lower-cased.
fn contains_any(fields: &[&str], needle: &str) -> bool {
    fields.iter().any(|f| f.to_lowercase().contains(needle))
}

/// Derives the full view for `page`.
///
/// Authorization is not checked here; the session only ever holds pages
/// the access table allowed.
pub fn derive(page: Page, data: Snapshot<'_>, ctx: ViewContext<'_>) -> PageView {
    match page {
        Page::Dashboard => PageView::Dashboard(dashboard(data, ctx.currency_symbol)),
        Page::Hr => PageView::Hr(HrView {
            employees: employee_rows(data.employees),
            leave_requests: leave_rows(data.leave_requests),
        }),
        Page::Inventory => PageView::Inventory(InventoryView {
            assets: asset_rows(data.inventory, ctx.currency_symbol),
        }),
        Page::Portal => PageView::Portal(portal(data, ctx)),
        Page::Admin => PageView::Admin(AdminView {
            users: user_rows(data.users),
        }),
    }
}

fn dashboard(data: Snapshot<'_>, currency_symbol: &str) -> DashboardView {
    let assets_in_use = data.inventory.iter().filter(|i| i.is_in_use()).count();
    let total_asset_value: Money = data.inventory.iter().map(|i| i.value).sum();

    DashboardView {
        department_chart: DEPARTMENT_CHART
            .iter()
            .map(|(label, value)| ChartSlice {
                label: label.to_string(),
                value: *value,
            })
            .collect(),
        summary: DashboardSummary {
            employees: data.employees.len(),
            users: data.users.len(),
            assets_in_use,
            assets_available: data
                .inventory
                .iter()
                .filter(|i| i.status == AssetStatus::Available)
                .count(),
            pending_leave_requests: data
                .leave_requests
                .iter()
                .filter(|r| r.status == LeaveStatus::Pending)
                .count(),
            total_asset_value: total_asset_value.display(currency_symbol),
        },
    }
}

fn portal(data: Snapshot<'_>, ctx: ViewContext<'_>) -> PortalView {
    let mine: Vec<LeaveRequest> = data
        .leave_requests
        .iter()
        .filter(|r| r.employee == ctx.viewer.name)
        .cloned()
        .collect();

    let my_leave_requests = leave_rows(&mine)
        .into_iter()
        .map(|row| LeaveRow {
            actions: vec![RowAction::View],
            ..row
        })
        .collect();

    PortalView {
        company_name: ctx.company_name.to_string(),
        name: ctx.viewer.name.clone(),
        role_label: ctx.viewer.role.label(),
        department: ctx.viewer.department.clone(),
        my_leave_requests,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmploymentStatus;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn user(name: &str, role: Role) -> User {
        User {
            id: 1,
            name: name.to_string(),
            email: "x@inlintech.net".to_string(),
            role,
            department: "Marketing".to_string(),
            status: AccountStatus::Active,
        }
    }

    fn request(id: RecordId, employee: &str, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id,
            employee: employee.to_string(),
            leave_type: "Vacation".to_string(),
            start_date: date("2025-10-15"),
            end_date: date("2025-10-20"),
            status,
            days: 6,
        }
    }

    fn item(id: RecordId, status: AssetStatus, whole: i64) -> InventoryItem {
        InventoryItem {
            id,
            name: format!("Asset {id}"),
            category: "Electronics".to_string(),
            assigned_to: "Unassigned".to_string(),
            status,
            purchase_date: date("2024-01-20"),
            value: Money::from_whole(whole),
        }
    }

    #[test]
    fn test_leave_rows_actions_follow_status() {
        let rows = leave_rows(&[
            request(1, "Alice", LeaveStatus::Pending),
            request(2, "Bob", LeaveStatus::Approved),
            request(3, "Carol", LeaveStatus::Rejected),
        ]);

        assert_eq!(rows[0].tone, StatusTone::Warning);
        assert_eq!(rows[0].actions, vec![RowAction::Approve, RowAction::Reject]);
        assert_eq!(rows[1].tone, StatusTone::Success);
        assert_eq!(rows[1].actions, vec![RowAction::View]);
        assert_eq!(rows[2].tone, StatusTone::Error);
        assert_eq!(rows[2].actions, vec![RowAction::View]);
    }

    #[test]
    fn test_asset_rows_indicator_and_value() {
        let rows = asset_rows(
            &[
                item(1, AssetStatus::InUse, 1200),
                item(2, AssetStatus::Available, 800),
                item(3, AssetStatus::Maintenance, 50),
            ],
            "$",
        );

        assert_eq!(rows[0].indicator, AssetIndicator::InUse);
        assert_eq!(rows[0].tone, StatusTone::Warning);
        assert_eq!(rows[0].value, "$1,200");
        assert_eq!(rows[1].indicator, AssetIndicator::Available);
        assert_eq!(rows[2].indicator, AssetIndicator::Available);
    }

    #[test]
    fn test_user_rows_role_label() {
        let rows = user_rows(&[user("Sarah HR", Role::HrManager)]);
        assert_eq!(rows[0].role_label, "HR MANAGER");
        assert_eq!(rows[0].role_tone, StatusTone::Info);
    }

    #[test]
    fn test_employee_rows_pass_records_through() {
        let employee = Employee {
            id: 7,
            name: "Bob Smith".to_string(),
            position: "Software Developer".to_string(),
            department: "IT".to_string(),
            join_date: date("2022-11-20"),
            status: EmploymentStatus::Active,
        };
        let rows = employee_rows(std::slice::from_ref(&employee));
        assert_eq!(rows[0].employee, employee);
    }

    #[test]
    fn test_derive_dashboard_summary() {
        let inventory = [
            item(1, AssetStatus::InUse, 1200),
            item(2, AssetStatus::Available, 800),
        ];
        let requests = [
            request(1, "Alice", LeaveStatus::Pending),
            request(2, "Bob", LeaveStatus::Approved),
        ];
        let viewer = user("John Admin", Role::Admin);
        let data = Snapshot {
            users: std::slice::from_ref(&viewer),
            employees: &[],
            inventory: &inventory,
            leave_requests: &requests,
        };
        let ctx = ViewContext {
            viewer: &viewer,
            currency_symbol: "$",
            company_name: "InlinTech",
        };

        let PageView::Dashboard(view) = derive(Page::Dashboard, data, ctx) else {
            panic!("expected dashboard view");
        };
        assert_eq!(view.department_chart.len(), DEPARTMENT_CHART.len());
        assert_eq!(view.summary.assets_in_use, 1);
        assert_eq!(view.summary.assets_available, 1);
        assert_eq!(view.summary.pending_leave_requests, 1);
        assert_eq!(view.summary.total_asset_value, "$2,000");
    }

    #[test]
    fn test_derive_portal_shows_own_requests_read_only() {
        let viewer = user("Alice Employee", Role::Employee);
        let requests = [
            request(1, "Alice Employee", LeaveStatus::Pending),
            request(2, "Bob Smith", LeaveStatus::Pending),
        ];
        let data = Snapshot {
            users: &[],
            employees: &[],
            inventory: &[],
            leave_requests: &requests,
        };
        let ctx = ViewContext {
            viewer: &viewer,
            currency_symbol: "$",
            company_name: "InlinTech",
        };

        let view = derive(Page::Portal, data, ctx);
        assert_eq!(view.page(), Page::Portal);
        let PageView::Portal(portal) = view else {
            panic!("expected portal view");
        };
        assert_eq!(portal.role_label, "EMPLOYEE");
        assert_eq!(portal.my_leave_requests.len(), 1);
        assert_eq!(portal.my_leave_requests[0].actions, vec![RowAction::View]);
    }

    #[test]
    fn test_filter_matches_visible_text() {
        let requests = vec![
            request(1, "Alice Johnson", LeaveStatus::Pending),
            request(2, "Bob Smith", LeaveStatus::Approved),
        ];
        let hr = PageView::Hr(HrView {
            employees: Vec::new(),
            leave_requests: leave_rows(&requests),
        });

        let PageView::Hr(found) = hr.clone().filter("  APPROVED ") else {
            panic!("filter changed the page");
        };
        assert_eq!(found.leave_requests.len(), 1);
        assert_eq!(found.leave_requests[0].request.employee, "Bob Smith");

        assert_eq!(hr.clone().filter(""), hr);
    }

    #[test]
    fn test_filter_assets_by_formatted_value() {
        let items = vec![
            item(1, AssetStatus::InUse, 1200),
            item(2, AssetStatus::Available, 800),
        ];
        let view = PageView::Inventory(InventoryView {
            assets: asset_rows(&items, "$"),
        });

        let PageView::Inventory(found) = view.filter("1,200") else {
            panic!("filter changed the page");
        };
        assert_eq!(found.assets.len(), 1);
        assert_eq!(found.assets[0].id, 1);
    }

    #[test]
    fn test_page_view_is_tagged_by_page() {
        let json = serde_json::to_value(PageView::Admin(AdminView { users: vec![] })).unwrap();
        assert_eq!(json["page"], "admin");
    }
}
