//! # Store
//!
//! The single owner of dashboard state: four collections and the session.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                               Store                                     │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ users        │ │ employees    │ │ inventory    │ │ leave_       │   │
//! │  │ Table<User>  │ │ Table<Emp..> │ │ Table<Inv..> │ │ requests     │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │ session: current user · current page · session id               │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Constructed explicitly and passed to whoever needs it. There is no    │
//! │  global instance, so tests build as many independent stores as they   │
//! │  like.                                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logout resets the session only. The collections live as long as the
//! `Store` does.

use inlin_core::access::require_page;
use inlin_core::view::Snapshot;
use inlin_core::{CoreError, CoreResult, Page, User};
use tracing::{info, warn};

use crate::repository::{
    EmployeeRepository, InventoryRepository, LeaveRequestRepository, Table, UserRepository,
};
use crate::seed::{self, Dataset};
use crate::session::Session;

#[derive(Debug, Clone, Default)]
pub struct Store {
    users: UserRepository,
    employees: EmployeeRepository,
    inventory: InventoryRepository,
    leave_requests: LeaveRequestRepository,
    session: Session,
}

impl Store {
    /// An empty, signed-out store.
    pub fn new() -> Self {
        Store::default()
    }

    /// A signed-out store holding the sample dataset.
    pub fn seeded() -> Self {
        Store::from_dataset(seed::dataset())
    }

    /// A signed-out store holding `data`. Id sequences continue past the
    /// largest id in each collection.
    pub fn from_dataset(data: Dataset) -> Self {
        Store {
            users: Table::from_rows(data.users),
            employees: Table::from_rows(data.employees),
            inventory: Table::from_rows(data.inventory),
            leave_requests: Table::from_rows(data.leave_requests),
            session: Session::default(),
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Signs in the account whose email matches exactly.
    ///
    /// ## Returns
    /// - `Some(user)`: session now holds `user`, page is the role's default
    /// - `None`: no such account; the session is untouched
    ///
    /// No password is involved. Blank-field checks happen before this call.
    pub fn authenticate(&mut self, email: &str) -> Option<User> {
        let Some(user) = self.users.find_by_email(email).cloned() else {
            warn!(email, "Login rejected: no matching account");
            return None;
        };

        self.session.sign_in(user.clone());
        info!(
            user_id = user.id,
            role = %user.role,
            page = %self.session.current_page(),
            session_id = ?self.session.session_id(),
            "User signed in"
        );

        Some(user)
    }

    /// Clears the session. Collections are kept.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.current_user() {
            info!(user_id = user.id, "User signed out");
        }
        self.session.sign_out();
    }

    /// The signed-in user, or `Unauthenticated`.
    pub fn require_user(&self) -> CoreResult<&User> {
        self.session.current_user().ok_or(CoreError::Unauthenticated)
    }

    /// Moves the session to `page` if the signed-in role may see it.
    ///
    /// ## Errors
    /// - `Unauthenticated` when signed out
    /// - `Unauthorized` when the page is outside the role's set
    ///
    /// Either way the current page does not change.
    pub fn navigate(&mut self, page: Page) -> CoreResult<Page> {
        let role = self.require_user()?.role;

        if let Err(err) = require_page(role, page) {
            warn!(%role, %page, "Navigation rejected");
            return Err(err);
        }

        self.session.set_page(page);
        Ok(page)
    }

    // =========================================================================
    // Repositories
    // =========================================================================

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    pub fn users_mut(&mut self) -> &mut UserRepository {
        &mut self.users
    }

    pub fn employees(&self) -> &EmployeeRepository {
        &self.employees
    }

    pub fn employees_mut(&mut self) -> &mut EmployeeRepository {
        &mut self.employees
    }

    pub fn inventory(&self) -> &InventoryRepository {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut InventoryRepository {
        &mut self.inventory
    }

    pub fn leave_requests(&self) -> &LeaveRequestRepository {
        &self.leave_requests
    }

    pub fn leave_requests_mut(&mut self) -> &mut LeaveRequestRepository {
        &mut self.leave_requests
    }

    /// Read-only view of all collections for derivation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            users: self.users.list(),
            employees: self.employees.list(),
            inventory: self.inventory.list(),
            leave_requests: self.leave_requests.list(),
        }
    }

    /// Owned copy of all collections.
    pub fn dataset(&self) -> Dataset {
        Dataset {
            users: self.users.list().to_vec(),
            employees: self.employees.list().to_vec(),
            inventory: self.inventory.list().to_vec(),
            leave_requests: self.leave_requests.list().to_vec(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use inlin_core::{NewEmployee, Role};

    #[test]
    fn test_authenticate_every_seeded_email() {
        for user in seed::users() {
            let mut store = Store::seeded();
            let found = store.authenticate(&user.email);

            assert_eq!(found.as_ref(), Some(&user));
            assert!(store.session().is_authenticated());
            assert_eq!(store.session().current_user(), Some(&user));
            assert!(store.session().session_id().is_some());
        }
    }

    #[test]
    fn test_authenticate_unknown_email_leaves_session_alone() {
        let mut store = Store::seeded();

        for email in ["", "nobody@inlintech.net", "ADMIN@INLINTECH.NET", " admin@inlintech.net"] {
            assert!(store.authenticate(email).is_none());
            assert!(!store.session().is_authenticated());
            assert_eq!(store.session().current_page(), Page::Dashboard);
        }
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let mut store = Store::seeded();
        store.authenticate("mike@inlintech.net");

        assert!(store.authenticate("ghost@inlintech.net").is_none());
        assert_eq!(store.session().current_role(), Some(Role::InventoryManager));
    }

    #[test]
    fn test_login_lands_on_default_page() {
        let mut store = Store::seeded();
        store.authenticate("alice@inlintech.net");
        assert_eq!(store.session().current_page(), Page::Portal);

        store.authenticate("sarah@inlintech.net");
        assert_eq!(store.session().current_page(), Page::Dashboard);
    }

    #[test]
    fn test_navigate_is_strict() {
        let mut store = Store::seeded();
        store.authenticate("sarah@inlintech.net");

        assert_eq!(store.navigate(Page::Hr), Ok(Page::Hr));
        assert_eq!(
            store.navigate(Page::Admin),
            Err(CoreError::Unauthorized {
                role: Role::HrManager,
                page: Page::Admin,
            })
        );
        assert_eq!(store.session().current_page(), Page::Hr);
    }

    #[test]
    fn test_navigate_requires_session() {
        let mut store = Store::seeded();
        assert_eq!(store.navigate(Page::Portal), Err(CoreError::Unauthenticated));
    }

    #[test]
    fn test_logout_keeps_collections() {
        let mut store = Store::seeded();
        store.authenticate("admin@inlintech.net");
        store.navigate(Page::Admin).unwrap();
        store
            .employees_mut()
            .create(NewEmployee {
                name: "Test User".to_string(),
                position: "Intern".to_string(),
                department: "IT".to_string(),
                join_date: "2025-07-01".to_string(),
            })
            .unwrap();

        store.logout();

        assert!(!store.session().is_authenticated());
        assert!(store.session().session_id().is_none());
        assert_eq!(store.session().current_page(), Page::Dashboard);
        assert_eq!(store.employees().len(), 5);
    }

    #[test]
    fn test_independent_stores() {
        let mut a = Store::seeded();
        let b = Store::seeded();

        a.employees_mut().delete(1);

        assert_eq!(a.employees().len(), 3);
        assert_eq!(b.employees().len(), 4);
    }

    #[test]
    fn test_snapshot_and_dataset_agree() {
        let store = Store::seeded();
        let snapshot = store.snapshot();
        let dataset = store.dataset();

        assert_eq!(snapshot.users, dataset.users.as_slice());
        assert_eq!(snapshot.leave_requests.len(), 3);
        assert_eq!(Store::new().snapshot().employees.len(), 0);
    }
}
