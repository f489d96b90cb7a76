//! # Access Controller
//!
//! Role → page capability table.
//!
//! ```text
//! ┌───────────────────┬───────────┬────┬───────────┬────────┬───────┐
//! │ role              │ dashboard │ hr │ inventory │ portal │ admin │
//! ├───────────────────┼───────────┼────┼───────────┼────────┼───────┤
//! │ admin             │    ★      │ ✓  │    ✓      │   ✓    │   ✓   │
//! │ hr_manager        │    ★      │ ✓  │           │   ✓    │       │
//! │ inventory_manager │    ★      │    │    ✓      │   ✓    │       │
//! │ employee          │           │    │           │   ★    │       │
//! └───────────────────┴───────────┴────┴───────────┴────────┴───────┘
//!                                                  ★ = default landing page
//! ```
//!
//! Navigation is checked strictly: a page outside the role's row is
//! rejected and the session stays where it was. The same table gates
//! mutations, since each collection is edited from the page that shows it.

use crate::error::{CoreError, CoreResult};
use crate::types::{Collection, Page, Role};

/// Pages shown in the navigation bar for `role`.
pub const fn visible_pages(role: Role) -> &'static [Page] {
    match role {
        Role::Admin => &[
            Page::Dashboard,
            Page::Hr,
            Page::Inventory,
            Page::Portal,
            Page::Admin,
        ],
        Role::HrManager => &[Page::Dashboard, Page::Hr, Page::Portal],
        Role::InventoryManager => &[Page::Dashboard, Page::Inventory, Page::Portal],
        Role::Employee => &[Page::Portal],
    }
}

/// Landing page after login.
pub const fn default_page(role: Role) -> Page {
    match role {
        Role::Employee => Page::Portal,
        Role::Admin | Role::HrManager | Role::InventoryManager => Page::Dashboard,
    }
}

/// True iff `target` is in `role`'s visible set.
pub fn authorize_navigation(role: Role, target: Page) -> bool {
    visible_pages(role).contains(&target)
}

/// Like [`authorize_navigation`], as a `Result` for `?` chains.
pub fn require_page(role: Role, page: Page) -> CoreResult<()> {
    if authorize_navigation(role, page) {
        Ok(())
    } else {
        Err(CoreError::Unauthorized { role, page })
    }
}

/// Checks that `role` may create, delete or decide records in `collection`.
pub fn require_collection(role: Role, collection: Collection) -> CoreResult<()> {
    require_page(role, collection.owning_page())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_sees_its_default_page() {
        for role in Role::ALL {
            let pages = visible_pages(role);
            assert!(!pages.is_empty(), "{role} has no pages");
            assert!(pages.contains(&default_page(role)), "{role} cannot land");
        }
    }

    #[test]
    fn test_default_pages() {
        assert_eq!(default_page(Role::Employee), Page::Portal);
        assert_eq!(default_page(Role::Admin), Page::Dashboard);
        assert_eq!(default_page(Role::HrManager), Page::Dashboard);
        assert_eq!(default_page(Role::InventoryManager), Page::Dashboard);
    }

    #[test]
    fn test_authorize_navigation() {
        assert!(authorize_navigation(Role::Admin, Page::Admin));
        assert!(authorize_navigation(Role::HrManager, Page::Hr));
        assert!(!authorize_navigation(Role::HrManager, Page::Inventory));
        assert!(!authorize_navigation(Role::InventoryManager, Page::Hr));
        assert!(!authorize_navigation(Role::Employee, Page::Dashboard));
    }

    #[test]
    fn test_admin_reaches_everything() {
        for page in Page::ALL {
            assert!(authorize_navigation(Role::Admin, page));
        }
    }

    #[test]
    fn test_require_collection() {
        assert!(require_collection(Role::HrManager, Collection::Employees).is_ok());
        assert!(require_collection(Role::HrManager, Collection::LeaveRequests).is_ok());
        assert_eq!(
            require_collection(Role::HrManager, Collection::Users),
            Err(CoreError::Unauthorized {
                role: Role::HrManager,
                page: Page::Admin,
            })
        );
        assert!(require_collection(Role::Employee, Collection::Inventory).is_err());
    }
}
