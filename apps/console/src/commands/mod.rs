//! # Commands Module
//!
//! Every operation the presentation layer can trigger.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (guards, shared record type)
//! ├── auth.rs        ◄─── Login, demo pre-fill, logout
//! ├── navigation.rs  ◄─── Session info, page changes, search
//! ├── employee.rs    ◄─── Employee create/delete/edit
//! ├── inventory.rs   ◄─── Asset create/delete/edit
//! ├── leave.rs       ◄─── Leave submit/approve/reject/view
//! └── user.rs        ◄─── Account create/delete/edit
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  intent::dispatch(Intent::CreateEmployee(form))                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  employee::create_employee(&StoreState, form)                          │
//! │         │                                                               │
//! │         ├── authorized()  ◄── signed in? role owns the collection?     │
//! │         ├── store.employees_mut().create(form)                         │
//! │         ▼                                                               │
//! │  Result<Employee, ApiError>                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take only the state they need and return domain values. Turning
//! results into notifications and re-rendered views is `intent`'s job.

pub mod auth;
pub mod employee;
pub mod inventory;
pub mod leave;
pub mod navigation;
pub mod user;

use inlin_core::access::require_collection;
use inlin_core::{Collection, Employee, InventoryItem, LeaveRequest, RecordId, User};
use inlin_store::Store;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::StoreState;

/// A record of any collection, tagged with where it came from.
///
/// Returned by edit (for form pre-fill), view, and delete.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "collection", content = "record", rename_all = "camelCase")]
pub enum AnyRecord {
    Users(User),
    Employees(Employee),
    Inventory(InventoryItem),
    LeaveRequests(LeaveRequest),
}

/// Runs `f` with write access once the session may mutate `collection`.
///
/// ## Errors
/// - `UNAUTHENTICATED` when signed out
/// - `UNAUTHORIZED` when the role cannot reach the collection's page
pub(crate) fn authorized<R>(
    state: &StoreState,
    collection: Collection,
    f: impl FnOnce(&mut Store, &User) -> Result<R, ApiError>,
) -> Result<R, ApiError> {
    state.with_store_mut(|store| {
        let user = store.require_user()?.clone();
        require_collection(user.role, collection)?;
        f(store, &user)
    })
}

/// Runs `f` with write access for any signed-in session.
pub(crate) fn signed_in<R>(
    state: &StoreState,
    f: impl FnOnce(&mut Store, &User) -> Result<R, ApiError>,
) -> Result<R, ApiError> {
    state.with_store_mut(|store| {
        let user = store.require_user()?.clone();
        f(store, &user)
    })
}

/// Looks up a record for the edit form.
pub fn edit(state: &StoreState, target: Collection, id: RecordId) -> Result<AnyRecord, ApiError> {
    match target {
        Collection::Users => user::get_user(state, id).map(AnyRecord::Users),
        Collection::Employees => employee::get_employee(state, id).map(AnyRecord::Employees),
        Collection::Inventory => inventory::get_asset(state, id).map(AnyRecord::Inventory),
        Collection::LeaveRequests => leave::view_leave(state, id).map(AnyRecord::LeaveRequests),
    }
}

/// Checks that the session may delete from `target`, without deleting.
///
/// Run before asking for confirmation, so nobody is asked to confirm a
/// delete they could never perform.
pub fn authorize_delete(state: &StoreState, target: Collection) -> Result<(), ApiError> {
    authorized(state, target, |_, _| Ok(()))
}

/// Deletes a record. `Ok(None)` means there was nothing to delete.
pub fn delete(
    state: &StoreState,
    target: Collection,
    id: RecordId,
) -> Result<Option<AnyRecord>, ApiError> {
    Ok(match target {
        Collection::Users => user::delete_user(state, id)?.map(AnyRecord::Users),
        Collection::Employees => employee::delete_employee(state, id)?.map(AnyRecord::Employees),
        Collection::Inventory => inventory::delete_asset(state, id)?.map(AnyRecord::Inventory),
        Collection::LeaveRequests => {
            leave::delete_leave(state, id)?.map(AnyRecord::LeaveRequests)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn signed_in_as(email: &str) -> StoreState {
        let state = StoreState::new(Store::seeded());
        state.with_store_mut(|s| s.authenticate(email));
        state
    }

    #[test]
    fn test_authorized_requires_session() {
        let state = StoreState::new(Store::seeded());
        let err = authorized(&state, Collection::Employees, |_, _| Ok(())).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }

    #[test]
    fn test_authorized_checks_owning_page() {
        let state = signed_in_as("mike@inlintech.net");

        assert!(authorized(&state, Collection::Inventory, |_, _| Ok(())).is_ok());
        let err = authorized(&state, Collection::Employees, |_, _| Ok(())).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn test_edit_returns_tagged_record() {
        let state = signed_in_as("admin@inlintech.net");

        let record = edit(&state, Collection::Inventory, 4).unwrap();
        assert!(matches!(record, AnyRecord::Inventory(_)));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["collection"], "inventory");
        assert_eq!(json["record"]["name"], "Projector");
    }

    #[test]
    fn test_authorize_delete_follows_owning_page() {
        let signed_out = StoreState::new(Store::seeded());
        assert_eq!(
            authorize_delete(&signed_out, Collection::Employees).unwrap_err().code,
            ErrorCode::Unauthenticated
        );

        let alice = signed_in_as("alice@inlintech.net");
        assert_eq!(
            authorize_delete(&alice, Collection::Employees).unwrap_err().code,
            ErrorCode::Unauthorized
        );

        let sarah = signed_in_as("sarah@inlintech.net");
        assert!(authorize_delete(&sarah, Collection::LeaveRequests).is_ok());
        assert_eq!(sarah.with_store(|s| s.leave_requests().len()), 3);
    }

    #[test]
    fn test_delete_missing_is_none() {
        let state = signed_in_as("admin@inlintech.net");

        assert_eq!(delete(&state, Collection::Employees, 99).unwrap(), None);
        assert!(delete(&state, Collection::Employees, 2).unwrap().is_some());
        assert_eq!(delete(&state, Collection::Employees, 2).unwrap(), None);
    }
}
