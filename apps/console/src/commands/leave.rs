//! # Leave Commands
//!
//! ## Who Can Do What
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_leave    any signed-in user, filed under their own name        │
//! │  approve/reject  HR page access; Pending requests only                 │
//! │  view_leave      HR page access, or the request is the viewer's own    │
//! │  delete_leave    HR page access                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inlin_core::access::{authorize_navigation, require_collection};
use inlin_core::{Collection, LeaveRequest, LeaveStatus, NewLeaveRequest, RecordId};
use tracing::{debug, info};

use super::{authorized, signed_in};
use crate::error::ApiError;
use crate::state::StoreState;

/// Files a `Pending` request for the signed-in user.
///
/// `days` is the inclusive count: Oct 15 to Oct 20 is 6 days.
pub fn submit_leave(state: &StoreState, form: NewLeaveRequest) -> Result<LeaveRequest, ApiError> {
    debug!(leave_type = %form.leave_type, "submit_leave command");

    signed_in(state, |store, user| {
        Ok(store.leave_requests_mut().submit(form, &user.name)?)
    })
}

pub fn approve_leave(state: &StoreState, id: RecordId) -> Result<LeaveRequest, ApiError> {
    decide(state, id, LeaveStatus::Approved)
}

pub fn reject_leave(state: &StoreState, id: RecordId) -> Result<LeaveRequest, ApiError> {
    decide(state, id, LeaveStatus::Rejected)
}

/// ## Errors
/// - `NOT_FOUND` for an unknown id
/// - `BUSINESS_LOGIC` if the request was already decided (it keeps its
///   status)
fn decide(state: &StoreState, id: RecordId, to: LeaveStatus) -> Result<LeaveRequest, ApiError> {
    debug!(id, %to, "decide_leave command");

    authorized(state, Collection::LeaveRequests, |store, user| {
        let request = store.leave_requests_mut().update_status(id, to)?;
        info!(id, status = %request.status, decided_by = user.id, "Leave request decided");
        Ok(request)
    })
}

/// Read-only detail of one request.
pub fn view_leave(state: &StoreState, id: RecordId) -> Result<LeaveRequest, ApiError> {
    debug!(id, "view_leave command");

    signed_in(state, |store, user| {
        let request = store.leave_requests().require(id)?;

        let reviewer = authorize_navigation(user.role, Collection::LeaveRequests.owning_page());
        if !reviewer && request.employee != user.name {
            require_collection(user.role, Collection::LeaveRequests)?;
        }

        Ok(request.clone())
    })
}

pub fn delete_leave(state: &StoreState, id: RecordId) -> Result<Option<LeaveRequest>, ApiError> {
    debug!(id, "delete_leave command");

    authorized(state, Collection::LeaveRequests, |store, _| {
        Ok(store.leave_requests_mut().delete(id))
    })
}
