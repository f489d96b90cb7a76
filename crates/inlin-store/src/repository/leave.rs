//! # Leave Request Repository
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Portal form ──submit()──► Pending ──update_status(Approved)──► Approved│
//! │                               │                                         │
//! │                               └────update_status(Rejected)──► Rejected │
//! │                                                                         │
//! │  Approved / Rejected are terminal: further updates fail and the record │
//! │  stays as it is.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inlin_core::{Collection, LeaveRequest, LeaveStatus, NewLeaveRequest, RecordId};
use tracing::debug;

use super::LeaveRequestRepository;
use crate::error::{StoreError, StoreResult};

impl LeaveRequestRepository {
    /// Files a `Pending` request on behalf of `employee`.
    ///
    /// The inclusive day count is computed here, once.
    pub fn submit(&mut self, form: NewLeaveRequest, employee: &str) -> StoreResult<LeaveRequest> {
        self.insert_with(|id| form.into_request(id, employee))
    }

    /// Decides a pending request.
    ///
    /// ## Errors
    /// - `NotFound` if no request has this id
    /// - `Core(InvalidLeaveTransition)` if it was already decided, or `to`
    ///   is `Pending`
    ///
    /// On error the record is unchanged.
    pub fn update_status(&mut self, id: RecordId, to: LeaveStatus) -> StoreResult<LeaveRequest> {
        let request = self
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(Collection::LeaveRequests, id))?;

        request.status = request.status.transition(id, to)?;
        debug!(id, status = %request.status, "Leave request decided");

        Ok(request.clone())
    }
}
