//! # Leave Rules
//!
//! Day counting and the decision lifecycle for leave requests.
//!
//! ## Day Count
//! Inclusive on both ends: a request from the 15th to the 20th covers six
//! days, a single-day request covers one. The count is fixed when the
//! request is created.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{LeaveStatus, RecordId};

/// Inclusive number of days between `start` and `end`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use inlin_core::leave::leave_days;
///
/// let start = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
/// assert_eq!(leave_days(start, end).unwrap(), 6);
/// assert_eq!(leave_days(start, start).unwrap(), 1);
/// ```
///
/// An end before the start is rejected, so the result is always ≥ 1.
pub fn leave_days(start: NaiveDate, end: NaiveDate) -> Result<i64, ValidationError> {
    if end < start {
        return Err(ValidationError::DateOrder {
            start_field: "startDate".to_string(),
            end_field: "endDate".to_string(),
        });
    }

    Ok((end - start).num_days() + 1)
}

impl LeaveStatus {
    /// Approved and Rejected are final.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }

    /// Validates a decision on request `id`.
    ///
    /// Only `Pending → Approved` and `Pending → Rejected` exist. Anything
    /// else, including re-deciding a request, is an error and the caller
    /// leaves the record untouched.
    pub fn transition(self, id: RecordId, to: LeaveStatus) -> CoreResult<LeaveStatus> {
        match (self, to) {
            (LeaveStatus::Pending, LeaveStatus::Approved | LeaveStatus::Rejected) => Ok(to),
            (from, to) => Err(CoreError::InvalidLeaveTransition { id, from, to }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leave_days_inclusive() {
        assert_eq!(leave_days(date(2025, 10, 15), date(2025, 10, 20)).unwrap(), 6);
        assert_eq!(leave_days(date(2025, 11, 1), date(2025, 11, 1)).unwrap(), 1);
        assert_eq!(leave_days(date(2025, 9, 10), date(2025, 9, 12)).unwrap(), 3);
    }

    #[test]
    fn test_leave_days_across_month_and_leap_day() {
        assert_eq!(leave_days(date(2024, 2, 28), date(2024, 3, 1)).unwrap(), 3);
        assert_eq!(leave_days(date(2025, 12, 31), date(2026, 1, 2)).unwrap(), 3);
    }

    #[test]
    fn test_leave_days_rejects_reversed_range() {
        assert!(matches!(
            leave_days(date(2025, 10, 20), date(2025, 10, 15)),
            Err(ValidationError::DateOrder { .. })
        ));
    }

    #[test]
    fn test_pending_can_be_decided() {
        assert_eq!(
            LeaveStatus::Pending.transition(1, LeaveStatus::Approved),
            Ok(LeaveStatus::Approved)
        );
        assert_eq!(
            LeaveStatus::Pending.transition(1, LeaveStatus::Rejected),
            Ok(LeaveStatus::Rejected)
        );
    }

    #[test]
    fn test_terminal_states_stay_put() {
        for from in [LeaveStatus::Approved, LeaveStatus::Rejected] {
            assert!(from.is_terminal());
            for to in [LeaveStatus::Pending, LeaveStatus::Approved, LeaveStatus::Rejected] {
                assert_eq!(
                    from.transition(7, to),
                    Err(CoreError::InvalidLeaveTransition { id: 7, from, to })
                );
            }
        }
    }

    #[test]
    fn test_pending_to_pending_is_not_a_decision() {
        assert!(LeaveStatus::Pending.transition(3, LeaveStatus::Pending).is_err());
    }
}
