//! # Id Sequences
//!
//! Per-collection monotonic id counters.
//!
//! Ids are never derived from the collection length, so a delete followed
//! by a create cannot hand out an id that is still in use:
//!
//! ```text
//! rows: [1, 2, 3, 4]   next = 5
//! delete 2             rows: [1, 3, 4]      next = 5
//! create               rows: [1, 3, 4, 5]   next = 6   (length+1 would give 4 again)
//! ```

use inlin_core::RecordId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: RecordId,
}

impl IdSequence {
    /// A fresh sequence starting at 1.
    pub const fn new() -> Self {
        IdSequence { next: 1 }
    }

    /// A sequence continuing past the largest of `existing`.
    pub fn after(existing: impl IntoIterator<Item = RecordId>) -> Self {
        let max = existing.into_iter().max().unwrap_or(0);
        IdSequence { next: max + 1 }
    }

    /// The id the next successful issue will use.
    pub const fn peek(&self) -> RecordId {
        self.next
    }

    /// Runs `build` with the next id and advances only if it succeeds.
    ///
    /// Failed form submissions therefore leave no gaps.
    pub fn issue_with<T, E>(
        &mut self,
        build: impl FnOnce(RecordId) -> Result<T, E>,
    ) -> Result<T, E> {
        let record = build(self.next)?;
        self.next += 1;
        Ok(record)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_continues_past_max() {
        assert_eq!(IdSequence::after([3, 1, 7, 2]).peek(), 8);
        assert_eq!(IdSequence::after(Vec::new()).peek(), 1);
    }

    #[test]
    fn test_issue_with_advances_only_on_success() {
        let mut seq = IdSequence::new();

        let failed: Result<RecordId, &str> = seq.issue_with(|_| Err("bad form"));
        assert!(failed.is_err());
        assert_eq!(seq.peek(), 1);

        let issued: Result<RecordId, &str> = seq.issue_with(Ok);
        assert_eq!(issued, Ok(1));
        assert_eq!(seq.peek(), 2);
    }
}
