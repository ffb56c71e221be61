//! Closed date-interval overlap detection for team assignments and bookings.
//!
//! Intervals are inclusive on both ends: an assignment ending on the 10th
//! conflicts with one starting on the 10th. The repository layer runs these
//! checks inside a serializable transaction so two concurrent writes cannot
//! both pass the check.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::types::DbId;

/// A closed day-granularity interval `[start, end]` with `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting inverted bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if end < start {
            return Err(CoreError::Validation(format!(
                "End date {end} is before start date {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Closed-interval overlap: `[a,b]` and `[c,d]` overlap iff `a <= d && c <= b`.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// An existing assignment's range tagged with its row id, so updates can
/// exclude themselves from the conflict set.
#[derive(Debug, Clone, Copy)]
pub struct OwnedRange {
    pub id: DbId,
    pub range: DateRange,
}

/// Find the first existing range that overlaps `candidate`, skipping the row
/// identified by `exclude_id` (the row being updated, if any).
pub fn find_conflict(
    existing: &[OwnedRange],
    candidate: DateRange,
    exclude_id: Option<DbId>,
) -> Option<OwnedRange> {
    existing
        .iter()
        .filter(|r| exclude_id != Some(r.id))
        .find(|r| r.range.overlaps(&candidate))
        .copied()
}
