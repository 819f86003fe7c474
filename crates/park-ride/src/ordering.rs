//! History ordering: visit date ascending, then age descending.
//!
//! Dates are compared on their canonical `YYYY-MM-DD` text.  For
//! well-formed dates that is the same as chronological order; malformed
//! dates still compare consistently (as strings), so sorting a history that
//! contains them never sees a non-total comparator.
//!
//! # Absent operands
//!
//! [`HistoryOrdering::compare_opt`] treats a missing visitor on either side
//! as equal to anything.  This is a lenient fallback for callers holding
//! optional records; it is not a total order and must not be fed to a sort
//! over a collection that actually contains gaps.

use std::cmp::Ordering;

use park_core::Visitor;

/// Ordering applied by [`RideState::sort_history`][crate::RideState::sort_history].
#[derive(Copy, Clone, Debug, Default)]
pub struct HistoryOrdering;

impl HistoryOrdering {
    /// Total order over present visitors.
    pub fn compare(a: &Visitor, b: &Visitor) -> Ordering {
        a.visit_date()
            .cmp(b.visit_date())
            .then_with(|| b.age().cmp(&a.age()))
    }

    /// Like [`compare`](Self::compare), but `None` on either side is `Equal`.
    pub fn compare_opt(a: Option<&Visitor>, b: Option<&Visitor>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => Self::compare(a, b),
            _ => Ordering::Equal,
        }
    }

    /// `true` if every adjacent pair of `visitors` is in history order.
    pub fn is_sorted(visitors: &[Visitor]) -> bool {
        visitors
            .windows(2)
            .all(|w| Self::compare(&w[0], &w[1]) != Ordering::Greater)
    }
}
