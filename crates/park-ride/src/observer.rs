//! Cycle observer trait for progress reporting and data collection.

use park_core::Visitor;

use crate::{CycleReport, RideError};

/// Callbacks invoked by
/// [`RideState::run_cycle_observed`][crate::RideState::run_cycle_observed].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — boarding printer
///
/// ```rust,ignore
/// struct BoardingPrinter;
///
/// impl RideObserver for BoardingPrinter {
///     fn on_boarded(&mut self, cycle: u64, visitor: &Visitor) {
///         println!("cycle {cycle}: boarded {}", visitor.name());
///     }
/// }
/// ```
pub trait RideObserver {
    /// Called once both preconditions passed, before any visitor boards.
    /// `cycle` is the number this cycle will have once it completes.
    fn on_cycle_start(&mut self, _cycle: u64) {}

    /// Called for each visitor taken off the queue, in boarding order.
    fn on_boarded(&mut self, _cycle: u64, _visitor: &Visitor) {}

    /// Called after history was updated and the cycle counter advanced.
    fn on_cycle_end(&mut self, _report: &CycleReport) {}

    /// Called when a cycle is refused.  Nothing changed on the ride.
    fn on_cycle_rejected(&mut self, _error: &RideError) {}
}

/// A [`RideObserver`] that does nothing.
pub struct NoopObserver;

impl RideObserver for NoopObserver {}
