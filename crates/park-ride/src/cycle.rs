//! One boarding cycle.
//!
//! # Ordering of effects
//!
//! ```text
//! ① preconditions   — operator, non-empty queue (reject → no change)
//! ② board           — drain min(capacity, queue_len) from the front
//! ③ record          — add each boarded visitor to history, in boarding order
//! ④ count           — cycle_count += 1
//! ```
//!
//! A visitor whose ticket id is already in the history still counts as
//! boarded; it is simply not recorded twice.

use log::{debug, info, warn};

use crate::{HistoryInsert, NoopObserver, RideError, RideObserver, RideResult, RideState};

/// What an accepted cycle did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// Cycle number; equals `cycle_count` after this cycle.
    pub cycle:           u64,
    /// Visitors taken off the queue.
    pub boarded:         usize,
    /// Boarded visitors that were new to the history.
    pub recorded:        usize,
    /// Queue length after boarding.
    pub remaining:       usize,
    /// Ticket ids of the boarded visitors, in boarding order.
    pub boarded_tickets: Vec<String>,
}

impl RideState {
    /// Run one cycle without an observer.
    pub fn run_cycle(&mut self) -> RideResult<CycleReport> {
        self.run_cycle_observed(&mut NoopObserver)
    }

    /// Run one cycle, reporting progress to `observer`.
    pub fn run_cycle_observed<O: RideObserver>(&mut self, observer: &mut O) -> RideResult<CycleReport> {
        info!("starting one cycle of {}", self.config.name);

        if let Err(e) = self.check_cycle_preconditions() {
            warn!("cannot run {}: {e}", self.config.name);
            observer.on_cycle_rejected(&e);
            return Err(e);
        }

        let cycle = self.cycle_count + 1;
        observer.on_cycle_start(cycle);

        // ── Board ─────────────────────────────────────────────────────────
        let boarding = self.config.max_capacity.min(self.queue.len());
        let boarded: Vec<_> = self.queue.drain(..boarding).collect();
        for v in &boarded {
            debug!("boarded: {} (ticket {})", v.name(), v.ticket_id());
            observer.on_boarded(cycle, v);
        }

        if let Some(op) = &self.operator {
            info!("{} is running, operator: {op}", self.config.name);
        }

        // ── Record ────────────────────────────────────────────────────────
        let boarded_tickets: Vec<String> = boarded.iter().map(|v| v.ticket_id().to_owned()).collect();
        let recorded = boarded
            .into_iter()
            .map(|v| self.insert_history(v))
            .filter(|r| *r == HistoryInsert::Added)
            .count();

        self.cycle_count = cycle;

        let report = CycleReport {
            cycle,
            boarded: boarding,
            recorded,
            remaining: self.queue.len(),
            boarded_tickets,
        };
        info!(
            "cycle {} completed for {}: boarded {}, remaining in queue {}",
            report.cycle, self.config.name, report.boarded, report.remaining
        );
        observer.on_cycle_end(&report);
        Ok(report)
    }

    fn check_cycle_preconditions(&self) -> RideResult<()> {
        if self.operator.is_none() {
            return Err(RideError::NoOperator { ride: self.config.name.clone() });
        }
        if self.queue.is_empty() {
            return Err(RideError::EmptyQueue { ride: self.config.name.clone() });
        }
        Ok(())
    }
}
