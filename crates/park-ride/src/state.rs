//! `RideState` — waiting queue and ride history of one ride.
//!
//! # Ownership
//!
//! Visitors move by value: `enqueue` takes ownership, `dequeue_front` and
//! boarding cycles hand it back out or into the history.  A record is never
//! held by both containers.
//!
//! # Ticket index
//!
//! A set of ticket ids mirrors the history so duplicate checks are O(1)
//! instead of a linear scan.  Ids match only when byte-for-byte equal; an
//! empty id is an ordinary key.  With the `fx-hash` feature the set uses
//! FxHash.

use std::collections::VecDeque;

use log::{info, warn};

use park_core::{Employee, RideConfig, Visitor};

use crate::{HistoryOrdering, RideError, RideResult};

#[cfg(feature = "fx-hash")]
type TicketIndex = rustc_hash::FxHashSet<String>;

#[cfg(not(feature = "fx-hash"))]
type TicketIndex = std::collections::HashSet<String>;

// ── HistoryInsert ─────────────────────────────────────────────────────────────

/// Outcome of [`RideState::add_to_history`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HistoryInsert {
    /// The visitor was appended.
    Added,
    /// A record with the same ticket id exists; history is unchanged.
    AlreadyPresent,
}

// ── RideState ─────────────────────────────────────────────────────────────────

/// One ride: identity, operator, FIFO waiting queue, and ride history.
#[derive(Debug)]
pub struct RideState {
    pub(crate) config:      RideConfig,
    pub(crate) operator:    Option<Employee>,
    pub(crate) queue:       VecDeque<Visitor>,
    pub(crate) history:     Vec<Visitor>,
    pub(crate) tickets:     TicketIndex,
    pub(crate) cycle_count: u64,
}

impl RideState {
    /// Create an empty ride.  A capacity below 1 is coerced to
    /// [`park_core::DEFAULT_MAX_CAPACITY`].
    pub fn new(name: impl Into<String>, max_capacity: i64, operator: Option<Employee>) -> Self {
        Self::from_config(RideConfig::new(name, max_capacity), operator)
    }

    pub fn from_config(config: RideConfig, operator: Option<Employee>) -> Self {
        Self {
            config: config.normalized(),
            operator,
            queue: VecDeque::new(),
            history: Vec::new(),
            tickets: TicketIndex::default(),
            cycle_count: 0,
        }
    }

    // ── Identity & operator ───────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn max_capacity(&self) -> usize {
        self.config.max_capacity
    }

    pub fn config(&self) -> &RideConfig {
        &self.config
    }

    pub fn operator(&self) -> Option<&Employee> {
        self.operator.as_ref()
    }

    /// Assign (or replace) the operator.  Returns the previous one.
    pub fn assign_operator(&mut self, operator: Employee) -> Option<Employee> {
        info!("{}: operator set to {}", self.config.name, operator);
        self.operator.replace(operator)
    }

    /// Remove the operator.  Cycles are refused until a new one is assigned.
    pub fn clear_operator(&mut self) -> Option<Employee> {
        self.operator.take()
    }

    /// Completed cycles since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    // ── Queue ─────────────────────────────────────────────────────────────

    /// Append a visitor to the back of the queue.
    ///
    /// Accepts `Visitor` or `Option<Visitor>`; `None` is rejected with
    /// [`RideError::AbsentVisitor`].  Returns the new queue length.
    pub fn enqueue(&mut self, visitor: impl Into<Option<Visitor>>) -> RideResult<usize> {
        let Some(visitor) = visitor.into() else {
            warn!("{}: cannot add an absent visitor to the queue", self.config.name);
            return Err(RideError::AbsentVisitor);
        };
        info!("{}: {} added to queue", self.config.name, visitor.name());
        self.queue.push_back(visitor);
        Ok(self.queue.len())
    }

    /// Remove and return the visitor at the front of the queue.
    pub fn dequeue_front(&mut self) -> RideResult<Visitor> {
        match self.queue.pop_front() {
            Some(visitor) => {
                info!("{}: {} removed from queue", self.config.name, visitor.name());
                Ok(visitor)
            }
            None => {
                warn!("{}: queue is empty, cannot remove visitor", self.config.name);
                Err(RideError::EmptyQueue { ride: self.config.name.clone() })
            }
        }
    }

    /// Waiting visitors, front first.
    pub fn queue(&self) -> impl ExactSizeIterator<Item = &Visitor> {
        self.queue.iter()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Emit a numbered listing of the queue at `info` level.
    pub fn log_queue(&self) {
        info!("queue for {} (size: {}):", self.config.name, self.queue.len());
        if self.queue.is_empty() {
            info!("  no visitors in queue");
        }
        for (i, v) in self.queue.iter().enumerate() {
            info!("{}. {v}", i + 1);
        }
    }

    // ── History ───────────────────────────────────────────────────────────

    /// Record a visitor in the history unless its ticket id is already there.
    pub fn add_to_history(&mut self, visitor: impl Into<Option<Visitor>>) -> RideResult<HistoryInsert> {
        let Some(visitor) = visitor.into() else {
            warn!("{}: cannot add an absent visitor to history", self.config.name);
            return Err(RideError::AbsentVisitor);
        };
        Ok(self.insert_history(visitor))
    }

    /// Whether a record with the same ticket id is in the history.
    ///
    /// `None` yields `false`.
    pub fn contains_in_history(&self, visitor: Option<&Visitor>) -> bool {
        visitor.is_some_and(|v| self.tickets.contains(v.ticket_id()))
    }

    pub fn history_size(&self) -> usize {
        self.history.len()
    }

    /// History records in their current order.
    pub fn history(&self) -> &[Visitor] {
        &self.history
    }

    /// Sort the history in place by [`HistoryOrdering`].  The sort is
    /// stable, so records with equal keys keep their relative order.
    pub fn sort_history(&mut self) -> RideResult<()> {
        if self.history.is_empty() {
            warn!("{}: cannot sort empty ride history", self.config.name);
            return Err(RideError::EmptyHistory { ride: self.config.name.clone() });
        }
        self.history.sort_by(HistoryOrdering::compare);
        info!("{}: ride history sorted", self.config.name);
        Ok(())
    }

    /// Append records without the duplicate-ticket check.
    ///
    /// Used by the history importer, which deliberately does not dedupe:
    /// an imported ticket id may already be present.
    pub fn extend_history_unchecked(&mut self, visitors: impl IntoIterator<Item = Visitor>) {
        for visitor in visitors {
            self.tickets.insert(visitor.ticket_id().to_owned());
            self.history.push(visitor);
        }
    }

    /// Emit a numbered listing of the history at `info` level.
    pub fn log_history(&self) {
        info!("ride history for {}:", self.config.name);
        if self.history.is_empty() {
            info!("  no visitors in history");
        }
        for (i, v) in self.history.iter().enumerate() {
            info!("{}. {v}", i + 1);
        }
    }

    pub(crate) fn insert_history(&mut self, visitor: Visitor) -> HistoryInsert {
        if self.contains_in_history(Some(&visitor)) {
            info!("{}: {} is already in history", self.config.name, visitor.name());
            return HistoryInsert::AlreadyPresent;
        }
        self.tickets.insert(visitor.ticket_id().to_owned());
        info!("{}: added {} to history", self.config.name, visitor.name());
        self.history.push(visitor);
        HistoryInsert::Added
    }
}
