//! Deterministic crowd generation.
//!
//! `CrowdRng` wraps a `SmallRng` seeded from a single `u64`, so the same
//! seed always yields the same sequence of visitors.  It backs the crowd
//! scenario in the demo driver and the property-style tests in the ride
//! crates.
//!
//! Ticket ids are issued sequentially (`TICKET0000`, `TICKET0001`, …) and
//! never repeat within one generator, so a generated crowd has distinct
//! ticket ids unless the caller mixes generators.

use chrono::{Days, NaiveDate};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::visitor::{Visitor, format_visit_date};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Ethan", "Frank", "Grace", "Henry",
    "Ivy", "Jack", "Luna", "Mason", "Nora", "Oscar", "Penelope", "Quinn",
    "Ryan", "Stella", "Tyler", "Uma", "Victor", "Wen", "Xiao", "Zoë",
];

const LAST_NAMES: &[&str] = &[
    "Brown", "Wilson", "Davis", "Evans", "Foster", "Green", "Hall", "Hughes",
    "Jones", "King", "Moore", "Nelson", "Ortiz", "Perez", "Quinn", "Reed",
];

/// Seeded generator of plausible visitors.
pub struct CrowdRng {
    rng:         SmallRng,
    next_ticket: u32,
}

impl CrowdRng {
    pub fn new(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed), next_ticket: 0 }
    }

    /// Generate one visitor whose visit date falls in
    /// `[first_day, first_day + span_days)`.
    ///
    /// `span_days == 0` pins every visit to `first_day`.
    pub fn visitor(&mut self, first_day: NaiveDate, span_days: u64) -> Visitor {
        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("Guest");
        let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("Visitor");
        let age = self.rng.gen_range(4..=80);
        let contact = format!("555-{:04}", self.rng.gen_range(0..10_000));

        let offset = if span_days == 0 { 0 } else { self.rng.gen_range(0..span_days) };
        let date = first_day.checked_add_days(Days::new(offset)).unwrap_or(first_day);

        let ticket = format!("TICKET{:04}", self.next_ticket);
        self.next_ticket += 1;

        Visitor::new(format!("{first} {last}"), age, contact, ticket, format_visit_date(date))
    }

    /// Generate `count` visitors (see [`CrowdRng::visitor`]).
    pub fn crowd(&mut self, count: usize, first_day: NaiveDate, span_days: u64) -> Vec<Visitor> {
        (0..count).map(|_| self.visitor(first_day, span_days)).collect()
    }
}
