//! Visitor records.
//!
//! A `Visitor` is an immutable attribute holder.  The ride crates move it
//! between the waiting queue and the history by value, so exactly one
//! container owns a given record at a time.
//!
//! The visit date is kept in its canonical `YYYY-MM-DD` text form.  For
//! well-formed dates, lexicographic order on that text equals chronological
//! order, which is what history sorting relies on.

use std::fmt;

use chrono::NaiveDate;

/// `chrono` format string for the canonical visit-date form.
pub const VISIT_DATE_FORMAT: &str = "%Y-%m-%d";

// ── Visitor ───────────────────────────────────────────────────────────────────

/// One park visitor holding a ticket for a ride.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visitor {
    name:       String,
    age:        u32,
    contact:    String,
    ticket_id:  String,
    visit_date: String,
}

impl Visitor {
    /// Build a visitor.  No validation is performed here; the history
    /// importer validates untrusted rows before constructing one.
    pub fn new(
        name:       impl Into<String>,
        age:        u32,
        contact:    impl Into<String>,
        ticket_id:  impl Into<String>,
        visit_date: impl Into<String>,
    ) -> Self {
        Self {
            name:       name.into(),
            age,
            contact:    contact.into(),
            ticket_id:  ticket_id.into(),
            visit_date: visit_date.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Unique key within one ride's history.  Compared exactly: no
    /// trimming or case folding.
    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    /// Canonical `YYYY-MM-DD` text of the visit date.
    pub fn visit_date(&self) -> &str {
        &self.visit_date
    }

    /// The visit date as a calendar date, if it is well formed.
    pub fn parsed_visit_date(&self) -> Option<NaiveDate> {
        parse_visit_date(&self.visit_date)
    }
}

impl fmt::Display for Visitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person [Name: {}, Age: {}, Contact: {}] | Visitor [Ticket ID: {}, Visit Date: {}]",
            self.name, self.age, self.contact, self.ticket_id, self.visit_date
        )
    }
}

// ── Date helpers ──────────────────────────────────────────────────────────────

/// Parse a strict `YYYY-MM-DD` date.
///
/// `chrono` alone accepts unpadded months and days (`2025-1-5`), so the
/// fixed-width shape is checked first.
pub fn parse_visit_date(s: &str) -> Option<NaiveDate> {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(s, VISIT_DATE_FORMAT).ok()
}

/// Render a date in the canonical visit-date form.
pub fn format_visit_date(date: NaiveDate) -> String {
    date.format(VISIT_DATE_FORMAT).to_string()
}
