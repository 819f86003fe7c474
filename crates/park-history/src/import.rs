//! Validated history import.
//!
//! # Line handling
//!
//! | Line              | Outcome                                             |
//! |-------------------|-----------------------------------------------------|
//! | 1                 | header — skipped unconditionally, not counted       |
//! | blank (trimmed)   | skipped, counted                                    |
//! | ≠ 5 fields        | skipped, counted                                    |
//! | bad date          | skipped, counted (checked first)                    |
//! | empty name/ticket | skipped, counted                                    |
//! | bad / negative age| skipped, counted                                    |
//! | otherwise         | appended to history                                 |
//!
//! Imported records bypass the queue and the duplicate-ticket check, so an
//! import may add a ticket id the history already holds.
//!
//! Lines are decoded as UTF-8 one at a time; invalid bytes become U+FFFD
//! rather than failing the import, so a mis-encoded name only affects its
//! own record.
//!
//! Valid records are staged and appended only once the whole source has
//! been read.  A read error part-way through leaves the history untouched.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use park_core::{Visitor, parse_visit_date};
use park_ride::RideState;

use crate::format::{DELIMITER, FIELD_COUNT};
use crate::{HistoryError, HistoryResult, SkipReason};

// ── Report ────────────────────────────────────────────────────────────────────

/// One skipped line and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line:   usize,
    pub reason: SkipReason,
}

/// Outcome of an import.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Records appended to the history.
    pub imported:        usize,
    /// Lines skipped (blank or invalid).
    pub skipped:         usize,
    /// Lines read, excluding the header.
    pub lines_processed: usize,
    /// Every skipped line, in source order.
    pub skipped_lines:   Vec<SkippedLine>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Import history records from the file at `path` into `ride`.
pub fn import_history(ride: &mut RideState, path: impl AsRef<Path>) -> HistoryResult<ImportReport> {
    let path = path.as_ref();
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        warn!("file path cannot be empty");
        return Err(HistoryError::EmptyPath);
    }
    info!("importing ride history from {}", path.display());

    let file = File::open(path).map_err(|source| {
        warn!("error importing {}: {source}", path.display());
        HistoryError::File { path: path.to_owned(), source }
    })?;
    import_history_reader(ride, BufReader::new(file))
}

/// Like [`import_history`] but accepts any `BufRead` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading from stdin.
pub fn import_history_reader<R: BufRead>(ride: &mut RideState, mut reader: R) -> HistoryResult<ImportReport> {
    let mut report = ImportReport::default();
    let mut staged: Vec<Visitor> = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = decode_line(&buf);
        line_no += 1;
        if line_no == 1 {
            debug!("skipped header line: {line}");
            continue;
        }
        report.lines_processed += 1;

        match parse_line(&line) {
            Ok(visitor) => {
                info!(
                    "line {line_no}: imported {} (ticket {})",
                    visitor.name(),
                    visitor.ticket_id()
                );
                staged.push(visitor);
            }
            Err(reason) => {
                warn!("line {line_no}: {reason}, skipped");
                report.skipped_lines.push(SkippedLine { line: line_no, reason });
            }
        }
    }

    report.imported = staged.len();
    report.skipped = report.skipped_lines.len();
    ride.extend_history_unchecked(staged);

    info!(
        "import completed: {} lines processed, {} imported, {} skipped, history size now {}",
        report.lines_processed,
        report.imported,
        report.skipped,
        ride.history_size()
    );
    Ok(report)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Strip the line terminator (`\n` or `\r\n`) and decode lossily.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// Split on the delimiter, dropping trailing empty fields, then trim each.
///
/// `a,b,c,d,e,` therefore has 5 fields and `a,b,c,d,` has 4.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(DELIMITER as char).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields.into_iter().map(str::trim).collect()
}

fn parse_line(line: &str) -> Result<Visitor, SkipReason> {
    let line = line.trim();
    if line.is_empty() {
        return Err(SkipReason::Blank);
    }

    let fields = split_fields(line);
    if fields.len() != FIELD_COUNT {
        return Err(SkipReason::FieldCount { found: fields.len() });
    }
    let (name, age, contact, ticket_id, visit_date) =
        (fields[0], fields[1], fields[2], fields[3], fields[4]);

    if parse_visit_date(visit_date).is_none() {
        return Err(SkipReason::InvalidDate(visit_date.to_owned()));
    }
    if name.is_empty() {
        return Err(SkipReason::MissingField("Name"));
    }
    if ticket_id.is_empty() {
        return Err(SkipReason::MissingField("TicketId"));
    }

    let age = parse_age(age)?;
    Ok(Visitor::new(name, age, contact, ticket_id, visit_date))
}

/// Ages are 32-bit signed on the wire; anything past `i32::MAX` is invalid.
fn parse_age(s: &str) -> Result<u32, SkipReason> {
    let n: i32 = s.parse().map_err(|_| SkipReason::InvalidAge(s.to_owned()))?;
    u32::try_from(n).map_err(|_| SkipReason::NegativeAge(n))
}
