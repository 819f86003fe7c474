//! Shared constants and file naming.

use chrono::NaiveDate;

use park_core::format_visit_date;

/// Header row written first by every export.  Imports skip line 1 without
/// looking at it.
pub const HEADER: [&str; FIELD_COUNT] = ["Name", "Age", "ContactNumber", "TicketId", "VisitDate"];

/// Fields per record.
pub const FIELD_COUNT: usize = 5;

pub(crate) const DELIMITER: u8 = b',';

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
pub fn sanitize_ride_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// `{sanitized ride}_RideHistory_{YYYY-MM-DD}.txt`
pub fn history_file_name(ride_name: &str, date: NaiveDate) -> String {
    format!("{}_RideHistory_{}.txt", sanitize_ride_name(ride_name), format_visit_date(date))
}
