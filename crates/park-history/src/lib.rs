//! `park-history` — ride history export and import.
//!
//! # File format
//!
//! ```text
//! Name,Age,ContactNumber,TicketId,VisitDate
//! Olivia Martinez,24,555-5555,TICKET023,2025-11-25
//! Liam Anderson,31,555-6666,TICKET024,2025-11-25
//! ```
//!
//! Fields are joined with a bare comma.  Nothing is quoted or escaped, so a
//! value containing a comma cannot survive a round trip; the importer will
//! see the wrong field count and skip that line.  Files are UTF-8.
//!
//! Exports are named `{ride}_RideHistory_{YYYY-MM-DD}.txt`, where every
//! character of the ride name outside `[A-Za-z0-9_]` becomes `_`.  A second
//! export of the same ride on the same day overwrites the first.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`format`]   | Header, field count, file naming                           |
//! | [`export`]   | `export_history`, `export_history_on`, `write_history`     |
//! | [`import`]   | `import_history`, `import_history_reader`, `ImportReport`  |
//! | [`error`]    | `HistoryError`, `HistoryResult<T>`, `SkipReason`           |
//!
//! # Usage
//!
//! ```rust,ignore
//! ride.sort_history()?;
//! let path = park_history::export_history(&ride, Path::new("."))?;
//!
//! let mut fresh = RideState::new("Merry-Go-Round", 8, None);
//! let report = park_history::import_history(&mut fresh, &path)?;
//! println!("imported {} / skipped {}", report.imported, report.skipped);
//! ```

pub mod error;
pub mod export;
pub mod format;
pub mod import;


pub use error::{HistoryError, HistoryResult, SkipReason};
pub use export::{export_history, export_history_on, write_history};
pub use format::{FIELD_COUNT, HEADER, history_file_name, sanitize_ride_name};
pub use import::{ImportReport, SkippedLine, import_history, import_history_reader};
