//! History export.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::{info, warn};

use park_ride::RideState;

use crate::format::{DELIMITER, HEADER, history_file_name};
use crate::{HistoryError, HistoryResult};

/// Export the ride's history into `dir`, named after the ride and today's
/// local date.  Returns the path of the written file.
///
/// Fails with [`HistoryError::EmptyHistory`] before touching the file
/// system if there is nothing to export.
pub fn export_history(ride: &RideState, dir: &Path) -> HistoryResult<PathBuf> {
    export_history_on(ride, dir, Local::now().date_naive())
}

/// Like [`export_history`] with an explicit date for the file name.
pub fn export_history_on(ride: &RideState, dir: &Path, date: NaiveDate) -> HistoryResult<PathBuf> {
    info!("exporting ride history for {}", ride.name());
    ensure_not_empty(ride)?;

    let path = dir.join(history_file_name(ride.name(), date));
    let file = File::create(&path).map_err(|source| HistoryError::File { path: path.clone(), source })?;
    let rows = write_history(ride, file)?;

    info!("exported {rows} visitors to {}", path.display());
    Ok(path)
}

/// Write the header and one line per history record to `writer`, in the
/// current history order.  Returns the number of records written.
///
/// Values are written verbatim: no quoting, no escaping.
pub fn write_history<W: Write>(ride: &RideState, writer: W) -> HistoryResult<usize> {
    ensure_not_empty(ride)?;

    let mut out = WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(writer);

    out.write_record(HEADER)?;
    for v in ride.history() {
        let age = v.age().to_string();
        out.write_record([
            v.name(),
            age.as_str(),
            v.contact(),
            v.ticket_id(),
            v.visit_date(),
        ])?;
    }
    out.flush()?;
    Ok(ride.history_size())
}

fn ensure_not_empty(ride: &RideState) -> HistoryResult<()> {
    if ride.history_size() == 0 {
        warn!("cannot export empty ride history for {}", ride.name());
        return Err(HistoryError::EmptyHistory { ride: ride.name().to_owned() });
    }
    Ok(())
}
