//! Calendar-import CSV serialization.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use cyclecal_cycle::DateMapping;

use crate::error::ExportError;
use crate::grid::ScheduleGrid;
use crate::period::{Period, hhmm};
use crate::project::{ExportRow, project_rows};

/// Column names, in order, of the generic calendar-import schema.
pub const HEADER: [&str; 7] = [
    "Subject",
    "Start Date",
    "Start Time",
    "End Date",
    "End Time",
    "Description",
    "Location",
];

/// Serializes rows as CSV: the bare header line, then one line per row.
///
/// Every data field is wrapped in double quotes with embedded quotes
/// doubled. Lines are joined with `\n`; there is no trailing newline.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if the underlying writer fails.
pub fn to_csv(rows: &[ExportRow]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        let date = row.date.format("%Y-%m-%d").to_string();
        let start = hhmm::format(row.start_time);
        let end = hhmm::format(row.end_time);
        writer
            .write_record([
                row.subject.as_str(),
                date.as_str(),
                start.as_str(),
                date.as_str(),
                end.as_str(),
                row.description.as_str(),
                row.location.as_str(),
            ])
            .map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv_error(e.into_error().into()))?;
    let body = String::from_utf8(bytes).map_err(|e| ExportError::Csv {
        message: e.to_string(),
    })?;

    let mut out = HEADER.join(",");
    if let Some(body) = body.strip_suffix('\n') {
        out.push('\n');
        out.push_str(body);
    }
    Ok(out)
}

/// Projects and serializes in one step.
///
/// # Errors
///
/// See [`to_csv`].
pub fn export_csv(
    mappings: &[DateMapping],
    grid: &ScheduleGrid,
    periods: &[Period],
) -> Result<String, ExportError> {
    let rows = project_rows(mappings, grid, periods);
    tracing::debug!(n_rows = rows.len(), "export rows projected");
    to_csv(&rows)
}

fn csv_error(e: csv::Error) -> ExportError {
    ExportError::Csv {
        message: e.to_string(),
    }
}
