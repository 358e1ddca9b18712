//! Projection of the grid onto resolved dates.

use chrono::{NaiveDate, NaiveTime};

use cyclecal_cycle::{DateMapping, DayType};

use crate::grid::ScheduleGrid;
use crate::period::Period;

/// One calendar event: a scheduled period on a specific date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    /// Class name annotated with the cycle day, e.g. `Math 10 (Day 3)`.
    pub subject: String,
    /// Event date; events never span midnight, so this is also the end date.
    pub date: NaiveDate,
    /// Period start.
    pub start_time: NaiveTime,
    /// Period end.
    pub end_time: NaiveTime,
    /// e.g. `Cycle Day: 3, Period: Period 2`.
    pub description: String,
    /// Room, or empty.
    pub location: String,
}

/// Flattens teaching dates × periods into export rows.
///
/// A row is produced for each `(date, period)` where the date is not a
/// weekend, has a cycle day, and the grid holds a non-blank class for that
/// cycle day and period. Rows are ordered by date, then by `periods` order.
pub fn project_rows(
    mappings: &[DateMapping],
    grid: &ScheduleGrid,
    periods: &[Period],
) -> Vec<ExportRow> {
    mappings
        .iter()
        .filter(|m| m.day_type() != DayType::Weekend)
        .filter_map(|m| m.cycle_day().map(|cycle_day| (m.date(), cycle_day)))
        .flat_map(|(date, cycle_day)| {
            periods.iter().filter_map(move |period| {
                let assignment = grid.class_at(cycle_day, period.id())?;
                Some(ExportRow {
                    subject: format!("{} (Day {cycle_day})", assignment.class_name.trim()),
                    date,
                    start_time: period.start_time(),
                    end_time: period.end_time(),
                    description: format!("Cycle Day: {cycle_day}, Period: {}", period.name()),
                    location: assignment.room().unwrap_or_default().to_string(),
                })
            })
        })
        .collect()
}
