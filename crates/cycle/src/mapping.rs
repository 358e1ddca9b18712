//! Resolved schedule state for one calendar date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::day_type::DayType;

/// Resolved classification and cycle position for one calendar date.
///
/// A cycle day is present exactly when the day type is
/// [`DayType::SchoolDay`] or [`DayType::ExamDay`]; the constructor is
/// crate-private so that pairing always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateMapping {
    date: NaiveDate,
    cycle_day: Option<u16>,
    #[serde(rename = "type")]
    day_type: DayType,
}

impl DateMapping {
    /// Builds a mapping, attaching `counter` only for teaching days.
    pub(crate) fn resolve(date: NaiveDate, day_type: DayType, counter: u16) -> Self {
        Self {
            date,
            cycle_day: day_type.is_teaching().then_some(counter),
            day_type,
        }
    }

    /// Replaces the cycle day of a teaching date. Callers check the type.
    pub(crate) fn set_cycle_day(&mut self, cycle_day: u16) {
        debug_assert!(self.day_type.is_teaching());
        self.cycle_day = Some(cycle_day);
    }

    /// Returns the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the cycle day, or `None` for non-teaching dates.
    pub fn cycle_day(&self) -> Option<u16> {
        self.cycle_day
    }

    /// Returns the resolved day type.
    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    /// Returns `true` if this date carries a cycle day.
    pub fn is_teaching(&self) -> bool {
        self.cycle_day.is_some()
    }
}
