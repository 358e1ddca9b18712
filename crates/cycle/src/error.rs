//! Error types for cyclecal-cycle.

use chrono::NaiveDate;

use crate::day_type::DayType;

/// Error type for all fallible operations in the cyclecal-cycle crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CycleError {
    /// Cycle length of zero; the rotation would have no slots.
    #[error("invalid configuration: cycle length must be at least 1, got {cycle_length}")]
    InvalidCycleLength {
        /// The cycle length that was provided.
        cycle_length: u16,
    },

    /// Periods per day of zero.
    #[error("invalid configuration: periods per day must be at least 1, got {periods_per_day}")]
    InvalidPeriodsPerDay {
        /// The periods-per-day value that was provided.
        periods_per_day: u16,
    },

    /// First cycle day outside `1..=cycle_length`.
    #[error(
        "invalid configuration: first cycle day {first_cycle_day} outside 1..={cycle_length}"
    )]
    InvalidFirstCycleDay {
        /// The first cycle day that was provided.
        first_cycle_day: u16,
        /// The configured cycle length.
        cycle_length: u16,
    },

    /// Start date after end date.
    #[error("invalid configuration: start date {start} is after end date {end}")]
    InvalidDateRange {
        /// Configured first date.
        start: NaiveDate,
        /// Configured last date.
        end: NaiveDate,
    },

    /// Override target not present in the mapped range.
    #[error("date {date} is outside the mapped range")]
    DateNotInRange {
        /// The requested date.
        date: NaiveDate,
    },

    /// Override target has no cycle day to replace.
    #[error("date {date} is a {day_type} and carries no cycle day")]
    NotTeachingDay {
        /// The requested date.
        date: NaiveDate,
        /// The resolved type of that date.
        day_type: DayType,
    },

    /// Override value outside `1..=cycle_length`.
    #[error("cycle day {cycle_day} outside 1..={cycle_length}")]
    InvalidCycleDay {
        /// The requested cycle day.
        cycle_day: u16,
        /// The configured cycle length.
        cycle_length: u16,
    },
}

impl CycleError {
    /// Returns `true` for errors caused by an invalid [`CycleConfig`](crate::CycleConfig).
    pub fn is_invalid_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidCycleLength { .. }
                | Self::InvalidPeriodsPerDay { .. }
                | Self::InvalidFirstCycleDay { .. }
                | Self::InvalidDateRange { .. }
        )
    }
}
