//! Error types for cyclecal-export.

/// Error type for all fallible operations in the cyclecal-export crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    /// A period time that is not `HH:mm`.
    #[error("invalid time: {input:?} (expected HH:mm)")]
    InvalidTime {
        /// The string that failed to parse.
        input: String,
    },

    /// Two periods share an id.
    #[error("duplicate period id: {id:?}")]
    DuplicatePeriodId {
        /// The repeated id.
        id: String,
    },

    /// Default periods would run past midnight.
    #[error("cannot generate {requested} default periods (max {max})")]
    TooManyDefaultPeriods {
        /// Periods requested.
        requested: u16,
        /// Largest count that fits in one day.
        max: u16,
    },

    /// Grid entry keyed by a cycle day outside the rotation.
    #[error("grid cycle day {cycle_day} outside 1..={cycle_length}")]
    CycleDayOutOfRange {
        /// The offending key.
        cycle_day: u16,
        /// The configured cycle length.
        cycle_length: u16,
    },

    /// Grid entry keyed by a period id that is not configured.
    #[error("grid cycle day {cycle_day} references unknown period {period_id:?}")]
    UnknownPeriod {
        /// Cycle day of the entry.
        cycle_day: u16,
        /// The unknown period id.
        period_id: String,
    },

    /// The CSV writer failed.
    #[error("failed to write CSV: {message}")]
    Csv {
        /// Writer error message.
        message: String,
    },
}
