//! Error types for the cyclecal-calendar crate.

/// Error type for all fallible operations in the cyclecal-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date: {input:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The string that failed to parse.
        input: String,
    },
}
