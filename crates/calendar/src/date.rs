//! ISO calendar-day parsing and weekday classification.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// Surrounding whitespace is ignored. Any time-of-day suffix is rejected.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the string is not a valid
/// proleptic Gregorian date in ISO 8601 form.
pub fn parse_date(s: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(s.trim(), ISO_FORMAT).map_err(|_| CalendarError::InvalidDate {
        input: s.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Returns `true` if the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
