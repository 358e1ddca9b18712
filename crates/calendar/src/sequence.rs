//! Inclusive calendar-day range generation.

use chrono::NaiveDate;

/// Lazy iterator over every calendar date from `start` through `end`,
/// inclusive, one day at a time.
///
/// Yields nothing if `start > end`.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range over `start..=end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|d| *d <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.next.map_or(0, |d| day_count(d, self.end));
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}

/// Generates every calendar date from `start` through `end`, inclusive.
///
/// The result is strictly increasing and contiguous. If `start > end` the
/// result is empty.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use cyclecal_calendar::date_range;
///
/// let start = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let dates = date_range(start, end);
/// assert_eq!(dates.len(), 4);
/// // Dec 30, Dec 31, Jan 1 (2024), Jan 2 (2024)
/// ```
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    DateRange::new(start, end).collect()
}

/// Number of calendar days in `start..=end`, or 0 if `start > end`.
pub fn day_count(start: NaiveDate, end: NaiveDate) -> usize {
    let days = (end - start).num_days();
    if days < 0 { 0 } else { days as usize + 1 }
}
