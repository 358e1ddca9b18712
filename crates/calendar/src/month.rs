//! Grouping a date sequence by calendar month.

use chrono::{Datelike, NaiveDate};

/// Consecutive dates sharing a calendar year and month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    /// Calendar year.
    pub year: i32,
    /// Month (1..=12).
    pub month: u32,
    /// Dates in the month, in input order.
    pub dates: Vec<NaiveDate>,
}

impl MonthGroup {
    /// Returns the `YYYY-MM` key for this group.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Groups dates by `(year, month)`, sorted chronologically by month.
///
/// Dates inside each group keep their input order.
pub fn month_groups(dates: &[NaiveDate]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for &date in dates {
        let (year, month) = (date.year(), date.month());
        match groups
            .iter_mut()
            .find(|g| g.year == year && g.month == month)
        {
            Some(group) => group.dates.push(date),
            None => groups.push(MonthGroup {
                year,
                month,
                dates: vec![date],
            }),
        }
    }
    groups.sort_by_key(|g| (g.year, g.month));
    groups
}
