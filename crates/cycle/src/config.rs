//! Scheduling parameters for one school year.

use chrono::NaiveDate;

use crate::day_type::OffDayBehavior;
use crate::error::CycleError;

/// Immutable scheduling parameters for one school year.
///
/// Use the builder methods to customise parameters, then call
/// [`validate`](Self::validate) (the mapper does this itself).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use cyclecal_cycle::{CycleConfig, OffDayBehavior};
///
/// let config = CycleConfig::new(
///     NaiveDate::from_ymd_opt(2024, 9, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 27).unwrap(),
/// )
/// .with_cycle_length(4)
/// .with_first_cycle_day(2)
/// .with_off_day_behavior(OffDayBehavior::Skip);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleConfig {
    /// First date of the school year.
    start: NaiveDate,
    /// Last date of the school year, inclusive.
    end: NaiveDate,
    /// Number of days in the rotation.
    cycle_length: u16,
    /// Teaching periods per day.
    periods_per_day: u16,
    /// Cycle day assigned to the first teaching day.
    first_cycle_day: u16,
    /// What holidays and PD days do to the rotation.
    off_day_behavior: OffDayBehavior,
    rooms: Vec<String>,
    classes: Vec<String>,
}

impl CycleConfig {
    /// Creates a configuration spanning `start..=end`.
    ///
    /// Defaults: `cycle_length = 6`, `periods_per_day = 8`,
    /// `first_cycle_day = 1`, `off_day_behavior = Pause`, no rooms or classes.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            cycle_length: 6,
            periods_per_day: 8,
            first_cycle_day: 1,
            off_day_behavior: OffDayBehavior::Pause,
            rooms: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Sets the number of days in the rotation.
    pub fn with_cycle_length(mut self, cycle_length: u16) -> Self {
        self.cycle_length = cycle_length;
        self
    }

    /// Sets the number of teaching periods per day.
    pub fn with_periods_per_day(mut self, periods_per_day: u16) -> Self {
        self.periods_per_day = periods_per_day;
        self
    }

    /// Sets the cycle day of the first teaching day.
    pub fn with_first_cycle_day(mut self, first_cycle_day: u16) -> Self {
        self.first_cycle_day = first_cycle_day;
        self
    }

    /// Sets the off-day policy.
    pub fn with_off_day_behavior(mut self, behavior: OffDayBehavior) -> Self {
        self.off_day_behavior = behavior;
        self
    }

    /// Sets the room names. Blank names are dropped and duplicates collapse
    /// to their first occurrence.
    pub fn with_rooms<I, S>(mut self, rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rooms = unique_names(rooms);
        self
    }

    /// Sets the class names. Blank names are dropped and duplicates collapse
    /// to their first occurrence.
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = unique_names(classes);
        self
    }

    /// Returns the first date.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last date (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the cycle length.
    pub fn cycle_length(&self) -> u16 {
        self.cycle_length
    }

    /// Returns the periods per day.
    pub fn periods_per_day(&self) -> u16 {
        self.periods_per_day
    }

    /// Returns the first cycle day.
    pub fn first_cycle_day(&self) -> u16 {
        self.first_cycle_day
    }

    /// Returns the off-day policy.
    pub fn off_day_behavior(&self) -> OffDayBehavior {
        self.off_day_behavior
    }

    /// Returns the configured room names.
    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }

    /// Returns the configured class names.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: cycle length of zero, periods per day
    /// of zero, first cycle day outside `1..=cycle_length`, or start after end.
    pub fn validate(&self) -> Result<(), CycleError> {
        if self.cycle_length < 1 {
            return Err(CycleError::InvalidCycleLength {
                cycle_length: self.cycle_length,
            });
        }
        if self.periods_per_day < 1 {
            return Err(CycleError::InvalidPeriodsPerDay {
                periods_per_day: self.periods_per_day,
            });
        }
        if !(1..=self.cycle_length).contains(&self.first_cycle_day) {
            return Err(CycleError::InvalidFirstCycleDay {
                first_cycle_day: self.first_cycle_day,
                cycle_length: self.cycle_length,
            });
        }
        if self.start > self.end {
            return Err(CycleError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

fn unique_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let name = name.into().trim().to_string();
        if !name.is_empty() && !out.contains(&name) {
            out.push(name);
        }
    }
    out
}
