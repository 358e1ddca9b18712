//! Day-type exceptions and the per-date exception set.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::day_type::DayType;

/// The classification an exception imposes on a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExceptionKind {
    /// School closed.
    Holiday,
    /// Professional-development day.
    PdDay,
    /// Exam day.
    ExamDay,
}

impl From<ExceptionKind> for DayType {
    fn from(kind: ExceptionKind) -> Self {
        match kind {
            ExceptionKind::Holiday => DayType::Holiday,
            ExceptionKind::PdDay => DayType::PdDay,
            ExceptionKind::ExamDay => DayType::ExamDay,
        }
    }
}

/// An override of one date's default classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayException {
    /// The affected date.
    pub date: NaiveDate,
    /// The classification to apply.
    #[serde(rename = "type")]
    pub kind: ExceptionKind,
    /// Optional free-text label, e.g. "Winter break".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DayException {
    /// Creates an unlabelled exception.
    pub fn new(date: NaiveDate, kind: ExceptionKind) -> Self {
        Self {
            date,
            kind,
            label: None,
        }
    }

    /// Attaches a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// At most one [`DayException`] per date.
///
/// When built from a list containing several exceptions for the same date,
/// the first one wins and the rest are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionSet {
    by_date: BTreeMap<NaiveDate, DayException>,
}

impl ExceptionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an exception unless one already exists for its date.
    ///
    /// Returns `false` (and leaves the set unchanged) on a duplicate date.
    pub fn insert(&mut self, exception: DayException) -> bool {
        match self.by_date.entry(exception.date) {
            Entry::Vacant(slot) => {
                slot.insert(exception);
                true
            }
            Entry::Occupied(existing) => {
                warn!(
                    date = %exception.date,
                    kept = ?existing.get().kind,
                    dropped = ?exception.kind,
                    "duplicate exception ignored"
                );
                false
            }
        }
    }

    /// Toggles an exception on `date`.
    ///
    /// Adds one if absent, removes it if it already has `kind`, and
    /// otherwise replaces its kind (keeping any label).
    pub fn toggle(&mut self, date: NaiveDate, kind: ExceptionKind) {
        match self.by_date.entry(date) {
            Entry::Vacant(slot) => {
                slot.insert(DayException::new(date, kind));
            }
            Entry::Occupied(mut existing) => {
                if existing.get().kind == kind {
                    existing.remove();
                } else {
                    existing.get_mut().kind = kind;
                }
            }
        }
    }

    /// Removes any exception on `date`, returning it.
    pub fn clear(&mut self, date: NaiveDate) -> Option<DayException> {
        self.by_date.remove(&date)
    }

    /// Returns the exception recorded for `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&DayException> {
        self.by_date.get(&date)
    }

    /// Number of dates with an exception.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Returns `true` if no exceptions are recorded.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Iterates exceptions in date order.
    pub fn iter(&self) -> impl Iterator<Item = &DayException> {
        self.by_date.values()
    }
}

impl FromIterator<DayException> for ExceptionSet {
    fn from_iter<I: IntoIterator<Item = DayException>>(iter: I) -> Self {
        let mut set = Self::new();
        for exception in iter {
            set.insert(exception);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_duplicate_wins() {
        let d = ymd(2024, 1, 3);
        let set: ExceptionSet = [
            DayException::new(d, ExceptionKind::Holiday),
            DayException::new(d, ExceptionKind::ExamDay),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(d).unwrap().kind, ExceptionKind::Holiday);
    }

    #[test]
    fn insert_reports_duplicates() {
        let d = ymd(2024, 1, 3);
        let mut set = ExceptionSet::new();
        assert!(set.insert(DayException::new(d, ExceptionKind::PdDay)));
        assert!(!set.insert(DayException::new(d, ExceptionKind::Holiday)));
        assert_eq!(set.get(d).unwrap().kind, ExceptionKind::PdDay);
    }

    #[test]
    fn toggle_adds_replaces_and_removes() {
        let d = ymd(2024, 2, 14);
        let mut set = ExceptionSet::new();

        set.toggle(d, ExceptionKind::Holiday);
        assert_eq!(set.get(d).unwrap().kind, ExceptionKind::Holiday);

        set.toggle(d, ExceptionKind::PdDay);
        assert_eq!(set.get(d).unwrap().kind, ExceptionKind::PdDay);
        assert_eq!(set.len(), 1);

        set.toggle(d, ExceptionKind::PdDay);
        assert!(set.get(d).is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_keeps_label() {
        let d = ymd(2024, 12, 23);
        let mut set: ExceptionSet = [DayException::new(d, ExceptionKind::Holiday).with_label("Break")]
            .into_iter()
            .collect();
        set.toggle(d, ExceptionKind::ExamDay);
        assert_eq!(set.get(d).unwrap().label.as_deref(), Some("Break"));
    }

    #[test]
    fn clear_removes() {
        let d = ymd(2024, 3, 1);
        let mut set: ExceptionSet = [DayException::new(d, ExceptionKind::ExamDay)]
            .into_iter()
            .collect();
        assert!(set.clear(d).is_some());
        assert!(set.clear(d).is_none());
    }

    #[test]
    fn iter_in_date_order() {
        let set: ExceptionSet = [
            DayException::new(ymd(2024, 5, 1), ExceptionKind::Holiday),
            DayException::new(ymd(2024, 1, 1), ExceptionKind::Holiday),
        ]
        .into_iter()
        .collect();
        let dates: Vec<_> = set.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![ymd(2024, 1, 1), ymd(2024, 5, 1)]);
    }

    #[test]
    fn kind_to_day_type() {
        assert_eq!(DayType::from(ExceptionKind::Holiday), DayType::Holiday);
        assert_eq!(DayType::from(ExceptionKind::PdDay), DayType::PdDay);
        assert_eq!(DayType::from(ExceptionKind::ExamDay), DayType::ExamDay);
    }

    #[test]
    fn serde_shape() {
        let e = DayException::new(ymd(2024, 1, 3), ExceptionKind::PdDay);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-03","type":"PD_DAY"}"#);
    }
}
