//! Day classification and off-day policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolved classification of one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    /// Ordinary teaching day.
    SchoolDay,
    /// School closed.
    Holiday,
    /// Professional-development day; no classes.
    PdDay,
    /// Exam day. Occupies a cycle slot like a school day.
    ExamDay,
    /// Saturday or Sunday.
    Weekend,
}

impl DayType {
    /// All variants, in display order.
    pub const ALL: [DayType; 5] = [
        DayType::SchoolDay,
        DayType::Holiday,
        DayType::PdDay,
        DayType::ExamDay,
        DayType::Weekend,
    ];

    /// Returns `true` if dates of this type carry a cycle-day number.
    pub fn is_teaching(self) -> bool {
        matches!(self, Self::SchoolDay | Self::ExamDay)
    }

    /// Returns `true` if a date of this type advances the cycle counter
    /// under the given off-day policy.
    pub fn advances_counter(self, behavior: OffDayBehavior) -> bool {
        match self {
            Self::SchoolDay | Self::ExamDay => true,
            Self::Holiday | Self::PdDay => behavior == OffDayBehavior::Skip,
            Self::Weekend => false,
        }
    }

    /// Upper-case label with spaces, e.g. `PD DAY`.
    pub fn label(self) -> &'static str {
        match self {
            Self::SchoolDay => "SCHOOL DAY",
            Self::Holiday => "HOLIDAY",
            Self::PdDay => "PD DAY",
            Self::ExamDay => "EXAM DAY",
            Self::Weekend => "WEEKEND",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SchoolDay => "SCHOOL_DAY",
            Self::Holiday => "HOLIDAY",
            Self::PdDay => "PD_DAY",
            Self::ExamDay => "EXAM_DAY",
            Self::Weekend => "WEEKEND",
        };
        f.write_str(s)
    }
}

/// How holidays and PD days affect the rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OffDayBehavior {
    /// The off day silently consumes a cycle slot.
    Skip,
    /// The cycle holds; the next school day picks up where it left off.
    #[default]
    Pause,
}
