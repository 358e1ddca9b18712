//! Teaching periods.

use std::collections::HashSet;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Largest number of default periods: 08:00 + 15 hours still starts before midnight.
pub const MAX_DEFAULT_PERIODS: u16 = 16;

const DEFAULT_FIRST_HOUR: u32 = 8;
const DEFAULT_LENGTH_MINUTES: u32 = 50;

/// One teaching slot in a day.
///
/// List order is display order; times are not used for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    id: String,
    name: String,
    #[serde(with = "hhmm")]
    start_time: NaiveTime,
    #[serde(with = "hhmm")]
    end_time: NaiveTime,
}

impl Period {
    /// Creates a period from `HH:mm` start and end strings.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidTime`] if either time fails to parse.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_time: &str,
        end_time: &str,
    ) -> Result<Self, ExportError> {
        Ok(Self::from_times(
            id,
            name,
            hhmm::parse(start_time)?,
            hhmm::parse(end_time)?,
        ))
    }

    /// Creates a period from already-parsed times.
    pub fn from_times(
        id: impl Into<String>,
        name: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_time,
            end_time,
        }
    }

    /// Returns the period id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the start time.
    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    /// Returns the end time.
    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }
}

/// Generates `n` placeholder periods: `p1`/"Period 1" at 08:00–08:50,
/// `p2`/"Period 2" at 09:00–09:50, and so on.
///
/// # Errors
///
/// Returns [`ExportError::TooManyDefaultPeriods`] if `n` exceeds
/// [`MAX_DEFAULT_PERIODS`].
pub fn default_periods(n: u16) -> Result<Vec<Period>, ExportError> {
    if n > MAX_DEFAULT_PERIODS {
        return Err(ExportError::TooManyDefaultPeriods {
            requested: n,
            max: MAX_DEFAULT_PERIODS,
        });
    }
    (1..=u32::from(n))
        .map(|i| {
            let hour = DEFAULT_FIRST_HOUR + i - 1;
            let start = NaiveTime::from_hms_opt(hour, 0, 0);
            let end = NaiveTime::from_hms_opt(hour, DEFAULT_LENGTH_MINUTES, 0);
            match (start, end) {
                (Some(start), Some(end)) => {
                    Ok(Period::from_times(format!("p{i}"), format!("Period {i}"), start, end))
                }
                _ => Err(ExportError::TooManyDefaultPeriods {
                    requested: n,
                    max: MAX_DEFAULT_PERIODS,
                }),
            }
        })
        .collect()
}

/// Checks that period ids are unique.
///
/// # Errors
///
/// Returns [`ExportError::DuplicatePeriodId`] naming the first repeated id.
pub fn validate_periods(periods: &[Period]) -> Result<(), ExportError> {
    let mut seen = HashSet::with_capacity(periods.len());
    for p in periods {
        if !seen.insert(p.id()) {
            return Err(ExportError::DuplicatePeriodId { id: p.id.clone() });
        }
    }
    Ok(())
}

/// `HH:mm` parsing, formatting and serde glue.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::error::ExportError;

    const FORMAT: &str = "%H:%M";

    pub fn parse(s: &str) -> Result<NaiveTime, ExportError> {
        NaiveTime::parse_from_str(s.trim(), FORMAT).map_err(|_| ExportError::InvalidTime {
            input: s.to_string(),
        })
    }

    pub fn format(t: NaiveTime) -> String {
        t.format(FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(t: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}
