//! Manual cycle-day corrections applied after mapping.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::CycleError;
use crate::mapping::DateMapping;

/// Sets the cycle day of one teaching date in an already-mapped sequence.
///
/// Only the targeted date changes; later dates are not re-flowed.
///
/// # Errors
///
/// - [`CycleError::InvalidCycleDay`] if `cycle_day` is outside `1..=cycle_length`.
/// - [`CycleError::DateNotInRange`] if no mapping exists for `date`.
/// - [`CycleError::NotTeachingDay`] if the date is not a school or exam day.
pub fn override_cycle_day(
    mappings: &mut [DateMapping],
    date: NaiveDate,
    cycle_day: u16,
    cycle_length: u16,
) -> Result<(), CycleError> {
    if !(1..=cycle_length).contains(&cycle_day) {
        return Err(CycleError::InvalidCycleDay {
            cycle_day,
            cycle_length,
        });
    }
    let idx = mappings
        .binary_search_by_key(&date, DateMapping::date)
        .map_err(|_| CycleError::DateNotInRange { date })?;
    let mapping = &mut mappings[idx];
    if !mapping.day_type().is_teaching() {
        return Err(CycleError::NotTeachingDay {
            date,
            day_type: mapping.day_type(),
        });
    }
    debug!(%date, from = ?mapping.cycle_day(), to = cycle_day, "cycle day overridden");
    mapping.set_cycle_day(cycle_day);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CycleConfig;
    use crate::day_type::DayType;
    use crate::exception::ExceptionSet;
    use crate::mapper::map_cycle_days;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn week() -> Vec<DateMapping> {
        // Mon 2024-01-01 .. Sun 2024-01-07
        let cfg = CycleConfig::new(ymd(2024, 1, 1), ymd(2024, 1, 7));
        map_cycle_days(&cfg, &ExceptionSet::new()).unwrap()
    }

    #[test]
    fn overrides_single_date_only() {
        let mut m = week();
        override_cycle_day(&mut m, ymd(2024, 1, 2), 6, 6).unwrap();
        assert_eq!(m[1].cycle_day(), Some(6));
        assert_eq!(m[1].day_type(), DayType::SchoolDay);
        // Wednesday keeps its original value.
        assert_eq!(m[2].cycle_day(), Some(3));
    }

    #[test]
    fn rejects_weekend() {
        let mut m = week();
        let err = override_cycle_day(&mut m, ymd(2024, 1, 6), 1, 6).unwrap_err();
        assert_eq!(
            err,
            CycleError::NotTeachingDay {
                date: ymd(2024, 1, 6),
                day_type: DayType::Weekend
            }
        );
    }

    #[test]
    fn rejects_out_of_range_date() {
        let mut m = week();
        let err = override_cycle_day(&mut m, ymd(2024, 2, 1), 1, 6).unwrap_err();
        assert_eq!(err, CycleError::DateNotInRange { date: ymd(2024, 2, 1) });
    }

    #[test]
    fn rejects_out_of_range_cycle_day() {
        let mut m = week();
        for bad in [0, 7] {
            let err = override_cycle_day(&mut m, ymd(2024, 1, 1), bad, 6).unwrap_err();
            assert!(matches!(err, CycleError::InvalidCycleDay { .. }));
        }
        assert_eq!(m[0].cycle_day(), Some(1));
    }
}
