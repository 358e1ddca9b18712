//! The cycle mapper: a fold over the date range with one counter register.

use chrono::NaiveDate;
use tracing::{debug, trace};

use cyclecal_calendar::{DateRange, is_weekend};

use crate::config::CycleConfig;
use crate::day_type::DayType;
use crate::error::CycleError;
use crate::exception::ExceptionSet;
use crate::mapping::DateMapping;

/// Classifies a single date.
///
/// Weekends always win; otherwise an exception for the date applies;
/// otherwise the date is a school day.
pub fn classify(date: NaiveDate, exceptions: &ExceptionSet) -> DayType {
    if is_weekend(date) {
        if let Some(e) = exceptions.get(date) {
            debug!(%date, kind = ?e.kind, "exception on weekend is inert");
        }
        return DayType::Weekend;
    }
    exceptions
        .get(date)
        .map_or(DayType::SchoolDay, |e| e.kind.into())
}

/// Advances a cycle counter, wrapping from `cycle_length` back to 1.
///
/// A zero `cycle_length` restarts at 1; [`map_cycle_days`] rejects it before
/// any counter moves.
pub(crate) fn next_cycle_day(current: u16, cycle_length: u16) -> u16 {
    current.checked_rem(cycle_length).map_or(1, |r| r + 1)
}

/// Resolves every date in the configured range to a [`DateMapping`].
///
/// The counter starts at the configured first cycle day. School and exam
/// days take the current value and advance it. Weekends never advance it.
/// Holidays and PD days advance it only under
/// [`OffDayBehavior::Skip`](crate::OffDayBehavior::Skip).
///
/// The result has one entry per calendar day, in date order, inclusive of
/// both endpoints.
///
/// # Errors
///
/// Returns a [`CycleError`] configuration variant if `config` fails
/// [`CycleConfig::validate`].
#[tracing::instrument(
    skip_all,
    fields(
        start = %config.start(),
        end = %config.end(),
        cycle_length = config.cycle_length(),
        behavior = ?config.off_day_behavior(),
    )
)]
pub fn map_cycle_days(
    config: &CycleConfig,
    exceptions: &ExceptionSet,
) -> Result<Vec<DateMapping>, CycleError> {
    config.validate()?;

    let cycle_length = config.cycle_length();
    let behavior = config.off_day_behavior();

    let mappings: Vec<DateMapping> = DateRange::new(config.start(), config.end())
        .scan(config.first_cycle_day(), |counter, date| {
            let day_type = classify(date, exceptions);
            let mapping = DateMapping::resolve(date, day_type, *counter);
            if day_type.advances_counter(behavior) {
                *counter = next_cycle_day(*counter, cycle_length);
            }
            trace!(%date, ?day_type, cycle_day = ?mapping.cycle_day(), next = *counter, "mapped");
            Some(mapping)
        })
        .collect();

    debug!(
        n_dates = mappings.len(),
        n_teaching = mappings.iter().filter(|m| m.is_teaching()).count(),
        "cycle days resolved"
    );
    Ok(mappings)
}
