//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::warn;

use cyclecal_calendar::parse_date;
use cyclecal_cycle::{CycleConfig, DayException, ExceptionKind, ExceptionSet, OffDayBehavior};
use cyclecal_export::{ClassAssignment, Period, ScheduleGrid, default_periods, validate_periods};

use crate::config::*;

/// Parses an off-day policy name.
pub fn parse_off_day_behavior(s: &str) -> Result<OffDayBehavior> {
    match s.trim().to_lowercase().as_str() {
        "skip" => Ok(OffDayBehavior::Skip),
        "pause" => Ok(OffDayBehavior::Pause),
        other => bail!("unknown off-day behavior: {other:?} (expected \"skip\" or \"pause\")"),
    }
}

/// Parses an exception type name.
pub fn parse_exception_kind(s: &str) -> Result<ExceptionKind> {
    match s.trim().to_lowercase().replace('-', "_").as_str() {
        "holiday" => Ok(ExceptionKind::Holiday),
        "pd_day" | "pd" => Ok(ExceptionKind::PdDay),
        "exam_day" | "exam" => Ok(ExceptionKind::ExamDay),
        other => bail!("unknown exception type: {other:?}"),
    }
}

fn parse_named_date(s: &str, what: &str) -> Result<NaiveDate> {
    parse_date(s).with_context(|| format!("bad {what}"))
}

/// Builds a [`CycleConfig`] from the `[cycle]` table.
///
/// Range checks are left to [`CycleConfig::validate`].
pub fn build_cycle_config(cycle: &CycleToml) -> Result<CycleConfig> {
    let start = parse_named_date(&cycle.start_date, "cycle.start_date")?;
    let end = parse_named_date(&cycle.end_date, "cycle.end_date")?;
    let behavior = parse_off_day_behavior(&cycle.off_day_behavior)?;
    Ok(CycleConfig::new(start, end)
        .with_cycle_length(cycle.cycle_days)
        .with_periods_per_day(cycle.periods_per_day)
        .with_first_cycle_day(cycle.first_cycle_day)
        .with_off_day_behavior(behavior)
        .with_rooms(cycle.rooms.iter().cloned())
        .with_classes(cycle.classes.iter().cloned()))
}

/// Builds the exception set. The first entry for a date wins.
///
/// An entry with a bad date or an unknown type matches no date; it is
/// skipped with a warning.
pub fn build_exceptions(exceptions: &[ExceptionToml]) -> ExceptionSet {
    exceptions
        .iter()
        .enumerate()
        .filter_map(|(i, e)| match parse_exception(e) {
            Ok(exception) => Some(exception),
            Err(err) => {
                warn!(index = i, date = %e.date, error = %err, "skipping malformed exception");
                None
            }
        })
        .collect()
}

fn parse_exception(e: &ExceptionToml) -> Result<DayException> {
    let date = parse_date(&e.date)?;
    let kind = parse_exception_kind(&e.kind)?;
    let exception = DayException::new(date, kind);
    Ok(match &e.label {
        Some(label) => exception.with_label(label),
        None => exception,
    })
}

/// Builds the period list.
///
/// With no `[[periods]]`, `periods_per_day` default periods are generated.
/// Periods without an explicit id get `p{n}` by position.
pub fn build_periods(periods: &[PeriodToml], periods_per_day: u16) -> Result<Vec<Period>> {
    if periods.is_empty() {
        return default_periods(periods_per_day).context("generating default periods");
    }
    if periods.len() != usize::from(periods_per_day) {
        warn!(
            configured = periods.len(),
            periods_per_day, "period list length differs from periods_per_day"
        );
    }
    let built = periods
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let id = p.id.clone().unwrap_or_else(|| format!("p{}", i + 1));
            Period::new(id, &p.name, &p.start_time, &p.end_time)
                .with_context(|| format!("bad periods[{i}]"))
        })
        .collect::<Result<Vec<_>>>()?;
    validate_periods(&built)?;
    Ok(built)
}

/// Builds the schedule grid. A later entry for the same slot replaces an
/// earlier one.
pub fn build_grid(slots: &[SlotToml]) -> ScheduleGrid {
    let mut grid = ScheduleGrid::new();
    for slot in slots {
        let mut assignment = ClassAssignment::new(&slot.class);
        if let Some(room) = &slot.room {
            assignment = assignment.with_room(room);
        }
        if grid
            .assign(slot.cycle_day, &slot.period, assignment)
            .is_some()
        {
            warn!(
                cycle_day = slot.cycle_day,
                period = %slot.period,
                "grid slot assigned twice; keeping the later entry"
            );
        }
    }
    grid
}

/// Parses `[[overrides]]` into `(date, cycle_day)` pairs.
pub fn build_overrides(overrides: &[OverrideToml]) -> Result<Vec<(NaiveDate, u16)>> {
    overrides
        .iter()
        .enumerate()
        .map(|(i, o)| {
            let date = parse_named_date(&o.date, &format!("overrides[{i}].date"))?;
            Ok((date, o.cycle_day))
        })
        .collect()
}

/// Warns about grid classes or rooms missing from the configured lists.
///
/// An empty list disables the check for that kind of name.
pub fn check_grid_names(slots: &[SlotToml], config: &CycleConfig) {
    for slot in slots {
        let class = slot.class.trim();
        if !class.is_empty()
            && !config.classes().is_empty()
            && !config.classes().iter().any(|c| c == class)
        {
            warn!(class, cycle_day = slot.cycle_day, "grid class not in cycle.classes");
        }
        let room = slot.room.as_deref().map_or("", str::trim);
        if !room.is_empty()
            && !config.rooms().is_empty()
            && !config.rooms().iter().any(|r| r == room)
        {
            warn!(room, cycle_day = slot.cycle_day, "grid room not in cycle.rooms");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle_toml() -> CycleToml {
        CycleToml {
            cycle_days: 6,
            periods_per_day: 2,
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-12".to_string(),
            first_cycle_day: 1,
            off_day_behavior: "Skip".to_string(),
            rooms: vec!["101".to_string()],
            classes: vec!["Math 10".to_string(), "Math 10".to_string()],
        }
    }

    #[test]
    fn off_day_names() {
        assert_eq!(parse_off_day_behavior("SKIP").unwrap(), OffDayBehavior::Skip);
        assert_eq!(parse_off_day_behavior(" pause ").unwrap(), OffDayBehavior::Pause);
        assert!(parse_off_day_behavior("hold").is_err());
    }

    #[test]
    fn exception_names() {
        assert_eq!(parse_exception_kind("holiday").unwrap(), ExceptionKind::Holiday);
        assert_eq!(parse_exception_kind("PD_DAY").unwrap(), ExceptionKind::PdDay);
        assert_eq!(parse_exception_kind("pd-day").unwrap(), ExceptionKind::PdDay);
        assert_eq!(parse_exception_kind("exam").unwrap(), ExceptionKind::ExamDay);
        assert!(parse_exception_kind("school_day").is_err());
        assert!(parse_exception_kind("weekend").is_err());
    }

    #[test]
    fn cycle_config_from_toml() {
        let cfg = build_cycle_config(&cycle_toml()).unwrap();
        assert_eq!(cfg.cycle_length(), 6);
        assert_eq!(cfg.off_day_behavior(), OffDayBehavior::Skip);
        assert_eq!(cfg.start(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(cfg.classes(), ["Math 10"]);
    }

    #[test]
    fn cycle_config_bad_date() {
        let mut t = cycle_toml();
        t.end_date = "2024-02-30".to_string();
        let err = build_cycle_config(&t).unwrap_err();
        assert!(format!("{err:#}").contains("cycle.end_date"));
    }

    #[test]
    fn exceptions_first_wins() {
        let set = build_exceptions(&[
            ExceptionToml {
                date: "2024-01-03".to_string(),
                kind: "holiday".to_string(),
                label: Some("Snow day".to_string()),
            },
            ExceptionToml {
                date: "2024-01-03".to_string(),
                kind: "exam_day".to_string(),
                label: None,
            },
        ]);
        assert_eq!(set.len(), 1);
        let e = set.iter().next().unwrap();
        assert_eq!(e.kind, ExceptionKind::Holiday);
        assert_eq!(e.label.as_deref(), Some("Snow day"));
    }

    #[test]
    fn malformed_exceptions_are_skipped() {
        let set = build_exceptions(&[
            ExceptionToml {
                date: "2024-02-30".to_string(),
                kind: "holiday".to_string(),
                label: None,
            },
            ExceptionToml {
                date: "2024-01-04".to_string(),
                kind: "party".to_string(),
                label: None,
            },
            ExceptionToml {
                date: "2024-01-03".to_string(),
                kind: "holiday".to_string(),
                label: None,
            },
        ]);
        assert_eq!(set.len(), 1);
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(set.get(date).map(|e| e.kind), Some(ExceptionKind::Holiday));
    }

    #[test]
    fn periods_default_when_empty() {
        let periods = build_periods(&[], 3).unwrap();
        assert_eq!(periods.len(), 3);
        assert_eq!(periods[2].id(), "p3");
    }

    #[test]
    fn periods_get_positional_ids() {
        let periods = build_periods(
            &[
                PeriodToml {
                    id: None,
                    name: "Block A".to_string(),
                    start_time: "08:30".to_string(),
                    end_time: "09:45".to_string(),
                },
                PeriodToml {
                    id: Some("lunch".to_string()),
                    name: "Lunch".to_string(),
                    start_time: "12:00".to_string(),
                    end_time: "12:40".to_string(),
                },
            ],
            2,
        )
        .unwrap();
        assert_eq!(periods[0].id(), "p1");
        assert_eq!(periods[1].id(), "lunch");
    }

    #[test]
    fn periods_duplicate_ids_rejected() {
        let p = PeriodToml {
            id: Some("x".to_string()),
            name: "X".to_string(),
            start_time: "08:00".to_string(),
            end_time: "09:00".to_string(),
        };
        assert!(build_periods(&[p.clone(), p], 2).is_err());
    }

    #[test]
    fn grid_later_slot_wins() {
        let grid = build_grid(&[
            SlotToml {
                cycle_day: 1,
                period: "p1".to_string(),
                class: "Art".to_string(),
                room: None,
            },
            SlotToml {
                cycle_day: 1,
                period: "p1".to_string(),
                class: "Music".to_string(),
                room: Some("B2".to_string()),
            },
        ]);
        assert_eq!(grid.len(), 1);
        let a = grid.get(1, "p1").unwrap();
        assert_eq!(a.class_name, "Music");
        assert_eq!(a.room(), Some("B2"));
    }

    #[test]
    fn overrides_parsed() {
        let o = build_overrides(&[OverrideToml {
            date: "2024-01-10".to_string(),
            cycle_day: 2,
        }])
        .unwrap();
        assert_eq!(o, vec![(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(), 2)]);
    }
}
