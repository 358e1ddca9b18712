//! Review command: month-by-month listing of the mapped calendar.

use anyhow::Result;
use tracing::{info, info_span};

use cyclecal_calendar::month_groups;
use cyclecal_cycle::{DateMapping, DayType};
use cyclecal_export::{Period, ScheduleGrid};

use crate::cli::ReviewArgs;
use crate::schedule::Schedule;

pub fn run(args: ReviewArgs) -> Result<()> {
    let _cmd = info_span!("review").entered();
    let schedule = Schedule::load(&args.input)?;
    let mappings = schedule.mappings()?;

    let counts = count_day_types(&mappings);
    for (day_type, n) in &counts {
        info!(day_type = %day_type, n, "day count");
    }

    print!(
        "{}",
        render_review(&mappings, &schedule.grid, &schedule.periods)
    );
    println!("{}", render_summary(&counts));
    Ok(())
}

/// Renders the calendar grouped by month.
///
/// Teaching days list the classes scheduled on their cycle day, each
/// prefixed by its period name.
pub fn render_review(mappings: &[DateMapping], grid: &ScheduleGrid, periods: &[Period]) -> String {
    let dates: Vec<_> = mappings.iter().map(DateMapping::date).collect();
    let mut out = String::new();
    let mut rest = mappings;
    for group in month_groups(&dates) {
        let (month, tail) = rest.split_at(group.dates.len());
        rest = tail;
        let Some(first) = group.dates.first() else {
            continue;
        };
        out.push_str(&format!("{}\n", first.format("%B %Y")));
        for m in month {
            out.push_str(&review_line(m, grid, periods));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn review_line(m: &DateMapping, grid: &ScheduleGrid, periods: &[Period]) -> String {
    let line = format!(
        "  {}  {:<10}  {:<5}",
        m.date().format("%a %Y-%m-%d"),
        m.day_type().label(),
        m.cycle_day()
            .map_or_else(|| "-".to_string(), |d| format!("Day {d}"))
    );
    match m.cycle_day() {
        Some(cycle_day) => format!("{line}  {}", classes_for(cycle_day, grid, periods)),
        None => line,
    }
}

fn classes_for(cycle_day: u16, grid: &ScheduleGrid, periods: &[Period]) -> String {
    let classes: Vec<String> = periods
        .iter()
        .filter_map(|p| grid.class_at(cycle_day, p.id()).map(|a| (p, a)))
        .map(|(p, a)| match a.room() {
            Some(room) => format!("{}: {} ({room})", p.name(), a.class_name.trim()),
            None => format!("{}: {}", p.name(), a.class_name.trim()),
        })
        .collect();
    if classes.is_empty() {
        "no classes".to_string()
    } else {
        classes.join(", ")
    }
}

/// Number of dates per day type, in display order. Zero counts are kept.
pub fn count_day_types(mappings: &[DateMapping]) -> Vec<(DayType, usize)> {
    DayType::ALL
        .iter()
        .map(|&t| (t, mappings.iter().filter(|m| m.day_type() == t).count()))
        .collect()
}

fn render_summary(counts: &[(DayType, usize)]) -> String {
    let parts: Vec<String> = counts
        .iter()
        .map(|(t, n)| format!("{n} {}", t.label()))
        .collect();
    format!("Summary: {}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cyclecal_cycle::{CycleConfig, DayException, ExceptionKind, ExceptionSet, map_cycle_days};
    use cyclecal_export::{ClassAssignment, default_periods};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn mappings() -> Vec<DateMapping> {
        let config = CycleConfig::new(d(2024, 1, 29), d(2024, 2, 2));
        let exceptions: ExceptionSet = [DayException::new(d(2024, 1, 31), ExceptionKind::PdDay)]
            .into_iter()
            .collect();
        map_cycle_days(&config, &exceptions).unwrap()
    }

    #[test]
    fn grouped_by_month() {
        let periods = default_periods(2).unwrap();
        let mut grid = ScheduleGrid::new();
        grid.assign(1, "p1", ClassAssignment::new("Math 10").with_room("101"));
        grid.assign(1, "p2", ClassAssignment::new("Art"));

        let text = render_review(&mappings(), &grid, &periods);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "January 2024");
        assert!(lines[1].contains("Mon 2024-01-29"));
        assert!(lines[1].ends_with("Period 1: Math 10 (101), Period 2: Art"));
        assert!(lines[3].contains("PD DAY"));
        assert!(lines[3].trim_end().ends_with('-'));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "February 2024");
        assert!(lines[6].contains("Day 3"));
        assert!(lines[6].ends_with("no classes"));
    }

    #[test]
    fn counts_include_zero() {
        let counts = count_day_types(&mappings());
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[0], (DayType::SchoolDay, 4));
        assert_eq!(counts[2], (DayType::PdDay, 1));
        assert_eq!(counts[4], (DayType::Weekend, 0));
        assert_eq!(
            render_summary(&counts),
            "Summary: 4 SCHOOL DAY, 0 HOLIDAY, 1 PD DAY, 0 EXAM DAY, 0 WEEKEND"
        );
    }
}
