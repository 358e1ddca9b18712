use std::path::PathBuf;

use serde::Deserialize;

/// Top-level schedule file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    /// Cycle parameters for the school year.
    pub cycle: CycleToml,

    /// Period timings, in display order. Generated from
    /// `cycle.periods_per_day` when empty.
    #[serde(default)]
    pub periods: Vec<PeriodToml>,

    /// Holidays, PD days and exam days.
    #[serde(default)]
    pub exceptions: Vec<ExceptionToml>,

    /// Class and room per cycle day and period.
    #[serde(default)]
    pub grid: Vec<SlotToml>,

    /// Manual cycle-day corrections.
    #[serde(default)]
    pub overrides: Vec<OverrideToml>,

    /// Export settings.
    #[serde(default)]
    pub export: ExportToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CycleToml {
    #[serde(default = "default_cycle_days")]
    pub cycle_days: u16,
    #[serde(default = "default_periods_per_day")]
    pub periods_per_day: u16,
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_first_cycle_day")]
    pub first_cycle_day: u16,
    #[serde(default = "default_off_day_behavior")]
    pub off_day_behavior: String,
    #[serde(default)]
    pub rooms: Vec<String>,
    #[serde(default)]
    pub classes: Vec<String>,
}

fn default_cycle_days() -> u16 {
    6
}
fn default_periods_per_day() -> u16 {
    8
}
fn default_first_cycle_day() -> u16 {
    1
}
fn default_off_day_behavior() -> String {
    "pause".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodToml {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExceptionToml {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotToml {
    pub cycle_day: u16,
    pub period: String,
    pub class: String,
    #[serde(default)]
    pub room: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideToml {
    pub date: String,
    pub cycle_day: u16,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportToml {
    #[serde(default)]
    pub output: Option<PathBuf>,
}
