//! Schedule parameters extracted from a free-text description.
//!
//! The extraction service answers with a JSON object whose fields are all
//! optional. Missing or unusable fields keep the configured value.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

use cyclecal_export::Period;

use crate::config::{PeriodToml, ScheduleToml};

/// The single message reported for any hint failure.
pub const UNINTERPRETABLE: &str = "could not interpret description";

/// Structured response from the extraction service.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleHints {
    #[serde(default)]
    pub cycle_days: Option<f64>,
    #[serde(default)]
    pub periods_per_day: Option<f64>,
    #[serde(default)]
    pub rooms: Option<Vec<String>>,
    #[serde(default)]
    pub class_list: Option<Vec<String>>,
    #[serde(default)]
    pub periods: Option<Vec<PeriodHint>>,
    /// Set by the service instead of the fields above when extraction failed.
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodHint {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

/// Reads and parses a hints file.
pub fn load_hints(path: &Path) -> Result<ScheduleHints> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read hints file: {}", path.display()))
        .context(UNINTERPRETABLE)?;
    parse_hints(&text)
}

/// Parses a service response, tolerating a surrounding markdown code fence.
pub fn parse_hints(text: &str) -> Result<ScheduleHints> {
    let hints: ScheduleHints =
        serde_json::from_str(strip_code_fence(text)).context(UNINTERPRETABLE)?;
    if let Some(reason) = &hints.error {
        bail!("{UNINTERPRETABLE}: {reason}");
    }
    for (i, p) in hints.periods.iter().flatten().enumerate() {
        Period::new(format!("p{}", i + 1), &p.name, &p.start_time, &p.end_time)
            .with_context(|| format!("period {} in hints", i + 1))
            .context(UNINTERPRETABLE)?;
    }
    Ok(hints)
}

/// Merges hints into the schedule file contents.
///
/// Counts override only when they are positive integers. Rooms and classes
/// are unioned with the configured ones. A period list replaces the
/// configured periods, renumbered `p1..pn`.
pub fn apply_hints(toml: &mut ScheduleToml, hints: ScheduleHints) {
    if let Some(n) = positive_integer("cycleDays", hints.cycle_days) {
        toml.cycle.cycle_days = n;
    }
    if let Some(n) = positive_integer("periodsPerDay", hints.periods_per_day) {
        toml.cycle.periods_per_day = n;
    }
    union_into(&mut toml.cycle.rooms, hints.rooms.unwrap_or_default());
    union_into(&mut toml.cycle.classes, hints.class_list.unwrap_or_default());
    if let Some(periods) = hints.periods {
        toml.periods = periods
            .into_iter()
            .enumerate()
            .map(|(i, p)| PeriodToml {
                id: Some(format!("p{}", i + 1)),
                name: p.name,
                start_time: p.start_time,
                end_time: p.end_time,
            })
            .collect();
    }
}

fn positive_integer(field: &str, value: Option<f64>) -> Option<u16> {
    let v = value?;
    if v.is_finite() && v >= 1.0 && v.fract() == 0.0 && v <= f64::from(u16::MAX) {
        Some(v as u16)
    } else {
        debug!(field, value = v, "ignoring unusable hint");
        None
    }
}

fn union_into(existing: &mut Vec<String>, incoming: Vec<String>) {
    for name in incoming {
        let name = name.trim().to_string();
        if !name.is_empty() && !existing.contains(&name) {
            existing.push(name);
        }
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> ScheduleToml {
        toml::from_str(
            r#"
            [cycle]
            cycle_days = 6
            periods_per_day = 8
            start_date = "2024-09-03"
            end_date = "2025-06-27"
            rooms = ["101"]
            classes = ["Math 10"]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn fence_stripping() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{}\n```\n"), "{}");
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }

    #[test]
    fn parse_full_response() {
        let hints = parse_hints(
            r#"```json
            {
              "cycleDays": 4,
              "periodsPerDay": 2,
              "rooms": ["204"],
              "classList": ["Physics 11"],
              "periods": [
                {"name": "Block A", "startTime": "08:30", "endTime": "09:45"},
                {"name": "Block B", "startTime": "10:00", "endTime": "11:15"}
              ]
            }
            ```"#,
        )
        .unwrap();
        assert_eq!(hints.cycle_days, Some(4.0));
        assert_eq!(hints.periods.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn missing_fields_are_fine() {
        let hints = parse_hints("{}").unwrap();
        assert!(hints.cycle_days.is_none());
        assert!(hints.periods.is_none());
    }

    #[test]
    fn malformed_json_is_uninterpretable() {
        let err = parse_hints("not json").unwrap_err();
        assert!(err.to_string().starts_with(UNINTERPRETABLE));
    }

    #[test]
    fn service_error_is_uninterpretable() {
        let err = parse_hints(r#"{"error": "Missing API Key"}"#).unwrap_err();
        assert_eq!(err.to_string(), "could not interpret description: Missing API Key");
    }

    #[test]
    fn bad_period_time_is_uninterpretable() {
        let err = parse_hints(
            r#"{"periods": [{"name": "A", "startTime": "morning", "endTime": "09:00"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with(UNINTERPRETABLE));
    }

    #[test]
    fn missing_file_is_uninterpretable() {
        let err = load_hints(Path::new("/nonexistent/hints.json")).unwrap_err();
        assert!(err.to_string().starts_with(UNINTERPRETABLE));
    }

    #[test]
    fn apply_merges() {
        let mut toml = schedule();
        let hints = parse_hints(
            r#"{
              "cycleDays": 4,
              "rooms": ["101", "204"],
              "classList": ["Physics 11", "Math 10"],
              "periods": [{"name": "Block A", "startTime": "08:30", "endTime": "09:45"}]
            }"#,
        )
        .unwrap();
        apply_hints(&mut toml, hints);
        assert_eq!(toml.cycle.cycle_days, 4);
        assert_eq!(toml.cycle.periods_per_day, 8);
        assert_eq!(toml.cycle.rooms, vec!["101", "204"]);
        assert_eq!(toml.cycle.classes, vec!["Math 10", "Physics 11"]);
        assert_eq!(toml.periods.len(), 1);
        assert_eq!(toml.periods[0].id.as_deref(), Some("p1"));
    }

    #[test]
    fn unusable_counts_keep_existing() {
        for bad in ["0", "-3", "2.5"] {
            let mut toml = schedule();
            let hints = parse_hints(&format!(r#"{{"cycleDays": {bad}}}"#)).unwrap();
            apply_hints(&mut toml, hints);
            assert_eq!(toml.cycle.cycle_days, 6, "cycleDays = {bad}");
        }
    }
}
