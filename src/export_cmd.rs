//! Export command: write the calendar CSV.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use tracing::{info, info_span, warn};

use cyclecal_export::{project_rows, to_csv};

use crate::cli::ExportArgs;
use crate::schedule::Schedule;

/// Run the export pipeline.
pub fn run(args: ExportArgs) -> Result<()> {
    let _cmd = info_span!("export").entered();
    let schedule = Schedule::load(&args.input)?;
    let mappings = schedule.mappings()?;

    let rows = project_rows(&mappings, &schedule.grid, &schedule.periods);
    let n_events = rows.len();
    if n_events == 0 {
        warn!("no events to export; the grid has no classes on any teaching day");
    }

    let csv = to_csv(&rows).context("failed to serialize calendar CSV")?;
    let output = resolve_output(args.output, schedule.export_output, schedule.config.start());
    fs::write(&output, &csv).with_context(|| format!("failed to write {}", output.display()))?;
    info!(path = %output.display(), n_events, "calendar CSV written");
    Ok(())
}

/// Output path: CLI flag, then `[export].output`, then a name derived
/// from the start year.
pub fn resolve_output(cli: Option<PathBuf>, config: Option<PathBuf>, start: NaiveDate) -> PathBuf {
    cli.or(config)
        .unwrap_or_else(|| PathBuf::from(format!("school_schedule_{}.csv", start.year())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InputArgs;

    const CONFIG: &str = r#"
        [cycle]
        cycle_days = 6
        periods_per_day = 2
        start_date = "2024-01-01"
        end_date = "2024-01-05"

        [[grid]]
        cycle_day = 2
        period = "p2"
        class = "Art"
    "#;

    #[test]
    fn output_precedence() {
        let start = NaiveDate::from_ymd_opt(2024, 9, 3).unwrap();
        assert_eq!(
            resolve_output(Some("a.csv".into()), Some("b.csv".into()), start),
            PathBuf::from("a.csv")
        );
        assert_eq!(
            resolve_output(None, Some("b.csv".into()), start),
            PathBuf::from("b.csv")
        );
        assert_eq!(
            resolve_output(None, None, start),
            PathBuf::from("school_schedule_2024.csv")
        );
    }

    #[test]
    fn writes_csv() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = dir.path().join("cyclecal.toml");
        let output = dir.path().join("out.csv");
        fs::write(&config, CONFIG).unwrap();

        run(ExportArgs {
            input: InputArgs {
                config,
                hints: None,
            },
            output: Some(output.clone()),
        })
        .unwrap();

        let csv = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], cyclecal_export::HEADER.join(","));
        assert!(lines[1].starts_with("\"Art (Day 2)\",\"2024-01-02\",\"09:00\""));
    }
}
