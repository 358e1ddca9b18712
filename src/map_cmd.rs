//! Map command: resolve every date in the range to its cycle day.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use cyclecal_calendar::format_date;
use cyclecal_cycle::DateMapping;

use crate::cli::{MapArgs, MapFormat};
use crate::schedule::Schedule;

/// Run the mapping pipeline and print or write the result.
pub fn run(args: MapArgs) -> Result<()> {
    let _cmd = info_span!("map").entered();
    let schedule = Schedule::load(&args.input)?;
    let mappings = schedule.mappings()?;

    let text = match args.format {
        MapFormat::Json => {
            serde_json::to_string_pretty(&mappings).context("failed to serialize mappings")?
        }
        MapFormat::Table => render_table(&mappings),
    };

    match args.output.as_deref() {
        Some(path) => write_output(path, &text)?,
        None => println!("{text}"),
    }
    Ok(())
}

/// One line per date: date, day type, cycle day (or `-`).
pub fn render_table(mappings: &[DateMapping]) -> String {
    mappings
        .iter()
        .map(|m| {
            let day = m
                .cycle_day()
                .map_or_else(|| "-".to_string(), |d| d.to_string());
            format!(
                "{}  {:<10}  {day}\n",
                format_date(m.date()),
                m.day_type().label()
            )
        })
        .collect()
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "mapping written");
    Ok(())
}
