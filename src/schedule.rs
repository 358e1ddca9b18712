//! Loading a schedule file into library types.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use cyclecal_cycle::{CycleConfig, DateMapping, ExceptionSet, map_cycle_days, override_cycle_day};
use cyclecal_export::{Period, ScheduleGrid};

use crate::cli::InputArgs;
use crate::config::ScheduleToml;
use crate::convert;
use crate::hints;

/// A fully converted and validated schedule.
#[derive(Debug)]
pub struct Schedule {
    pub config: CycleConfig,
    pub exceptions: ExceptionSet,
    pub periods: Vec<Period>,
    pub grid: ScheduleGrid,
    pub overrides: Vec<(NaiveDate, u16)>,
    pub export_output: Option<PathBuf>,
}

impl Schedule {
    /// Reads the TOML file, merges optional hints, and converts.
    pub fn load(input: &InputArgs) -> Result<Self> {
        let toml_str = fs::read_to_string(&input.config)
            .with_context(|| format!("failed to read config file: {}", input.config.display()))?;
        let mut toml: ScheduleToml =
            toml::from_str(&toml_str).context("failed to parse TOML config")?;

        if let Some(path) = &input.hints {
            let extracted = hints::load_hints(path)?;
            info!(path = %path.display(), "applying extracted hints");
            hints::apply_hints(&mut toml, extracted);
        }

        Self::from_toml(toml)
    }

    /// Converts parsed TOML into validated library types.
    pub fn from_toml(toml: ScheduleToml) -> Result<Self> {
        let config = convert::build_cycle_config(&toml.cycle)?;
        config.validate().context("invalid [cycle] configuration")?;
        let exceptions = convert::build_exceptions(&toml.exceptions);
        let periods = convert::build_periods(&toml.periods, config.periods_per_day())?;
        let grid = convert::build_grid(&toml.grid);
        grid.validate(config.cycle_length(), &periods)
            .context("invalid [[grid]] entry")?;
        convert::check_grid_names(&toml.grid, &config);
        let overrides = convert::build_overrides(&toml.overrides)?;

        info!(
            start = %config.start(),
            end = %config.end(),
            cycle_length = config.cycle_length(),
            n_exceptions = exceptions.len(),
            n_periods = periods.len(),
            n_slots = grid.len(),
            "schedule loaded"
        );

        Ok(Self {
            config,
            exceptions,
            periods,
            grid,
            overrides,
            export_output: toml.export.output,
        })
    }

    /// Resolves cycle days for the whole range, then applies overrides.
    pub fn mappings(&self) -> Result<Vec<DateMapping>> {
        let mut mappings =
            map_cycle_days(&self.config, &self.exceptions).context("cycle mapping failed")?;
        for &(date, cycle_day) in &self.overrides {
            override_cycle_day(&mut mappings, date, cycle_day, self.config.cycle_length())
                .with_context(|| format!("cannot apply override for {date}"))?;
        }
        Ok(mappings)
    }
}
