//! Cycle-day resolution for rotating school timetables.
//!
//! Schools on a rotating schedule number their teaching days `1..=N`
//! independently of the weekday. This crate walks a calendar date range,
//! classifies each date, and assigns cycle-day numbers to teaching days.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  date_range   │────▶│   classify     │────▶│  counter fold    │
//!  │  (calendar)   │     │ (weekend/exc.) │     │ (skip / pause)   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use cyclecal_cycle::{
//!     CycleConfig, DayException, ExceptionKind, ExceptionSet, OffDayBehavior, map_cycle_days,
//! };
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
//! let config = CycleConfig::new(start, end)
//!     .with_cycle_length(6)
//!     .with_off_day_behavior(OffDayBehavior::Pause);
//! let holiday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
//! let exceptions: ExceptionSet = [DayException::new(holiday, ExceptionKind::Holiday)]
//!     .into_iter()
//!     .collect();
//!
//! let mappings = map_cycle_days(&config, &exceptions).unwrap();
//! assert_eq!(mappings.len(), 12);
//! assert_eq!(mappings[3].cycle_day(), Some(3));
//! ```

mod config;
mod day_type;
mod error;
mod exception;
mod mapper;
mod mapping;
mod overrides;

pub use config::CycleConfig;
pub use day_type::{DayType, OffDayBehavior};
pub use error::CycleError;
pub use exception::{DayException, ExceptionKind, ExceptionSet};
pub use mapper::{classify, map_cycle_days};
pub use mapping::DateMapping;
pub use overrides::override_cycle_day;
