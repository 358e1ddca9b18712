//! # cyclecal-export
//!
//! Projects a cycle-day → period → class grid onto resolved
//! [`DateMapping`](cyclecal_cycle::DateMapping)s and serializes the result as
//! a calendar-import CSV document.
//!
//! ```text
//!  DateMapping[] ──┐
//!  ScheduleGrid ───┼──▶ project_rows() ──▶ ExportRow[] ──▶ to_csv() ──▶ String
//!  Period[] ───────┘
//! ```
//!
//! Only teaching dates with a non-blank class in the grid produce rows.

mod error;
mod grid;
mod period;
mod project;
mod writer;

pub use error::ExportError;
pub use grid::{ClassAssignment, ScheduleGrid};
pub use period::{MAX_DEFAULT_PERIODS, Period, default_periods, validate_periods};
pub use project::{ExportRow, project_rows};
pub use writer::{HEADER, export_csv, to_csv};
