//! # cyclecal-calendar
//!
//! Pure Gregorian calendar-day arithmetic for the cycle scheduler.
//!
//! Dates are plain [`chrono::NaiveDate`] values with no time-of-day or
//! timezone component, so stepping one day at a time never drifts across
//! daylight-saving transitions.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str (YYYY-MM-DD)"] -->|"parse_date()"| B["NaiveDate"]
//!     B -->|"date_range()"| C["Vec of NaiveDate"]
//!     B -->|"is_weekend()"| D["bool"]
//!     C -->|"month_groups()"| E["Vec of MonthGroup"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use cyclecal_calendar::{date_range, is_weekend, parse_date};
//!
//! let start = parse_date("2024-01-05").unwrap(); // Friday
//! let end = parse_date("2024-01-08").unwrap(); // Monday
//! let dates = date_range(start, end);
//! assert_eq!(dates.len(), 4);
//! assert!(is_weekend(dates[1]));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | ISO parsing, formatting and weekday tests |
//! | `sequence` | Inclusive date range generation |
//! | `month` | Grouping a date sequence by calendar month |
//! | `error` | Error types |

mod date;
mod error;
mod month;
mod sequence;

pub use date::{format_date, is_weekend, parse_date};
pub use error::CalendarError;
pub use month::{MonthGroup, month_groups};
pub use sequence::{DateRange, date_range, day_count};
