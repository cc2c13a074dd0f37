//! # custom_calendar
//!
//! User-defined calendars (any year length, month count, week length, month
//! and weekday names, seasons) and conversion of Gregorian dates into them.
//!
//! A [`CalendarSystem`] ties a custom coordinate ([`StartDate`]) to a
//! Gregorian anchor instant. [`to_custom_date`] measures whole days from that
//! anchor and walks the custom year, month and week to produce a
//! [`CustomDate`].
//!
//! ```ignore
//! use custom_calendar::{CalendarSystem, to_custom_date_on};
//! use chrono::NaiveDate;
//!
//! let system = CalendarSystem::builder()
//!     .name("Tidal")
//!     .year_size(360)
//!     .week_size(6)
//!     .month_name(0, "Flood")
//!     .build()?;
//!
//! let date = to_custom_date_on(NaiveDate::from_ymd_opt(1970, 1, 3).unwrap(), &system);
//! assert_eq!(date.to_string(), "Day 3 3 Flood 1");
//! ```

mod consts;
mod convert;
mod months;
mod prelude;
mod record;
mod season;
mod store;
mod system;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use convert::{CustomDate, days_between, format_custom_date, ordinal, to_custom_date, to_custom_date_on};
pub use months::{default_weekday_names, generate_months, redistribute_months, resize_weekday_names};
pub use record::{CalendarRecord, RecordError, format_anchor, parse_anchor};
pub use season::{Season, find_season};
pub use store::{CalendarStore, StoreError};
pub use system::{CalendarBuilder, CalendarSystem};
pub use types::{Month, MonthCount, StartDate, WeekSize, YearSize};

use crate::prelude::*;

/// Configuration errors: a calendar definition that cannot be converted against.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CalendarError {
    #[display(fmt = "Year size must be at least 1 day")]
    ZeroYearSize,
    #[display(fmt = "Month count must be at least 1")]
    ZeroMonthCount,
    #[display(fmt = "Week size must be at least 1 day")]
    ZeroWeekSize,
    #[display(fmt = "Month count {month_count} must be less than year size {year_size}")]
    MonthCountNotBelowYearSize { month_count: u32, year_size: u32 },
    #[display(fmt = "Month count {month_count} must be greater than week size {week_size}")]
    MonthCountNotAboveWeekSize { month_count: u32, week_size: u32 },
    #[display(fmt = "Expected {expected} months, found {found}")]
    MonthCountMismatch { expected: u32, found: usize },
    #[display(fmt = "Month {index} has no days")]
    EmptyMonth { index: usize },
    #[display(fmt = "Months total {found} days but the year has {expected}")]
    MonthDaysMismatch { expected: u32, found: u64 },
    #[display(fmt = "Start month {month_index} is out of range (calendar has {month_count} months)")]
    StartMonthOutOfRange { month_index: usize, month_count: u32 },
    #[display(fmt = "Start day {day_of_month} is out of range (must be 1-{max_day})")]
    StartDayOutOfRange { day_of_month: u32, max_day: u32 },
    #[display(fmt = "Start year {year_number} is out of range (must be within +/-{})", MAX_YEAR_NUMBER)]
    StartYearOutOfRange { year_number: i64 },
    #[display(fmt = "Season {season:?} references month {month_index} (calendar has {month_count} months)")]
    SeasonMonthOutOfRange {
        season:      String,
        month_index: usize,
        month_count: u32,
    },
}

impl std::error::Error for CalendarError {}
