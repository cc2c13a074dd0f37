//! Shared builders for unit tests.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{CalendarSystem, MonthCount, WeekSize, YearSize};

pub fn year_size(value: u32) -> YearSize {
    YearSize::new(value).expect("invalid test year size")
}

pub fn month_count(value: u32) -> MonthCount {
    MonthCount::new(value).expect("invalid test month count")
}

pub fn week_size(value: u32) -> WeekSize {
    WeekSize::new(value).expect("invalid test week size")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
}

/// Midnight UTC on the given date
pub fn anchor(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    date(year, month, day).and_hms_opt(0, 0, 0).expect("invalid test time").and_utc()
}

/// 360-day year of twelve 30-day months, 7-day week, day 1 of month 0 of
/// year 1 at 2024-01-01.
pub fn thirty_day_system() -> CalendarSystem {
    CalendarSystem::builder()
        .name("Thirty")
        .year_size(360)
        .month_count(12)
        .week_size(7)
        .gregorian_anchor(anchor(2024, 1, 1))
        .build()
        .expect("failed to build thirty-day test calendar")
}
