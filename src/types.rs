use crate::CalendarError;
use crate::consts::{MIN_DAY_OF_MONTH, MONTH_NAME_PREFIX};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Number of days in a custom year, guaranteed non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct YearSize(NonZeroU32);

impl YearSize {
    /// Creates a new year size
    ///
    /// # Errors
    /// Returns `CalendarError::ZeroYearSize` if the value is 0.
    pub fn new(value: u32) -> Result<Self, CalendarError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(CalendarError::ZeroYearSize)
    }

    /// Returns the day count as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for YearSize {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<YearSize> for u32 {
    fn from(size: YearSize) -> Self {
        size.0.get()
    }
}

impl fmt::Display for YearSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of months in a custom year, guaranteed non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MonthCount(NonZeroU32);

impl MonthCount {
    /// Creates a new month count
    ///
    /// # Errors
    /// Returns `CalendarError::ZeroMonthCount` if the value is 0.
    pub fn new(value: u32) -> Result<Self, CalendarError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(CalendarError::ZeroMonthCount)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The count as a collection length
    #[inline]
    pub const fn len(self) -> usize {
        self.0.get() as usize
    }
}

impl TryFrom<u32> for MonthCount {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MonthCount> for u32 {
    fn from(count: MonthCount) -> Self {
        count.0.get()
    }
}

impl fmt::Display for MonthCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of days in a custom week, guaranteed non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct WeekSize(NonZeroU32);

impl WeekSize {
    /// Creates a new week size
    ///
    /// # Errors
    /// Returns `CalendarError::ZeroWeekSize` if the value is 0.
    pub fn new(value: u32) -> Result<Self, CalendarError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(CalendarError::ZeroWeekSize)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for WeekSize {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekSize> for u32 {
    fn from(size: WeekSize) -> Self {
        size.0.get()
    }
}

impl fmt::Display for WeekSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named month of a custom calendar.
///
/// `weeks` is informational (`days / week_size`, rounded down) and plays no
/// part in date conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{name} ({days} days)")]
pub struct Month {
    pub name:  String,
    pub days:  u32,
    #[serde(default)]
    pub weeks: u32,
}

impl Month {
    /// Creates a month with the generated default name for `index` (0-based)
    pub fn with_default_name(index: usize, days: u32, week_size: WeekSize) -> Self {
        Self {
            name: default_month_name(index),
            days,
            weeks: days / week_size.get(),
        }
    }
}

/// The custom-calendar coordinate that corresponds to the Gregorian anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(
    fmt = "day {day_of_month} of month {month_index}, year {year_number} (weekday {day_index})"
)]
#[serde(rename_all = "camelCase")]
pub struct StartDate {
    /// Weekday index at the anchor
    pub day_index:    u32,
    /// 1-based day within the start month
    pub day_of_month: u32,
    /// 0-based month index
    pub month_index:  usize,
    pub year_number:  i64,
}

impl Default for StartDate {
    fn default() -> Self {
        Self {
            day_index:    0,
            day_of_month: MIN_DAY_OF_MONTH,
            month_index:  0,
            year_number:  1,
        }
    }
}

// Helper functions

pub fn default_month_name(index: usize) -> String {
    format!("{MONTH_NAME_PREFIX} {}", index + 1)
}

/// Total number of days across `months`
pub fn total_days(months: &[Month]) -> u64 {
    months.iter().map(|m| u64::from(m.days)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_size_new_valid() {
        assert!(YearSize::new(1).is_ok());
        assert!(YearSize::new(365).is_ok());
        assert!(YearSize::new(u32::MAX).is_ok());
    }

    #[test]
    fn test_year_size_new_invalid_zero() {
        let result = YearSize::new(0);
        assert!(matches!(result, Err(CalendarError::ZeroYearSize)));
    }

    #[test]
    fn test_month_count_new_invalid_zero() {
        let result = MonthCount::new(0);
        assert!(matches!(result, Err(CalendarError::ZeroMonthCount)));
    }

    #[test]
    fn test_week_size_new_invalid_zero() {
        let result = WeekSize::new(0);
        assert!(matches!(result, Err(CalendarError::ZeroWeekSize)));
    }

    #[test]
    fn test_sizes_get_and_display() {
        let year = YearSize::new(360).unwrap();
        let months = MonthCount::new(12).unwrap();
        let week = WeekSize::new(6).unwrap();

        assert_eq!(year.get(), 360);
        assert_eq!(months.get(), 12);
        assert_eq!(months.len(), 12);
        assert_eq!(week.get(), 6);

        assert_eq!(year.to_string(), "360");
        assert_eq!(months.to_string(), "12");
        assert_eq!(week.to_string(), "6");
    }

    #[test]
    fn test_sizes_try_from_and_into_u32() {
        let year: YearSize = 400.try_into().unwrap();
        let value: u32 = year.into();
        assert_eq!(value, 400);

        let result: Result<WeekSize, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_sizes_serde() {
        let year = YearSize::new(365).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "365");

        let parsed: YearSize = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let zero: Result<MonthCount, _> = serde_json::from_str("0");
        assert!(zero.is_err());
    }

    #[test]
    fn test_month_with_default_name() {
        let week = WeekSize::new(7).unwrap();
        let month = Month::with_default_name(0, 31, week);
        assert_eq!(month.name, "Month 1");
        assert_eq!(month.days, 31);
        assert_eq!(month.weeks, 4);
        assert_eq!(month.to_string(), "Month 1 (31 days)");
    }

    #[test]
    fn test_month_weeks_zero_when_week_longer_than_month() {
        let week = WeekSize::new(10).unwrap();
        let month = Month::with_default_name(4, 9, week);
        assert_eq!(month.name, "Month 5");
        assert_eq!(month.weeks, 0);
    }

    #[test]
    fn test_start_date_default() {
        let start = StartDate::default();
        assert_eq!(start.day_index, 0);
        assert_eq!(start.day_of_month, 1);
        assert_eq!(start.month_index, 0);
        assert_eq!(start.year_number, 1);
    }

    #[test]
    fn test_start_date_serde_camel_case() {
        let start = StartDate {
            day_index:    3,
            day_of_month: 15,
            month_index:  2,
            year_number:  -4,
        };
        let json = serde_json::to_string(&start).unwrap();
        assert_eq!(
            json,
            r#"{"dayIndex":3,"dayOfMonth":15,"monthIndex":2,"yearNumber":-4}"#
        );

        let parsed: StartDate = serde_json::from_str(&json).unwrap();
        assert_eq!(start, parsed);
    }

    #[test]
    fn test_total_days() {
        let week = WeekSize::new(7).unwrap();
        let months = [
            Month::with_default_name(0, 30, week),
            Month::with_default_name(1, 31, week),
        ];
        assert_eq!(total_days(&months), 61);
        assert_eq!(total_days(&[]), 0);
    }
}
