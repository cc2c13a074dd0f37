use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::consts::MILLIS_PER_DAY;
use crate::season::find_season;
use crate::system::CalendarSystem;

/// A Gregorian date expressed in a custom calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomDate {
    /// Weekday name, empty when the weekday has no name
    pub day_name:    String,
    /// 1-based day within the month
    pub day:         u32,
    /// 0-based month index
    pub month_index: usize,
    /// Month name
    pub month:       String,
    /// Custom year; negative before the calendar's year 0
    pub year:        i64,
    /// Season name, empty when no season covers the month
    pub season:      String,
}

impl CustomDate {
    /// Like `Display`, but with an ordinal day ("Moonday 3rd Frostfall 12")
    pub fn long_form(&self) -> String {
        render(&self.day_name, &ordinal(self.day), &self.month, self.year, &self.season)
    }
}

impl fmt::Display for CustomDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(
            &self.day_name,
            &self.day.to_string(),
            &self.month,
            self.year,
            &self.season,
        ))
    }
}

fn render(day_name: &str, day: &str, month: &str, year: i64, season: &str) -> String {
    let mut out = String::new();
    if !day_name.is_empty() {
        out.push_str(day_name);
        out.push(' ');
    }
    out.push_str(&format!("{day} {month} {year}"));
    if !season.is_empty() {
        out.push_str(&format!(" ({season})"));
    }
    out
}

/// Formats as "{day name} {day} {month} {year}", plus " ({season})" when a
/// season matched. An empty day name is left out together with its
/// separating space, so the result never starts with a blank.
pub fn format_custom_date(date: &CustomDate) -> String {
    date.to_string()
}

/// English ordinal for a day number: 1st, 2nd, 3rd, 4th, 11th, 21st...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, k) if k != 11 => "st",
        (2, k) if k != 12 => "nd",
        (3, k) if k != 13 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Whole days from `anchor` to `date`, rounded toward negative infinity
pub fn days_between(anchor: DateTime<Utc>, date: DateTime<Utc>) -> i64 {
    (date - anchor).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Converts a Gregorian instant into `system`'s calendar.
///
/// The day offset from the anchor is floored, so an instant one millisecond
/// before the anchor already belongs to the previous custom day. Year
/// normalization is closed-form and runs in constant time regardless of the
/// distance from the anchor.
pub fn to_custom_date(date: DateTime<Utc>, system: &CalendarSystem) -> CustomDate {
    let days_diff = days_between(system.gregorian_anchor(), date);
    let start = system.start_date();
    let start_offset = system.start_offset();
    let year_size = i64::from(system.year_size().get());

    let total_days = start_offset + days_diff;
    let year = start.year_number + total_days.div_euclid(year_size);
    let (month_index, day_in_month) = locate_day(system, total_days.rem_euclid(year_size));
    let month = system.months()[month_index].name.clone();
    let day = day_in_month + 1;

    let season = find_season(system.seasons(), month_index)
        .map(|s| s.name.clone())
        .unwrap_or_default();

    let week_size = i64::from(system.week_size().get());
    let weekday_index = (i64::from(start.day_index) + start_offset + days_diff).rem_euclid(week_size);
    let day_name = usize::try_from(weekday_index)
        .ok()
        .and_then(|i| system.days_of_week().get(i))
        .cloned()
        .unwrap_or_default();

    debug!(
        calendar = system.name(),
        days_diff, year, month_index, day, weekday_index, "converted gregorian date"
    );

    CustomDate {
        day_name,
        day,
        month_index,
        month,
        year,
        season,
    }
}

/// Month index and 0-based day within that month for a day of the year.
/// `day_of_year` is in `0..year_size`, and the months sum to the year size,
/// so the walk always lands inside a month.
fn locate_day(system: &CalendarSystem, day_of_year: i64) -> (usize, u32) {
    let mut remaining = day_of_year;
    for (i, month) in system.months().iter().enumerate() {
        let days = i64::from(month.days);
        if remaining < days {
            // 0 <= remaining < month.days
            return (i, remaining as u32);
        }
        remaining -= days;
    }
    (0, 0)
}

/// Converts a Gregorian calendar date, taken at midnight UTC
pub fn to_custom_date_on(date: NaiveDate, system: &CalendarSystem) -> CustomDate {
    to_custom_date(date.and_time(chrono::NaiveTime::MIN).and_utc(), system)
}
