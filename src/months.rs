use crate::consts::WEEKDAY_NAME_PREFIX;
use crate::types::{Month, MonthCount, WeekSize, YearSize};

/// Lays out `month_count` months evenly over `year_size` days.
///
/// The `year_size % month_count` leftover days go one each to the first
/// months, so the day counts always sum to `year_size`. Names default to
/// "Month 1", "Month 2", ... and weeks are `days / week_size` (0 when a week
/// is longer than the month).
pub fn generate_months(year_size: YearSize, month_count: MonthCount, week_size: WeekSize) -> Vec<Month> {
    let base_days = year_size.get() / month_count.get();
    let extra = year_size.get() % month_count.get();

    (0..month_count.get())
        .map(|i| {
            let days = base_days + u32::from(i < extra);
            Month::with_default_name(i as usize, days, week_size)
        })
        .collect()
}

/// Regenerates the even layout but keeps the names of months that already
/// existed at the same index.
pub fn redistribute_months(
    previous: &[Month],
    year_size: YearSize,
    month_count: MonthCount,
    week_size: WeekSize,
) -> Vec<Month> {
    generate_months(year_size, month_count, week_size)
        .into_iter()
        .enumerate()
        .map(|(i, month)| match previous.get(i) {
            Some(old) if !old.name.is_empty() => Month {
                name: old.name.clone(),
                ..month
            },
            _ => month,
        })
        .collect()
}

pub fn default_weekday_name(index: usize) -> String {
    format!("{WEEKDAY_NAME_PREFIX} {}", index + 1)
}

/// "Day 1" through "Day N"
pub fn default_weekday_names(week_size: WeekSize) -> Vec<String> {
    (0..week_size.get() as usize).map(default_weekday_name).collect()
}

/// Resizes a weekday-name list to `week_size`, keeping non-empty names and
/// filling the rest with defaults.
pub fn resize_weekday_names(previous: &[String], week_size: WeekSize) -> Vec<String> {
    (0..week_size.get() as usize)
        .map(|i| match previous.get(i) {
            Some(name) if !name.is_empty() => name.clone(),
            _ => default_weekday_name(i),
        })
        .collect()
}
