use chrono::{DateTime, Utc};

use crate::CalendarError;
use crate::consts::{
    DEFAULT_CALENDAR_NAME, DEFAULT_MONTH_COUNT, DEFAULT_WEEK_SIZE, DEFAULT_YEAR_SIZE,
    MAX_YEAR_NUMBER, MIN_DAY_OF_MONTH,
};
use crate::months::{default_weekday_names, generate_months, redistribute_months, resize_weekday_names};
use crate::season::Season;
use crate::types::{Month, MonthCount, StartDate, WeekSize, YearSize, total_days};

/// A fully validated custom calendar.
///
/// Once built, a system is read-only. Editing goes through
/// [`CalendarSystem::to_builder`] and produces a new system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSystem {
    name:             String,
    year_size:        YearSize,
    month_count:      MonthCount,
    week_size:        WeekSize,
    months:           Vec<Month>,
    seasons:          Vec<Season>,
    gregorian_anchor: DateTime<Utc>,
    start_date:       StartDate,
    days_of_week:     Vec<String>,
}

impl CalendarSystem {
    /// Creates a new calendar system with validation.
    ///
    /// A `days_of_week` list shorter than the week is accepted; weekdays
    /// without a name convert to an empty day name.
    ///
    /// # Errors
    /// Returns the first `CalendarError` found, checking sizes first, then
    /// the month layout, then the start date and finally the seasons.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        year_size: YearSize,
        month_count: MonthCount,
        week_size: WeekSize,
        months: Vec<Month>,
        seasons: Vec<Season>,
        gregorian_anchor: DateTime<Utc>,
        start_date: StartDate,
        days_of_week: Vec<String>,
    ) -> Result<Self, CalendarError> {
        validate_sizes(year_size, month_count, week_size)?;
        validate_months(&months, year_size, month_count)?;
        validate_start_date(&start_date, &months, month_count)?;
        validate_seasons(&seasons, month_count)?;

        Ok(Self {
            name: name.into(),
            year_size,
            month_count,
            week_size,
            months,
            seasons,
            gregorian_anchor,
            start_date,
            days_of_week,
        })
    }

    /// Starts a builder with the default 365/12/7 layout
    pub fn builder() -> CalendarBuilder {
        CalendarBuilder::default()
    }

    /// Returns a builder pre-filled with this system's fields
    pub fn to_builder(&self) -> CalendarBuilder {
        CalendarBuilder {
            name:             self.name.clone(),
            year_size:        self.year_size.get(),
            month_count:      self.month_count.get(),
            week_size:        self.week_size.get(),
            months:           self.months.clone(),
            seasons:          self.seasons.clone(),
            gregorian_anchor: self.gregorian_anchor,
            start_date:       self.start_date,
            days_of_week:     self.days_of_week.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn year_size(&self) -> YearSize {
        self.year_size
    }

    pub const fn month_count(&self) -> MonthCount {
        self.month_count
    }

    pub const fn week_size(&self) -> WeekSize {
        self.week_size
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    /// Gregorian instant matching [`Self::start_date`]
    pub const fn gregorian_anchor(&self) -> DateTime<Utc> {
        self.gregorian_anchor
    }

    pub const fn start_date(&self) -> StartDate {
        self.start_date
    }

    pub fn days_of_week(&self) -> &[String] {
        &self.days_of_week
    }

    /// Days from the start of the custom year to the anchor's coordinate
    pub fn start_offset(&self) -> i64 {
        let before: u64 = self.months[..self.start_date.month_index]
            .iter()
            .map(|m| u64::from(m.days))
            .sum();
        i64::from(self.start_date.day_of_month - MIN_DAY_OF_MONTH) + before as i64
    }
}

fn validate_sizes(year_size: YearSize, month_count: MonthCount, week_size: WeekSize) -> Result<(), CalendarError> {
    if month_count.get() >= year_size.get() {
        return Err(CalendarError::MonthCountNotBelowYearSize {
            month_count: month_count.get(),
            year_size:   year_size.get(),
        });
    }
    if month_count.get() <= week_size.get() {
        return Err(CalendarError::MonthCountNotAboveWeekSize {
            month_count: month_count.get(),
            week_size:   week_size.get(),
        });
    }
    Ok(())
}

fn validate_months(months: &[Month], year_size: YearSize, month_count: MonthCount) -> Result<(), CalendarError> {
    if months.len() != month_count.len() {
        return Err(CalendarError::MonthCountMismatch {
            expected: month_count.get(),
            found:    months.len(),
        });
    }
    if let Some(index) = months.iter().position(|m| m.days == 0) {
        return Err(CalendarError::EmptyMonth { index });
    }
    let sum = total_days(months);
    if sum != u64::from(year_size.get()) {
        return Err(CalendarError::MonthDaysMismatch {
            expected: year_size.get(),
            found:    sum,
        });
    }
    Ok(())
}

fn validate_start_date(start: &StartDate, months: &[Month], month_count: MonthCount) -> Result<(), CalendarError> {
    let month = months
        .get(start.month_index)
        .ok_or(CalendarError::StartMonthOutOfRange {
            month_index: start.month_index,
            month_count: month_count.get(),
        })?;
    if start.day_of_month < MIN_DAY_OF_MONTH || start.day_of_month > month.days {
        return Err(CalendarError::StartDayOutOfRange {
            day_of_month: start.day_of_month,
            max_day:      month.days,
        });
    }
    if start.year_number.unsigned_abs() > MAX_YEAR_NUMBER.unsigned_abs() {
        return Err(CalendarError::StartYearOutOfRange {
            year_number: start.year_number,
        });
    }
    Ok(())
}

fn validate_seasons(seasons: &[Season], month_count: MonthCount) -> Result<(), CalendarError> {
    match seasons.iter().find(|s| s.max_month_index() >= month_count.len()) {
        Some(season) => Err(CalendarError::SeasonMonthOutOfRange {
            season:      season.name.clone(),
            month_index: season.max_month_index(),
            month_count: month_count.get(),
        }),
        None => Ok(()),
    }
}

/// Step-by-step construction of a [`CalendarSystem`].
///
/// Changing the year size, month count or week size re-lays-out the months
/// evenly while keeping month names already set, and resizes the weekday
/// names. Nothing is validated until [`CalendarBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarBuilder {
    name:             String,
    year_size:        u32,
    month_count:      u32,
    week_size:        u32,
    months:           Vec<Month>,
    seasons:          Vec<Season>,
    gregorian_anchor: DateTime<Utc>,
    start_date:       StartDate,
    days_of_week:     Vec<String>,
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        let mut builder = Self {
            name:             DEFAULT_CALENDAR_NAME.to_owned(),
            year_size:        DEFAULT_YEAR_SIZE,
            month_count:      DEFAULT_MONTH_COUNT,
            week_size:        DEFAULT_WEEK_SIZE,
            months:           Vec::new(),
            seasons:          Vec::new(),
            gregorian_anchor: DateTime::<Utc>::UNIX_EPOCH,
            start_date:       StartDate::default(),
            days_of_week:     Vec::new(),
        };
        builder.relayout();
        builder
    }
}

impl CalendarBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn year_size(mut self, days: u32) -> Self {
        self.year_size = days;
        self.relayout();
        self
    }

    pub fn month_count(mut self, count: u32) -> Self {
        self.month_count = count;
        self.relayout();
        self
    }

    pub fn week_size(mut self, days: u32) -> Self {
        self.week_size = days;
        self.relayout();
        self
    }

    /// Renames the month at `index`; out-of-range indices are ignored
    pub fn month_name(mut self, index: usize, name: impl Into<String>) -> Self {
        if let Some(month) = self.months.get_mut(index) {
            month.name = name.into();
        }
        self
    }

    /// Replaces the generated layout with explicit months
    pub fn months(mut self, months: Vec<Month>) -> Self {
        self.months = months;
        self
    }

    /// Renames the weekday at `index`; out-of-range indices are ignored
    pub fn weekday_name(mut self, index: usize, name: impl Into<String>) -> Self {
        if let Some(day) = self.days_of_week.get_mut(index) {
            *day = name.into();
        }
        self
    }

    pub fn days_of_week(mut self, names: Vec<String>) -> Self {
        self.days_of_week = names;
        self
    }

    /// Appends a "Season N" placeholder covering the first month
    pub fn add_season(mut self) -> Self {
        self.seasons.push(Season::placeholder(self.seasons.len()));
        self
    }

    /// Overwrites the season at `index`; out-of-range indices are ignored
    pub fn season(mut self, index: usize, name: impl Into<String>, start: usize, end: usize) -> Self {
        if let Some(season) = self.seasons.get_mut(index) {
            *season = Season::new(name, start, end);
        }
        self
    }

    pub fn seasons(mut self, seasons: Vec<Season>) -> Self {
        self.seasons = seasons;
        self
    }

    pub const fn gregorian_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.gregorian_anchor = anchor;
        self
    }

    pub const fn start_date(mut self, start: StartDate) -> Self {
        self.start_date = start;
        self
    }

    /// Validates and builds the system
    ///
    /// # Errors
    /// Returns `CalendarError` if any size is zero or any invariant fails.
    pub fn build(self) -> Result<CalendarSystem, CalendarError> {
        CalendarSystem::new(
            self.name,
            YearSize::new(self.year_size)?,
            MonthCount::new(self.month_count)?,
            WeekSize::new(self.week_size)?,
            self.months,
            self.seasons,
            self.gregorian_anchor,
            self.start_date,
            self.days_of_week,
        )
    }

    // Zero sizes leave the current layout alone; build() reports them.
    fn relayout(&mut self) {
        let (Ok(year), Ok(count), Ok(week)) = (
            YearSize::new(self.year_size),
            MonthCount::new(self.month_count),
            WeekSize::new(self.week_size),
        ) else {
            return;
        };
        self.months = if self.months.is_empty() {
            generate_months(year, count, week)
        } else {
            redistribute_months(&self.months, year, count, week)
        };
        self.days_of_week = if self.days_of_week.is_empty() {
            default_weekday_names(week)
        } else {
            resize_weekday_names(&self.days_of_week, week)
        };
    }
}
