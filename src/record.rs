use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::CalendarError;
use crate::consts::{
    ANCHOR_DATE_FORMAT, DEFAULT_CALENDAR_NAME, DEFAULT_MONTH_COUNT, DEFAULT_WEEK_SIZE,
    DEFAULT_YEAR_SIZE, RECORD_VERSION,
};
use crate::months::{generate_months, resize_weekday_names};
use crate::season::Season;
use crate::system::CalendarSystem;
use crate::types::{Month, MonthCount, StartDate, WeekSize, YearSize};

/// Error type for loading and saving calendar records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Record written by a newer version of this crate.
    #[error("Unsupported record version {found} (this build reads up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Record has no Gregorian anchor.
    #[error("Record has no gregorianAnchor")]
    MissingAnchor,

    /// Anchor is neither an RFC 3339 instant nor a `YYYY-MM-DD` date.
    #[error("Invalid gregorianAnchor: {0}")]
    InvalidAnchor(String),

    /// Record describes an invalid calendar.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("Invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML record: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("Cannot write TOML record: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

/// Flat, versioned form of a [`CalendarSystem`] for storage.
///
/// Missing fields take explicit defaults when read; [`CalendarRecord::into_system`]
/// then repairs what it can and validates the rest. Scalars come before
/// nested tables so the record also serializes as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRecord {
    #[serde(default = "default_version")]
    pub version:          u32,
    #[serde(default = "default_name")]
    pub name:             String,
    #[serde(default = "default_year_size")]
    pub year_size:        u32,
    #[serde(default = "default_month_count")]
    pub month_count:      u32,
    #[serde(default = "default_week_size")]
    pub week_size:        u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gregorian_anchor: Option<String>,
    #[serde(default)]
    pub days_of_week:     Vec<String>,
    #[serde(default)]
    pub seasons:          Vec<Season>,
    #[serde(default)]
    pub months:           Vec<Month>,
    #[serde(default)]
    pub start_date:       StartDate,
}

const fn default_version() -> u32 {
    RECORD_VERSION
}

fn default_name() -> String {
    DEFAULT_CALENDAR_NAME.to_owned()
}

const fn default_year_size() -> u32 {
    DEFAULT_YEAR_SIZE
}

const fn default_month_count() -> u32 {
    DEFAULT_MONTH_COUNT
}

const fn default_week_size() -> u32 {
    DEFAULT_WEEK_SIZE
}

impl CalendarRecord {
    /// Validates the record and turns it into a calendar system.
    ///
    /// Repairs: an empty month list is replaced by the even layout, month
    /// week counts are recomputed, and a weekday-name list of the wrong
    /// length is resized with default names.
    ///
    /// # Errors
    /// Returns `RecordError` for a newer version, a missing or unparsable
    /// anchor, or any calendar invariant violation.
    #[tracing::instrument(skip(self), fields(name = %self.name, version = self.version))]
    pub fn into_system(self) -> Result<CalendarSystem, RecordError> {
        if self.version > RECORD_VERSION {
            return Err(RecordError::UnsupportedVersion {
                found:     self.version,
                supported: RECORD_VERSION,
            });
        }

        let anchor_text = self.gregorian_anchor.ok_or(RecordError::MissingAnchor)?;
        let gregorian_anchor = parse_anchor(&anchor_text)?;

        let year_size = YearSize::new(self.year_size)?;
        let month_count = MonthCount::new(self.month_count)?;
        let week_size = WeekSize::new(self.week_size)?;

        let months = if self.months.is_empty() {
            warn!(year_size = year_size.get(), month_count = month_count.get(), "record has no months, generating even layout");
            generate_months(year_size, month_count, week_size)
        } else {
            self.months
                .into_iter()
                .map(|m| Month {
                    weeks: m.days / week_size.get(),
                    ..m
                })
                .collect()
        };

        let days_of_week = if self.days_of_week.len() == week_size.get() as usize {
            self.days_of_week
        } else {
            warn!(
                found = self.days_of_week.len(),
                expected = week_size.get(),
                "resizing weekday names to week size"
            );
            resize_weekday_names(&self.days_of_week, week_size)
        };

        Ok(CalendarSystem::new(
            self.name,
            year_size,
            month_count,
            week_size,
            months,
            self.seasons,
            gregorian_anchor,
            self.start_date,
            days_of_week,
        )?)
    }

    /// # Errors
    /// Returns `RecordError::Json` if the text is not a record object.
    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(text)?)
    }

    /// # Errors
    /// Returns `RecordError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    /// Returns `RecordError::TomlRead` if the text is not a record table.
    pub fn from_toml(text: &str) -> Result<Self, RecordError> {
        Ok(toml::from_str(text)?)
    }

    /// # Errors
    /// Returns `RecordError::TomlWrite` if serialization fails.
    pub fn to_toml(&self) -> Result<String, RecordError> {
        Ok(toml::to_string(self)?)
    }
}

impl From<&CalendarSystem> for CalendarRecord {
    fn from(system: &CalendarSystem) -> Self {
        Self {
            version:          RECORD_VERSION,
            name:             system.name().to_owned(),
            year_size:        system.year_size().get(),
            month_count:      system.month_count().get(),
            week_size:        system.week_size().get(),
            gregorian_anchor: Some(format_anchor(system.gregorian_anchor())),
            days_of_week:     system.days_of_week().to_vec(),
            seasons:          system.seasons().to_vec(),
            months:           system.months().to_vec(),
            start_date:       system.start_date(),
        }
    }
}

impl CalendarSystem {
    /// Reads a calendar from a JSON record
    ///
    /// # Errors
    /// Returns `RecordError` if the JSON is malformed or the record invalid.
    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        CalendarRecord::from_json(text)?.into_system()
    }

    /// # Errors
    /// Returns `RecordError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, RecordError> {
        CalendarRecord::from(self).to_json()
    }

    /// Reads a calendar from a hand-written TOML file's contents
    ///
    /// # Errors
    /// Returns `RecordError` if the TOML is malformed or the record invalid.
    pub fn from_toml(text: &str) -> Result<Self, RecordError> {
        CalendarRecord::from_toml(text)?.into_system()
    }

    /// # Errors
    /// Returns `RecordError::TomlWrite` if serialization fails.
    pub fn to_toml(&self) -> Result<String, RecordError> {
        CalendarRecord::from(self).to_toml()
    }
}

/// Parses an anchor written as an RFC 3339 instant or a bare `YYYY-MM-DD`
/// date (midnight UTC).
///
/// # Errors
/// Returns `RecordError::InvalidAnchor` if neither form matches.
pub fn parse_anchor(text: &str) -> Result<DateTime<Utc>, RecordError> {
    let trimmed = text.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, ANCHOR_DATE_FORMAT)
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| RecordError::InvalidAnchor(text.to_owned()))
}

/// RFC 3339 with milliseconds and a `Z` suffix, e.g. `2024-01-01T00:00:00.000Z`
pub fn format_anchor(anchor: DateTime<Utc>) -> String {
    anchor.to_rfc3339_opts(SecondsFormat::Millis, true)
}
