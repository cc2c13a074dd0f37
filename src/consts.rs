/// Year length used when a record omits it (the Gregorian common year)
pub const DEFAULT_YEAR_SIZE: u32 = 365;

/// Month count used when a record omits it
pub const DEFAULT_MONTH_COUNT: u32 = 12;

/// Week length used when a record omits it
pub const DEFAULT_WEEK_SIZE: u32 = 7;

/// Calendar name used when a record omits it
pub const DEFAULT_CALENDAR_NAME: &str = "Unnamed";

/// First day of a custom month (days are 1-based)
pub const MIN_DAY_OF_MONTH: u32 = 1;

/// Prefix of generated month names ("Month 1", "Month 2", ...)
pub const MONTH_NAME_PREFIX: &str = "Month";
/// Prefix of generated weekday names ("Day 1", "Day 2", ...)
pub const WEEKDAY_NAME_PREFIX: &str = "Day";
/// Prefix of generated season names ("Season 1", ...)
pub const SEASON_NAME_PREFIX: &str = "Season";

/// Largest magnitude accepted for a start year number. Any Gregorian instant
/// moves the year by far less than `i64::MAX - MAX_YEAR_NUMBER`.
pub const MAX_YEAR_NUMBER: i64 = 1_000_000_000_000;

/// Milliseconds in one Gregorian day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Version written into every persisted calendar record
pub const RECORD_VERSION: u32 = 1;

/// Format of bare `YYYY-MM-DD` anchors (midnight UTC)
pub const ANCHOR_DATE_FORMAT: &str = "%Y-%m-%d";
