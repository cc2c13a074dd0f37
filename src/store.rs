use tracing::{debug, warn};

use crate::record::{CalendarRecord, RecordError};
use crate::system::CalendarSystem;

/// Error type for calendar collections.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// One stored record failed to load.
    #[error("Calendar record {index} is invalid: {source}")]
    InvalidRecord {
        index:  usize,
        #[source]
        source: RecordError,
    },

    /// Two calendars would share a name.
    #[error("A calendar named {0:?} already exists")]
    DuplicateName(String),

    /// No calendar has the requested name.
    #[error("No calendar named {0:?}")]
    UnknownName(String),

    #[error("Invalid calendar list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Named calendars in insertion order. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarStore {
    systems: Vec<CalendarSystem>,
}

impl CalendarStore {
    pub const fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Loads a JSON array of calendar records. Every record is validated;
    /// the first invalid one fails the whole load.
    ///
    /// # Errors
    /// Returns `StoreError::Json` for malformed JSON, `StoreError::InvalidRecord`
    /// for a record that does not describe a valid calendar, and
    /// `StoreError::DuplicateName` when two records share a name.
    #[tracing::instrument(skip(text), fields(bytes = text.len()))]
    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        let records: Vec<CalendarRecord> = serde_json::from_str(text)?;
        let mut store = Self::new();
        for (index, record) in records.into_iter().enumerate() {
            let system = record
                .into_system()
                .map_err(|source| StoreError::InvalidRecord { index, source })?;
            store.add(system)?;
        }
        debug!(calendars = store.len(), "loaded calendar store");
        Ok(store)
    }

    /// # Errors
    /// Returns `StoreError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, StoreError> {
        let records: Vec<CalendarRecord> = self.systems.iter().map(CalendarRecord::from).collect();
        Ok(serde_json::to_string(&records)?)
    }

    /// Appends a calendar
    ///
    /// # Errors
    /// Returns `StoreError::DuplicateName` if the name is taken.
    pub fn add(&mut self, system: CalendarSystem) -> Result<(), StoreError> {
        if self.get(system.name()).is_some() {
            return Err(StoreError::DuplicateName(system.name().to_owned()));
        }
        self.systems.push(system);
        Ok(())
    }

    /// Swaps the calendar called `name` for `system`, keeping its position.
    /// The replacement may carry a new name as long as no other calendar
    /// already uses it.
    ///
    /// # Errors
    /// Returns `StoreError::UnknownName` if `name` is not stored and
    /// `StoreError::DuplicateName` if the new name belongs to another calendar.
    pub fn replace(&mut self, name: &str, system: CalendarSystem) -> Result<CalendarSystem, StoreError> {
        let index = self.position(name).ok_or_else(|| StoreError::UnknownName(name.to_owned()))?;
        if system.name() != name && self.get(system.name()).is_some() {
            return Err(StoreError::DuplicateName(system.name().to_owned()));
        }
        Ok(std::mem::replace(&mut self.systems[index], system))
    }

    /// Removes and returns the calendar called `name`
    pub fn remove(&mut self, name: &str) -> Option<CalendarSystem> {
        let removed = self.position(name).map(|index| self.systems.remove(index));
        if removed.is_none() {
            warn!(name, "no calendar to remove");
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<&CalendarSystem> {
        self.systems.iter().find(|s| s.name() == name)
    }

    /// The calendar shown when nothing else is selected
    pub fn first(&self) -> Option<&CalendarSystem> {
        self.systems.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarSystem> {
        self.systems.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.systems.iter().map(CalendarSystem::name).collect()
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.systems.iter().position(|s| s.name() == name)
    }
}

impl<'a> IntoIterator for &'a CalendarStore {
    type Item = &'a CalendarSystem;
    type IntoIter = std::slice::Iter<'a, CalendarSystem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalendarError;
    use crate::test_utils::thirty_day_system;

    fn named(name: &str) -> CalendarSystem {
        thirty_day_system()
            .to_builder()
            .name(name)
            .build()
            .expect("failed to build named calendar")
    }

    #[test]
    fn test_add_and_get() {
        let mut store = CalendarStore::new();
        assert!(store.is_empty());
        assert!(store.first().is_none());

        store.add(named("Tidal")).expect("failed to add first calendar");
        store.add(named("Ember")).expect("failed to add second calendar");

        assert_eq!(store.len(), 2);
        assert_eq!(store.names(), ["Tidal", "Ember"]);
        assert_eq!(store.first().map(CalendarSystem::name), Some("Tidal"));
        assert!(store.get("Ember").is_some());
        assert!(store.get("Gale").is_none());
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut store = CalendarStore::new();
        store.add(named("Tidal")).expect("failed to add calendar");
        let result = store.add(named("Tidal"));
        assert!(matches!(result, Err(StoreError::DuplicateName(name)) if name == "Tidal"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut store = CalendarStore::new();
        store.add(named("Tidal")).expect("failed to add first calendar");
        store.add(named("Ember")).expect("failed to add second calendar");

        let edited = store
            .get("Tidal")
            .expect("missing calendar")
            .to_builder()
            .name("Tides")
            .month_name(0, "Flood")
            .build()
            .expect("failed to build edited calendar");

        let old = store.replace("Tidal", edited).expect("failed to replace calendar");
        assert_eq!(old.name(), "Tidal");
        assert_eq!(store.names(), ["Tides", "Ember"]);
        assert_eq!(store.get("Tides").map(|s| s.months()[0].name.as_str()), Some("Flood"));
    }

    #[test]
    fn test_replace_errors() {
        let mut store = CalendarStore::new();
        store.add(named("Tidal")).expect("failed to add first calendar");
        store.add(named("Ember")).expect("failed to add second calendar");

        let unknown = store.replace("Gale", named("Gale"));
        assert!(matches!(unknown, Err(StoreError::UnknownName(_))));

        let clash = store.replace("Tidal", named("Ember"));
        assert!(matches!(clash, Err(StoreError::DuplicateName(_))));
        assert_eq!(store.names(), ["Tidal", "Ember"]);
    }

    #[test]
    fn test_remove() {
        let mut store = CalendarStore::new();
        store.add(named("Tidal")).expect("failed to add first calendar");
        store.add(named("Ember")).expect("failed to add second calendar");

        let removed = store.remove("Tidal").expect("calendar should be removed");
        assert_eq!(removed.name(), "Tidal");
        assert_eq!(store.first().map(CalendarSystem::name), Some("Ember"));
        assert!(store.remove("Tidal").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = CalendarStore::new();
        store.add(named("Tidal")).expect("failed to add first calendar");
        store.add(named("Ember")).expect("failed to add second calendar");

        let json = store.to_json().expect("failed to serialize store");
        assert!(json.starts_with('['));

        let restored = CalendarStore::from_json(&json).expect("failed to load store");
        assert_eq!(store, restored);
        assert_eq!((&restored).into_iter().count(), 2);
    }

    #[test]
    fn test_from_json_reports_bad_index() {
        let json = r#"[
            {"name": "Good", "gregorianAnchor": "2024-01-01"},
            {"name": "Bad", "gregorianAnchor": "2024-01-01", "monthCount": 400}
        ]"#;
        let err = CalendarStore::from_json(json).expect_err("expected invalid record");
        assert!(matches!(
            err,
            StoreError::InvalidRecord {
                index:  1,
                source: RecordError::Calendar(CalendarError::MonthCountNotBelowYearSize { .. }),
            }
        ));
        assert!(err.to_string().starts_with("Calendar record 1 is invalid"));
    }

    #[test]
    fn test_from_json_duplicate_names() {
        let json = r#"[
            {"name": "Twin", "gregorianAnchor": "2024-01-01"},
            {"name": "Twin", "gregorianAnchor": "2025-01-01"}
        ]"#;
        let result = CalendarStore::from_json(json);
        assert!(matches!(result, Err(StoreError::DuplicateName(_))));
    }

    #[test]
    fn test_from_json_empty_and_malformed() {
        let empty = CalendarStore::from_json("[]").expect("failed to load empty store");
        assert!(empty.is_empty());

        let malformed = CalendarStore::from_json("{}");
        assert!(matches!(malformed, Err(StoreError::Json(_))));
    }
}
