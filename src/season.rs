use serde::{Deserialize, Serialize};

use crate::{consts::SEASON_NAME_PREFIX, prelude::*};

/// A named span of months (inclusive on both ends).
/// When the start index is greater than the end index the span wraps across
/// the year boundary, so `10..=1` covers months 10, 11, 0 and 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{name} ({start_month_index}..={end_month_index})")]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub name:              String,
    pub start_month_index: usize,
    pub end_month_index:   usize,
}

impl Season {
    pub fn new(name: impl Into<String>, start_month_index: usize, end_month_index: usize) -> Self {
        Self {
            name: name.into(),
            start_month_index,
            end_month_index,
        }
    }

    /// Placeholder season numbered after `existing` seasons, covering month 0 only
    pub fn placeholder(existing: usize) -> Self {
        Self::new(format!("{SEASON_NAME_PREFIX} {}", existing + 1), 0, 0)
    }

    /// Whether the span crosses the year boundary
    pub const fn is_wrapping(&self) -> bool {
        self.start_month_index > self.end_month_index
    }

    /// Checks if the season covers the given 0-based month index
    pub const fn contains(&self, month_index: usize) -> bool {
        if self.is_wrapping() {
            month_index >= self.start_month_index || month_index <= self.end_month_index
        } else {
            self.start_month_index <= month_index && month_index <= self.end_month_index
        }
    }

    /// Largest month index referenced by either end of the span
    pub fn max_month_index(&self) -> usize {
        self.start_month_index.max(self.end_month_index)
    }
}

/// First season, in declaration order, that covers `month_index`.
/// Overlapping seasons are allowed; the earlier declaration wins.
pub fn find_season(seasons: &[Season], month_index: usize) -> Option<&Season> {
    seasons.iter().find(|s| s.contains(month_index))
}
