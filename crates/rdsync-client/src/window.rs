//! Per-day query window for the deals endpoint.

use chrono::NaiveDate;

/// A single calendar day expanded to `[00:00:01, 23:59:59]` local-time bounds,
/// formatted the way the deals endpoint expects (`YYYY-MM-DDTHH:MM:SS`).
///
/// Built fresh for each day of the iteration; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestWindow {
    date: NaiveDate,
}

impl RequestWindow {
    #[must_use]
    pub fn for_day(date: NaiveDate) -> Self {
        Self { date }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Lower bound of the window. Starts at second 1, not 0, matching the
    /// endpoint's inclusive created-at filtering.
    #[must_use]
    pub fn start_param(&self) -> String {
        format!("{}T00:00:01", self.date.format("%Y-%m-%d"))
    }

    /// Upper bound of the window (last second of the day).
    #[must_use]
    pub fn end_param(&self) -> String {
        format!("{}T23:59:59", self.date.format("%Y-%m-%d"))
    }
}
