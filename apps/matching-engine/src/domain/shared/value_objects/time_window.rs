//! Time window value object for availability and pickup intervals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A UTC interval with optionally-open bounds.
///
/// Driver availability and load pickup windows both arrive as
/// `[earliestWhen, latestWhen]` pairs where either bound may be absent. An
/// absent bound is treated as unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Earliest instant, or unbounded past.
    pub earliest: Option<DateTime<Utc>>,
    /// Latest instant, or unbounded future.
    pub latest: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// Create a window from optional bounds.
    #[must_use]
    pub const fn new(earliest: Option<DateTime<Utc>>, latest: Option<DateTime<Utc>>) -> Self {
        Self { earliest, latest }
    }

    /// Create a fully-bounded window.
    #[must_use]
    pub const fn bounded(earliest: DateTime<Utc>, latest: DateTime<Utc>) -> Self {
        Self {
            earliest: Some(earliest),
            latest: Some(latest),
        }
    }

    /// True when neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.earliest.is_none() && self.latest.is_none()
    }

    /// True when the two intervals share at least one instant.
    ///
    /// Open bounds never rule out an overlap on their side.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        if let (Some(start), Some(other_end)) = (self.earliest, other.latest)
            && start > other_end
        {
            return false;
        }
        if let (Some(end), Some(other_start)) = (self.latest, other.earliest)
            && end < other_start
        {
            return false;
        }
        true
    }
}
