//! Pre-scoring load filters: availability window and load type.

use serde::{Deserialize, Serialize};

use crate::domain::freight::{FullPartial, LoadRecord};
use crate::domain::shared::TimeWindow;

/// Caller-requested load-type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadTypeFilter {
    /// Only full loads.
    Full,
    /// Only partial loads.
    Partial,
    /// No type restriction.
    Both,
}

impl LoadTypeFilter {
    /// Whether a load's full/partial attribute passes this filter.
    #[must_use]
    pub const fn matches(&self, full_partial: Option<FullPartial>) -> bool {
        match self {
            Self::Both => true,
            Self::Full => matches!(full_partial, Some(FullPartial::Full)),
            Self::Partial => matches!(full_partial, Some(FullPartial::Partial)),
        }
    }
}

impl Default for LoadTypeFilter {
    fn default() -> Self {
        Self::Both
    }
}

/// Apply the availability and load-type filters ahead of scoring.
///
/// The two filters compose as a conjunction. A load without a parseable
/// pickup window is excluded outright: it cannot be checked against the
/// driver's availability, so it cannot be safely ranked. Callers with no
/// availability constraint pass an unbounded window.
#[must_use]
pub fn filter_loads(
    loads: Vec<LoadRecord>,
    driver_availability: &TimeWindow,
    load_type: LoadTypeFilter,
) -> Vec<LoadRecord> {
    loads
        .into_iter()
        .filter(|load| {
            load.pickup
                .is_some_and(|pickup| pickup.overlaps(driver_availability))
        })
        .filter(|load| load_type.matches(load.full_partial))
        .collect()
}
