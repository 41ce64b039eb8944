//! HTTP request bodies.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::load_ranking::LoadTypeFilter;

/// Body for `POST /api/search-drivers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchDriversRequest {
    /// Origin city (optional; state-level search without it).
    #[serde(default)]
    pub origin_city: Option<String>,
    /// Origin state (required).
    #[serde(default)]
    pub origin_state: Option<String>,
    /// Equipment codes; defaults to dry van.
    #[serde(default)]
    pub equipment_types: Option<Vec<String>>,
    /// Optional search filters.
    #[serde(default)]
    pub filters: Option<DriverSearchFilters>,
    /// Maximum records to return.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Optional capacity search filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriverSearchFilters {
    /// Earliest driver availability.
    #[serde(default)]
    pub availability_start: Option<DateTime<Utc>>,
    /// Latest driver availability.
    #[serde(default)]
    pub availability_end: Option<DateTime<Utc>>,
    /// Preferred destination state.
    #[serde(default)]
    pub destination_state: Option<String>,
    /// Maximum origin deadhead in miles.
    #[serde(default)]
    pub max_deadhead: Option<u32>,
}

/// Driver availability window as posted on the board (camelCase keys).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverAvailabilityBody {
    /// Earliest availability.
    #[serde(default)]
    pub earliest_when: Option<DateTime<Utc>>,
    /// Latest availability.
    #[serde(default)]
    pub latest_when: Option<DateTime<Utc>>,
}

/// Optional load search filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoadSearchFilters {
    /// Destination state restriction.
    #[serde(default)]
    pub destination_state: Option<String>,
    /// Maximum origin deadhead in miles.
    #[serde(default)]
    pub max_deadhead: Option<u32>,
    /// Full/partial restriction.
    #[serde(default)]
    pub load_type: Option<LoadTypeFilter>,
}

/// Body for `POST /api/loads-for-driver`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoadsForDriverRequest {
    /// Driver's current city (required).
    #[serde(default)]
    pub driver_location_city: Option<String>,
    /// Driver's current state (required).
    #[serde(default)]
    pub driver_location_state: Option<String>,
    /// Driver's equipment code; defaults to dry van.
    #[serde(default)]
    pub equipment_type: Option<String>,
    /// Driver's availability window.
    #[serde(default)]
    pub driver_availability: Option<DriverAvailabilityBody>,
    /// Optional search filters.
    #[serde(default)]
    pub filters: Option<LoadSearchFilters>,
    /// Maximum records to return.
    #[serde(default)]
    pub limit: Option<u32>,
}
