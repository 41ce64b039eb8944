//! HTTP response bodies.

use serde::Serialize;

use crate::application::use_cases::RankedDrivers;
use crate::domain::carrier_vetting::{FleetInfo, VettedDriver};
use crate::domain::freight::MarketSignal;
use crate::domain::load_ranking::RankedLoad;
use crate::domain::shared::Resolved;

/// Health probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error.
    pub error: String,
}

impl ErrorResponse {
    /// Create an error envelope.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Fleet data as surfaced to the UI.
#[derive(Debug, Serialize)]
pub struct FleetInfoResponse {
    /// DOT number.
    pub dot_number: String,
    /// Legal name.
    pub legal_name: Option<String>,
    /// Verified truck count, when known.
    pub truck_units: Option<u32>,
    /// Verified driver count, when known.
    pub total_drivers: Option<u32>,
    /// Physical city.
    pub phy_city: Option<String>,
    /// Physical state.
    pub phy_state: Option<String>,
    /// MC number.
    pub mc_number: Option<u64>,
    /// Entity type.
    pub entity_type: Option<String>,
}

impl From<&FleetInfo> for FleetInfoResponse {
    fn from(info: &FleetInfo) -> Self {
        Self {
            dot_number: info.dot_number.to_string(),
            legal_name: info.legal_name.clone(),
            truck_units: info.truck_units.known().copied(),
            total_drivers: info.total_drivers.known().copied(),
            phy_city: info.physical_city.clone(),
            phy_state: info.physical_state.clone(),
            mc_number: info.mc_number,
            entity_type: info.entity_type.clone(),
        }
    }
}

/// One vetted driver.
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    /// The normalized capacity record.
    #[serde(flatten)]
    pub driver: crate::domain::freight::DriverRecord,
    /// Fleet data, when the registry had it.
    pub fleet_info: Option<FleetInfoResponse>,
    /// Why fleet data is absent, when it is.
    pub fleet_status: String,
}

impl From<&VettedDriver> for DriverResponse {
    fn from(vetted: &VettedDriver) -> Self {
        let (fleet_info, fleet_status) = match &vetted.fleet {
            Resolved::Known(info) => (Some(FleetInfoResponse::from(info)), "verified".to_string()),
            Resolved::Unknown => (None, "unverified".to_string()),
            Resolved::Failed(reason) => (None, format!("lookup failed: {reason}")),
        };
        Self {
            driver: vetted.driver.clone(),
            fleet_info,
            fleet_status,
        }
    }
}

/// Response for `POST /api/search-drivers`.
#[derive(Debug, Serialize)]
pub struct SearchDriversResponse {
    /// Vetted drivers in board order.
    pub drivers: Vec<DriverResponse>,
    /// Total matches upstream before filtering.
    pub total_count: u32,
    /// Drivers returned after filtering.
    pub returned_count: usize,
}

impl From<&RankedDrivers> for SearchDriversResponse {
    fn from(ranked: &RankedDrivers) -> Self {
        let drivers: Vec<DriverResponse> = ranked.drivers.iter().map(DriverResponse::from).collect();
        Self {
            returned_count: drivers.len(),
            total_count: ranked.total_available,
            drivers,
        }
    }
}

/// Market block on a ranked load.
#[derive(Debug, Serialize)]
pub struct MarketDataResponse {
    /// Destination state.
    pub state: Option<String>,
    /// Outbound loads from the destination.
    pub outbound_loads: Option<u32>,
    /// Trucks available in the destination.
    pub available_trucks: Option<u32>,
    /// Trucks per outbound load.
    pub supply_demand_ratio: Option<f64>,
    /// "resolved", "unavailable", or the failure reason.
    pub status: String,
}

impl From<&Resolved<MarketSignal>> for MarketDataResponse {
    fn from(market: &Resolved<MarketSignal>) -> Self {
        match market {
            Resolved::Known(signal) => Self {
                state: Some(signal.state.clone()),
                outbound_loads: Some(signal.outbound_loads),
                available_trucks: Some(signal.available_trucks),
                supply_demand_ratio: Some(signal.supply_demand_ratio()),
                status: "resolved".to_string(),
            },
            Resolved::Unknown => Self {
                state: None,
                outbound_loads: None,
                available_trucks: None,
                supply_demand_ratio: None,
                status: "unavailable".to_string(),
            },
            Resolved::Failed(reason) => Self {
                state: None,
                outbound_loads: None,
                available_trucks: None,
                supply_demand_ratio: None,
                status: format!("fetch failed: {reason}"),
            },
        }
    }
}

/// Score block on a ranked load.
#[derive(Debug, Serialize)]
pub struct CompositeDataResponse {
    /// Composite score in [0, 100].
    pub composite_score: u8,
    /// Recommendation label.
    pub recommendation: &'static str,
    /// Profit sub-score.
    pub profit_score: f64,
    /// Connectivity sub-score.
    pub connectivity_score: f64,
    /// Ease sub-score.
    pub ease_score: f64,
}

/// One ranked load.
#[derive(Debug, Serialize)]
pub struct LoadResponse {
    /// The normalized load record.
    #[serde(flatten)]
    pub load: crate::domain::freight::LoadRecord,
    /// Profit breakdown.
    pub profit_data: crate::domain::load_ranking::ProfitEstimate,
    /// Market snapshot.
    pub market_data: MarketDataResponse,
    /// Composite score.
    pub composite_data: CompositeDataResponse,
}

impl From<&RankedLoad> for LoadResponse {
    fn from(ranked: &RankedLoad) -> Self {
        Self {
            load: ranked.load.clone(),
            profit_data: ranked.profit,
            market_data: MarketDataResponse::from(&ranked.market),
            composite_data: CompositeDataResponse {
                composite_score: ranked.score.value,
                recommendation: ranked.score.recommendation.label(),
                profit_score: ranked.score.profit,
                connectivity_score: ranked.score.connectivity,
                ease_score: ranked.score.ease,
            },
        }
    }
}

/// Response for `POST /api/loads-for-driver`.
#[derive(Debug, Serialize)]
pub struct LoadsForDriverResponse {
    /// Ranked loads, best first.
    pub loads: Vec<LoadResponse>,
    /// Number of ranked loads.
    pub total_count: usize,
    /// Scoring method marker.
    pub analyzed_with: &'static str,
}

impl LoadsForDriverResponse {
    /// Build the response from ranked loads.
    #[must_use]
    pub fn new(ranked: &[RankedLoad]) -> Self {
        let loads: Vec<LoadResponse> = ranked.iter().map(LoadResponse::from).collect();
        Self {
            total_count: loads.len(),
            loads,
            analyzed_with: "KAYAAN Profit Score",
        }
    }
}
