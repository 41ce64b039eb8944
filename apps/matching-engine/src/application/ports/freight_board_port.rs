//! Freight Board Port (Driven Port)
//!
//! Interface for the load-board provider: capacity (driver) search and
//! load search. Authentication is the adapter's concern; auth failures
//! surface here as [`SearchError::Auth`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::freight::{DriverRecord, EquipmentType, LoadRecord};
use crate::domain::shared::{Place, TimeWindow};

/// Hard cap on records per search call; higher limits are rejected
/// upstream, so the engine clamps rather than forwards.
pub const MAX_SEARCH_LIMIT: u32 = 150;

/// Query for available capacity (drivers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverSearchQuery {
    /// Origin city, when searching at city granularity.
    pub origin_city: Option<String>,
    /// Origin state (required).
    pub origin_state: String,
    /// Equipment types to match.
    pub equipment: Vec<EquipmentType>,
    /// Required driver availability overlap, if any.
    pub availability: Option<TimeWindow>,
    /// Restrict to drivers preferring this destination state.
    pub destination_state: Option<String>,
    /// Maximum origin deadhead in miles.
    pub max_deadhead_miles: Option<u32>,
    /// Maximum records to return; clamped to [`MAX_SEARCH_LIMIT`].
    pub limit: u32,
}

impl DriverSearchQuery {
    /// Minimal state-level query.
    #[must_use]
    pub fn for_state(origin_state: impl Into<String>) -> Self {
        Self {
            origin_city: None,
            origin_state: origin_state.into(),
            equipment: vec![EquipmentType::Van],
            availability: None,
            destination_state: None,
            max_deadhead_miles: None,
            limit: MAX_SEARCH_LIMIT,
        }
    }

    /// The limit with the upstream cap applied.
    #[must_use]
    pub fn capped_limit(&self) -> u32 {
        self.limit.min(MAX_SEARCH_LIMIT)
    }
}

/// Capacity search results with the board's total match count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverSearchResults {
    /// Returned records, in board order.
    pub drivers: Vec<DriverRecord>,
    /// Total matches available upstream (may exceed `drivers.len()`).
    pub total_available: u32,
}

/// Query for loads available from a driver's location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSearchQuery {
    /// The driver's current location (city and state).
    pub origin: Place,
    /// The driver's equipment.
    pub equipment: EquipmentType,
    /// Restrict to loads delivering into this state.
    pub destination_state: Option<String>,
    /// Maximum origin deadhead in miles.
    pub max_deadhead_miles: Option<u32>,
    /// Maximum records to return; clamped to [`MAX_SEARCH_LIMIT`].
    pub limit: u32,
}

impl LoadSearchQuery {
    /// The limit with the upstream cap applied.
    #[must_use]
    pub fn capped_limit(&self) -> u32 {
        self.limit.min(MAX_SEARCH_LIMIT)
    }
}

/// Authentication failure against the freight board.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// Credentials rejected by the identity service.
    #[error("Credentials rejected for {environment} environment: {detail}")]
    InvalidCredentials {
        /// Environment the credentials were presented to.
        environment: String,
        /// Upstream rejection detail.
        detail: String,
    },

    /// Token issuance failed for a non-credential reason.
    #[error("Token issuance failed: {message}")]
    TokenIssuance {
        /// Error details.
        message: String,
    },

    /// Transport-level failure reaching the identity service.
    #[error("Identity service unreachable: {message}")]
    Network {
        /// Error details.
        message: String,
    },
}

/// Search failure against the freight board. Fatal to the request.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Authentication failed before the search could run.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The board rejected the search request.
    #[error("Search rejected (HTTP {status}): {detail}")]
    Rejected {
        /// Upstream HTTP status.
        status: u16,
        /// Upstream error detail.
        detail: String,
    },

    /// Transport-level failure.
    #[error("Freight board unreachable: {message}")]
    Network {
        /// Error details.
        message: String,
    },

    /// The board answered with a payload we could not interpret.
    #[error("Malformed search response: {message}")]
    MalformedResponse {
        /// Error details.
        message: String,
    },
}

/// Port for freight-board searches.
#[async_trait]
pub trait FreightBoardPort: Send + Sync {
    /// Search for available capacity around an origin.
    async fn search_drivers(
        &self,
        query: DriverSearchQuery,
    ) -> Result<DriverSearchResults, SearchError>;

    /// Search for loads available from a driver's location.
    async fn search_loads(&self, query: LoadSearchQuery) -> Result<Vec<LoadRecord>, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_limit_enforces_upstream_maximum() {
        let mut query = DriverSearchQuery::for_state("TX");
        query.limit = 500;
        assert_eq!(query.capped_limit(), MAX_SEARCH_LIMIT);

        query.limit = 25;
        assert_eq!(query.capped_limit(), 25);
    }

    #[test]
    fn load_query_caps_too() {
        let query = LoadSearchQuery {
            origin: Place::city_state("Houston", "TX"),
            equipment: EquipmentType::Van,
            destination_state: None,
            max_deadhead_miles: None,
            limit: 1000,
        };
        assert_eq!(query.capped_limit(), MAX_SEARCH_LIMIT);
    }

    #[test]
    fn search_error_wraps_auth_error() {
        let auth = AuthError::TokenIssuance {
            message: "org token rejected".to_string(),
        };
        let error: SearchError = auth.into();
        assert!(matches!(error, SearchError::Auth(_)));
    }
}
