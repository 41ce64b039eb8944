//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases. Handlers
//! only decode requests, call use cases, and encode responses; no ranking
//! or filtering logic lives here.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::application::ports::{
    AuthError, CarrierRegistryPort, DriverSearchQuery, FreightBoardPort, LoadSearchQuery,
    MAX_SEARCH_LIMIT, MarketSignalPort, SearchError,
};
use crate::application::use_cases::{LoadRankingRequest, RankDriversUseCase, RankLoadsUseCase};
use crate::domain::freight::EquipmentType;
use crate::domain::load_ranking::LoadTypeFilter;
use crate::domain::shared::{Place, TimeWindow};

use super::request::{LoadsForDriverRequest, SearchDriversRequest};
use super::response::{
    ErrorResponse, HealthResponse, LoadsForDriverResponse, SearchDriversResponse,
};

/// Default load search limit when the caller does not set one.
const DEFAULT_LOAD_LIMIT: u32 = 50;

/// Application state shared across handlers.
pub struct AppState<F, R, M>
where
    F: FreightBoardPort,
    R: CarrierRegistryPort,
    M: MarketSignalPort,
{
    /// Use case for searching and vetting capacity.
    pub rank_drivers: Arc<RankDriversUseCase<F, R>>,
    /// Use case for ranking loads.
    pub rank_loads: Arc<RankLoadsUseCase<F, M>>,
    /// Application version.
    pub version: String,
}

impl<F, R, M> Clone for AppState<F, R, M>
where
    F: FreightBoardPort,
    R: CarrierRegistryPort,
    M: MarketSignalPort,
{
    fn clone(&self) -> Self {
        Self {
            rank_drivers: Arc::clone(&self.rank_drivers),
            rank_loads: Arc::clone(&self.rank_loads),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<F, R, M>(state: AppState<F, R, M>) -> Router
where
    F: FreightBoardPort + 'static,
    R: CarrierRegistryPort + 'static,
    M: MarketSignalPort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/search-drivers", post(search_drivers))
        .route("/api/loads-for-driver", post(loads_for_driver))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<F, R, M>(State(state): State<AppState<F, R, M>>) -> impl IntoResponse
where
    F: FreightBoardPort,
    R: CarrierRegistryPort,
    M: MarketSignalPort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Capacity search endpoint.
async fn search_drivers<F, R, M>(
    State(state): State<AppState<F, R, M>>,
    Json(request): Json<SearchDriversRequest>,
) -> impl IntoResponse
where
    F: FreightBoardPort,
    R: CarrierRegistryPort,
    M: MarketSignalPort,
{
    let Some(origin_state) = request
        .origin_state
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        return bad_request("origin_state is required");
    };

    let filters = request.filters.unwrap_or_default();
    let availability = if filters.availability_start.is_some() || filters.availability_end.is_some()
    {
        Some(TimeWindow::new(
            filters.availability_start,
            filters.availability_end,
        ))
    } else {
        None
    };

    let query = DriverSearchQuery {
        origin_city: request.origin_city.filter(|city| !city.trim().is_empty()),
        origin_state: origin_state.to_string(),
        equipment: equipment_list(request.equipment_types),
        availability,
        destination_state: filters.destination_state,
        max_deadhead_miles: filters.max_deadhead,
        limit: request.limit.unwrap_or(MAX_SEARCH_LIMIT),
    };

    match state.rank_drivers.execute(query).await {
        Ok(ranked) => (StatusCode::OK, Json(SearchDriversResponse::from(&ranked))).into_response(),
        Err(error) => search_failure(&error),
    }
}

/// Load ranking endpoint.
async fn loads_for_driver<F, R, M>(
    State(state): State<AppState<F, R, M>>,
    Json(request): Json<LoadsForDriverRequest>,
) -> impl IntoResponse
where
    F: FreightBoardPort,
    R: CarrierRegistryPort,
    M: MarketSignalPort,
{
    let Some(origin_state) = request
        .driver_location_state
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        return bad_request("driver_location_state is required");
    };
    let Some(origin_city) = request
        .driver_location_city
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "N/A")
    else {
        return bad_request("driver_location_city is required and must be a valid city name");
    };

    let filters = request.filters.unwrap_or_default();
    let availability = request.driver_availability.map_or_else(
        || TimeWindow::new(None, None),
        |body| TimeWindow::new(body.earliest_when, body.latest_when),
    );

    let ranking_request = LoadRankingRequest {
        search: LoadSearchQuery {
            origin: Place::city_state(origin_city, origin_state),
            equipment: request
                .equipment_type
                .as_deref()
                .map_or(EquipmentType::Van, EquipmentType::from_code),
            destination_state: filters.destination_state,
            max_deadhead_miles: filters.max_deadhead,
            limit: request.limit.unwrap_or(DEFAULT_LOAD_LIMIT),
        },
        driver_availability: availability,
        load_type: filters.load_type.unwrap_or(LoadTypeFilter::Both),
    };

    match state.rank_loads.execute(ranking_request).await {
        Ok(ranked) => (StatusCode::OK, Json(LoadsForDriverResponse::new(&ranked))).into_response(),
        Err(error) => search_failure(&error),
    }
}

fn equipment_list(codes: Option<Vec<String>>) -> Vec<EquipmentType> {
    let codes = codes.unwrap_or_default();
    if codes.is_empty() {
        return vec![EquipmentType::Van];
    }
    codes.iter().map(|code| EquipmentType::from_code(code)).collect()
}

fn bad_request(message: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}

fn search_failure(error: &SearchError) -> axum::response::Response {
    let status = match error {
        SearchError::Auth(AuthError::InvalidCredentials { .. }) => StatusCode::UNAUTHORIZED,
        SearchError::Auth(_) | SearchError::Network { .. } | SearchError::Rejected { .. } => {
            StatusCode::BAD_GATEWAY
        }
        SearchError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
    };
    tracing::error!(error = %error, "Search request failed");
    (status, Json(ErrorResponse::new(error.to_string()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipment_list_defaults_to_van() {
        assert_eq!(equipment_list(None), vec![EquipmentType::Van]);
        assert_eq!(equipment_list(Some(vec![])), vec![EquipmentType::Van]);
        assert_eq!(
            equipment_list(Some(vec!["R".to_string(), "F".to_string()])),
            vec![EquipmentType::Reefer, EquipmentType::Flatbed]
        );
    }

    #[test]
    fn auth_failures_map_to_401() {
        let error = SearchError::Auth(AuthError::InvalidCredentials {
            environment: "STAGING".to_string(),
            detail: "bad password".to_string(),
        });
        let response = search_failure(&error);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn upstream_failures_map_to_502() {
        let error = SearchError::Rejected {
            status: 500,
            detail: "boom".to_string(),
        };
        assert_eq!(search_failure(&error).status(), StatusCode::BAD_GATEWAY);
    }
}
