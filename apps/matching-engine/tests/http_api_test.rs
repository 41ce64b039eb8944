//! HTTP surface tests: request validation, error mapping, and the full
//! router flow over stubbed ports.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use matching_engine::application::ports::{
    CarrierRegistryPort, DriverSearchQuery, DriverSearchResults, FreightBoardPort,
    LoadSearchQuery, MarketQuery, MarketSignalPort, RegistryError, SearchError, SignalError,
};
use matching_engine::application::services::{
    DriverFilterPipeline, FleetCache, FleetSizeResolver,
};
use matching_engine::application::use_cases::{RankDriversUseCase, RankLoadsUseCase};
use matching_engine::domain::carrier_vetting::{FleetInfo, SmallCarrierPolicy};
use matching_engine::domain::freight::{
    BrokerInfo, Contact, DriverRecord, EquipmentType, FullPartial, LoadRecord, MarketSignal,
    RateInfo, ServiceFlags, TruckCapacity,
};
use matching_engine::domain::load_ranking::LoadRanker;
use matching_engine::domain::shared::{DotNumber, MatchId, Place, Resolved, TimeWindow};
use matching_engine::infrastructure::http::{AppState, create_router};

struct StubBoard;

#[async_trait]
impl FreightBoardPort for StubBoard {
    async fn search_drivers(
        &self,
        _query: DriverSearchQuery,
    ) -> Result<DriverSearchResults, SearchError> {
        Ok(DriverSearchResults {
            drivers: vec![DriverRecord {
                match_id: MatchId::new("truck-1"),
                company_name: Some("Lone Star Haulers".to_string()),
                dot_number: DotNumber::from_raw("1234567"),
                mc_number: Some(654_321),
                equipment: EquipmentType::Van,
                origin: Place::city_state("Houston", "TX"),
                destination: None,
                availability: TimeWindow::new(None, None),
                capacity: TruckCapacity::default(),
                service_flags: ServiceFlags::default(),
                origin_deadhead_miles: Some(12),
                contact: Contact::default(),
                comments: None,
                posting_id: None,
                posting_expires: None,
            }],
            total_available: 1,
        })
    }

    async fn search_loads(&self, _query: LoadSearchQuery) -> Result<Vec<LoadRecord>, SearchError> {
        Ok(vec![LoadRecord {
            match_id: MatchId::new("load-1"),
            reference_id: Some("REF-1".to_string()),
            origin: Place::city_state("Houston", "TX"),
            destination: Some(Place::city_state("Atlanta", "GA")),
            trip_miles: Some(790),
            origin_deadhead_miles: Some(20),
            rate: RateInfo {
                estimated_rate_per_mile: Some(Decimal::new(285, 2)),
                board_rate: None,
            },
            equipment: EquipmentType::Van,
            full_partial: Some(FullPartial::Full),
            max_weight_pounds: Some(42_000),
            max_length_feet: Some(48),
            commodity: None,
            pickup: Some(TimeWindow::bounded(
                "2025-10-28T06:00:00Z".parse().unwrap(),
                "2025-10-28T18:00:00Z".parse().unwrap(),
            )),
            broker: BrokerInfo::default(),
            service_flags: ServiceFlags::default(),
            comments: None,
            posting_id: None,
        }])
    }
}

struct StubRegistry;

#[async_trait]
impl CarrierRegistryPort for StubRegistry {
    async fn fleet_snapshot(&self, dot: &DotNumber) -> Result<Option<FleetInfo>, RegistryError> {
        let mut info = FleetInfo::counts_unknown(dot.clone());
        info.truck_units = Resolved::Known(4);
        Ok(Some(info))
    }
}

struct StubMarket;

#[async_trait]
impl MarketSignalPort for StubMarket {
    async fn fetch_market_signal(&self, query: MarketQuery) -> Result<MarketSignal, SignalError> {
        Ok(MarketSignal {
            state: query.state,
            outbound_loads: 120,
            available_trucks: 40,
        })
    }
}

fn router() -> axum::Router {
    let board = Arc::new(StubBoard);
    let resolver = FleetSizeResolver::new(Arc::new(StubRegistry), Arc::new(FleetCache::new()));
    let state = AppState {
        rank_drivers: Arc::new(RankDriversUseCase::new(
            Arc::clone(&board),
            DriverFilterPipeline::new(resolver, SmallCarrierPolicy::default()),
        )),
        rank_loads: Arc::new(RankLoadsUseCase::new(
            board,
            Arc::new(StubMarket),
            LoadRanker::default(),
        )),
        version: "test".to_string(),
    };
    create_router(state)
}

async fn post_json(router: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn health_reports_version() {
    let response = router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], "test");
}

#[tokio::test]
async fn search_drivers_requires_origin_state() {
    let (status, body) = post_json(router(), "/api/search-drivers", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("origin_state"));
}

#[tokio::test]
async fn search_drivers_returns_vetted_drivers() {
    let (status, body) = post_json(
        router(),
        "/api/search-drivers",
        json!({
            "origin_state": "TX",
            "origin_city": "Houston",
            "equipment_types": ["V"],
            "limit": 25
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["returned_count"], 1);
    let driver = &body["drivers"][0];
    assert_eq!(driver["fleet_status"], "verified");
    assert_eq!(driver["fleet_info"]["truck_units"], 4);
}

#[tokio::test]
async fn loads_for_driver_requires_city() {
    let (status, body) = post_json(
        router(),
        "/api/loads-for-driver",
        json!({"driver_location_state": "TX", "driver_location_city": "N/A"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("driver_location_city"));
}

#[tokio::test]
async fn loads_for_driver_returns_scored_loads() {
    let (status, body) = post_json(
        router(),
        "/api/loads-for-driver",
        json!({
            "driver_location_state": "TX",
            "driver_location_city": "Houston",
            "equipment_type": "V",
            "filters": {"load_type": "FULL"}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["analyzed_with"], "KAYAAN Profit Score");
    let load = &body["loads"][0];
    assert_eq!(load["market_data"]["status"], "resolved");
    let score = load["composite_data"]["composite_score"].as_u64().unwrap();
    assert!(score <= 100);
    assert!(load["composite_data"]["recommendation"].is_string());
}
