//! DAT freight-board adapter implementing the search and market ports.
//!
//! Searches are a two-call flow: create a query, then fetch its matches.
//! Market signals reuse the same flow with counts-only fetches. No call is
//! retried; upstream failures surface as typed errors immediately.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::application::ports::{
    DriverSearchQuery, DriverSearchResults, FreightBoardPort, LoadSearchQuery, MarketQuery,
    MarketSignalPort, SearchError, SignalError,
};
use crate::domain::freight::{EquipmentType, LoadRecord, MarketSignal};

use super::api_types::{
    AreaCriteria, AssetType, Audience, AvailabilityCriteria, CreateQueryRequest,
    CreateQueryResponse, EquipmentCriteria, LaneCriteria, LaneEnd, MatchRecord, PlaceCriteria,
    QueryMatchesResponse, SearchCriteria,
};
use super::auth::TokenManager;
use super::config::DatConfig;

/// DAT freight-board adapter.
///
/// Implements [`FreightBoardPort`] and [`MarketSignalPort`] over the
/// search/v3 API.
pub struct DatFreightBoardAdapter {
    http: Client,
    auth: TokenManager,
    freight_base_url: String,
    config: DatConfig,
}

impl DatFreightBoardAdapter {
    /// Create a new adapter from config.
    pub fn new(config: DatConfig) -> Result<Self, SearchError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::Network {
                message: e.to_string(),
            })?;
        let auth = TokenManager::new(http.clone(), &config);

        Ok(Self {
            http,
            auth,
            freight_base_url: config.freight_base_url().to_string(),
            config,
        })
    }

    /// Override base URLs (tests).
    #[must_use]
    pub fn with_base_urls(
        mut self,
        identity_base_url: impl Into<String>,
        freight_base_url: impl Into<String>,
    ) -> Self {
        self.auth = self.auth.with_identity_base_url(identity_base_url);
        self.freight_base_url = freight_base_url.into();
        self
    }

    async fn create_query(&self, criteria: SearchCriteria) -> Result<String, SearchError> {
        let bearer = self.auth.bearer_token().await?;
        let url = format!("{}/search/v3/queries", self.freight_base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&bearer)
            .json(&CreateQueryRequest { criteria })
            .send()
            .await
            .map_err(|e| SearchError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !matches!(status, StatusCode::OK | StatusCode::CREATED) {
            let detail = truncate(&response.text().await.unwrap_or_default());
            return Err(SearchError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let created: CreateQueryResponse =
            response.json().await.map_err(|e| SearchError::MalformedResponse {
                message: e.to_string(),
            })?;

        created.query_id.ok_or_else(|| SearchError::MalformedResponse {
            message: "query creation response carried no queryId".to_string(),
        })
    }

    async fn fetch_matches(
        &self,
        query_id: &str,
        limit: u32,
        counts_only: bool,
    ) -> Result<QueryMatchesResponse, SearchError> {
        let bearer = self.auth.bearer_token().await?;
        let url = format!("{}/search/v3/queryMatches/{query_id}", self.freight_base_url);

        let mut request = self.http.get(&url).bearer_auth(&bearer);
        request = if counts_only {
            request.query(&[("staticView", "JUST_COUNTS"), ("limit", "1")])
        } else {
            request.query(&[("limit", limit.to_string().as_str())])
        };

        let response = request.send().await.map_err(|e| SearchError::Network {
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = truncate(&response.text().await.unwrap_or_default());
            return Err(SearchError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        response.json().await.map_err(|e| SearchError::MalformedResponse {
            message: e.to_string(),
        })
    }

    /// Run a counts-only search and return the total match count.
    async fn count_matches(&self, criteria: SearchCriteria) -> Result<u32, SearchError> {
        let query_id = self.create_query(criteria).await?;
        let matches = self.fetch_matches(&query_id, 1, true).await?;
        Ok(matches.match_counts.total())
    }

    fn base_criteria(&self, lane: LaneCriteria, counts_only: bool) -> SearchCriteria {
        SearchCriteria {
            lane,
            max_age_minutes: self.config.max_age_minutes,
            availability: None,
            max_origin_deadhead_miles: None,
            audience: Audience::default(),
            counts_only,
            include_open_destination_trucks: None,
        }
    }
}

fn equipment_criteria(equipment: &[EquipmentType]) -> EquipmentCriteria {
    EquipmentCriteria {
        types: equipment.iter().map(|e| e.code().to_string()).collect(),
    }
}

fn destination_for(state: Option<&String>) -> LaneEnd {
    state.map_or_else(LaneEnd::open, |state| {
        LaneEnd::Area(AreaCriteria {
            states: vec![state.clone()],
        })
    })
}

fn truncate(body: &str) -> String {
    const MAX: usize = 500;
    if body.len() <= MAX {
        body.to_string()
    } else {
        body.chars().take(MAX).collect()
    }
}

#[async_trait]
impl FreightBoardPort for DatFreightBoardAdapter {
    async fn search_drivers(
        &self,
        query: DriverSearchQuery,
    ) -> Result<DriverSearchResults, SearchError> {
        let origin = match &query.origin_city {
            Some(city) => LaneEnd::Place(PlaceCriteria {
                city: city.clone(),
                state_prov: query.origin_state.clone(),
            }),
            None => LaneEnd::Area(AreaCriteria {
                states: vec![query.origin_state.clone()],
            }),
        };

        let lane = LaneCriteria {
            asset_type: AssetType::Truck,
            equipment: equipment_criteria(&query.equipment),
            origin: Some(origin),
            destination: destination_for(query.destination_state.as_ref()),
        };

        let mut criteria = self.base_criteria(lane, false);
        criteria.include_open_destination_trucks = Some(true);
        criteria.max_origin_deadhead_miles = query.max_deadhead_miles;
        criteria.availability = query.availability.map(|window| AvailabilityCriteria {
            earliest_when: window.earliest,
            latest_when: window.latest,
        });

        tracing::debug!(
            origin_state = %query.origin_state,
            origin_city = ?query.origin_city,
            "Creating capacity search query"
        );
        let query_id = self.create_query(criteria).await?;
        let matches = self
            .fetch_matches(&query_id, query.capped_limit(), false)
            .await?;

        let total_available = matches.match_counts.total();
        let drivers = matches
            .matches
            .into_iter()
            .map(MatchRecord::into_driver_record)
            .collect();

        Ok(DriverSearchResults {
            drivers,
            total_available,
        })
    }

    async fn search_loads(&self, query: LoadSearchQuery) -> Result<Vec<LoadRecord>, SearchError> {
        let Some(city) = query.origin.city.clone() else {
            return Err(SearchError::Rejected {
                status: 400,
                detail: "load search requires a city-level origin".to_string(),
            });
        };

        let lane = LaneCriteria {
            asset_type: AssetType::Shipment,
            equipment: equipment_criteria(std::slice::from_ref(&query.equipment)),
            origin: Some(LaneEnd::Place(PlaceCriteria {
                city,
                state_prov: query.origin.state.clone(),
            })),
            destination: destination_for(query.destination_state.as_ref()),
        };

        let mut criteria = self.base_criteria(lane, false);
        criteria.max_origin_deadhead_miles = Some(
            query
                .max_deadhead_miles
                .unwrap_or(self.config.default_load_deadhead_miles),
        );

        tracing::debug!(origin = %query.origin, "Creating load search query");
        let query_id = self.create_query(criteria).await?;
        let matches = self
            .fetch_matches(&query_id, query.capped_limit(), false)
            .await?;

        Ok(matches
            .matches
            .into_iter()
            .map(MatchRecord::into_load_record)
            .collect())
    }
}

#[async_trait]
impl MarketSignalPort for DatFreightBoardAdapter {
    async fn fetch_market_signal(&self, query: MarketQuery) -> Result<MarketSignal, SignalError> {
        let outbound_lane = LaneCriteria {
            asset_type: AssetType::Shipment,
            equipment: equipment_criteria(&query.equipment),
            origin: Some(LaneEnd::Area(AreaCriteria {
                states: vec![query.state.clone()],
            })),
            destination: LaneEnd::open(),
        };
        let mut truck_criteria = self.base_criteria(
            LaneCriteria {
                asset_type: AssetType::Truck,
                equipment: equipment_criteria(&query.equipment),
                origin: Some(LaneEnd::Area(AreaCriteria {
                    states: vec![query.state.clone()],
                })),
                destination: LaneEnd::open(),
            },
            true,
        );
        truck_criteria.include_open_destination_trucks = Some(true);

        let outbound_loads = self
            .count_matches(self.base_criteria(outbound_lane, true))
            .await
            .map_err(signal_error)?;
        let available_trucks = self.count_matches(truck_criteria).await.map_err(signal_error)?;

        tracing::debug!(
            state = %query.state,
            outbound_loads,
            available_trucks,
            "Market signal fetched"
        );

        Ok(MarketSignal {
            state: query.state,
            outbound_loads,
            available_trucks,
        })
    }
}

fn signal_error(error: SearchError) -> SignalError {
    match error {
        SearchError::Auth(auth) => SignalError::Network {
            message: auth.to_string(),
        },
        SearchError::Rejected { status, detail } => SignalError::Rejected { status, detail },
        SearchError::Network { message } => SignalError::Network { message },
        SearchError::MalformedResponse { message } => SignalError::MalformedResponse { message },
    }
}
