//! Rank Loads Use Case
//!
//! Load search, availability/type filtering, market enrichment, and
//! KAYAAN Profit Score ranking for one selected driver.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;

use crate::application::ports::{
    FreightBoardPort, LoadSearchQuery, MarketQuery, MarketSignalPort, SearchError,
};
use crate::domain::freight::MarketSignal;
use crate::domain::load_ranking::{LoadRanker, LoadTypeFilter, RankedLoad, filter_loads};
use crate::domain::shared::{Resolved, TimeWindow};

/// Cap on distinct destination markets analyzed per ranking call; keeps
/// the per-request fan-out to the board bounded.
pub const MAX_MARKET_DESTINATIONS: usize = 10;

/// Request for a ranked load list.
#[derive(Debug, Clone)]
pub struct LoadRankingRequest {
    /// Load search parameters (driver location, equipment, board filters).
    pub search: LoadSearchQuery,
    /// The driver's availability window; unbounded when unconstrained.
    pub driver_availability: TimeWindow,
    /// Full/partial restriction.
    pub load_type: LoadTypeFilter,
}

/// Use case for ranking loads for a selected driver.
pub struct RankLoadsUseCase<F, M>
where
    F: FreightBoardPort,
    M: MarketSignalPort,
{
    board: Arc<F>,
    market: Arc<M>,
    ranker: LoadRanker,
}

impl<F, M> RankLoadsUseCase<F, M>
where
    F: FreightBoardPort,
    M: MarketSignalPort,
{
    /// Create a new RankLoadsUseCase.
    pub const fn new(board: Arc<F>, market: Arc<M>, ranker: LoadRanker) -> Self {
        Self {
            board,
            market,
            ranker,
        }
    }

    /// Execute the use case.
    ///
    /// Only the load search itself can fail; market-signal failures
    /// degrade the affected loads' scores and are logged.
    pub async fn execute(&self, request: LoadRankingRequest) -> Result<Vec<RankedLoad>, SearchError> {
        let mut search = request.search;
        search.limit = search.capped_limit();

        tracing::info!(
            origin = %search.origin,
            equipment = %search.equipment,
            limit = search.limit,
            "Searching loads for driver"
        );

        let loads = self.board.search_loads(search).await?;
        let found = loads.len();

        let loads = filter_loads(loads, &request.driver_availability, request.load_type);
        tracing::info!(
            found,
            rankable = loads.len(),
            "Load filters applied"
        );

        let signals = self.fetch_market_signals(&loads).await;
        let ranked = self.ranker.rank(loads, &signals);

        tracing::info!(ranked = ranked.len(), "Load ranking complete");
        Ok(ranked)
    }

    /// Fetch market signals for the distinct destination states, capped at
    /// [`MAX_MARKET_DESTINATIONS`], concurrently.
    ///
    /// States beyond the cap simply stay absent from the map; their loads
    /// score with conservative market defaults rather than being dropped.
    async fn fetch_market_signals(
        &self,
        loads: &[crate::domain::freight::LoadRecord],
    ) -> HashMap<String, Resolved<MarketSignal>> {
        let mut states: Vec<String> = Vec::new();
        for load in loads {
            if let Some(state) = load.destination_state()
                && !states.iter().any(|seen| seen == state)
            {
                states.push(state.to_string());
            }
        }

        if states.len() > MAX_MARKET_DESTINATIONS {
            tracing::info!(
                distinct = states.len(),
                analyzed = MAX_MARKET_DESTINATIONS,
                "Capping market analysis to the first destinations seen"
            );
            states.truncate(MAX_MARKET_DESTINATIONS);
        }

        let fetches = states.iter().map(|state| {
            let market = Arc::clone(&self.market);
            let query = MarketQuery::for_state(state.clone());
            async move { (state.clone(), market.fetch_market_signal(query).await) }
        });

        join_all(fetches)
            .await
            .into_iter()
            .map(|(state, outcome)| match outcome {
                Ok(signal) => (state, Resolved::Known(signal)),
                Err(error) => {
                    tracing::warn!(
                        state = %state,
                        error = %error,
                        "Market signal fetch failed; scoring destination conservatively"
                    );
                    (state, Resolved::Failed(error.to_string()))
                }
            })
            .collect()
    }
}
