//! Composite scoring and deterministic ranking of candidate loads.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::freight::{LoadRecord, MarketSignal};
use crate::domain::shared::Resolved;

use super::super::value_objects::composite_score::CompositeScore;
use super::super::value_objects::profit_estimate::ProfitEstimate;
use super::super::value_objects::scoring_config::ScoringConfig;
use super::market_scorer::MarketScorer;
use super::profit_scorer::ProfitScorer;

/// A load with its score attached, ready to surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLoad {
    /// The underlying load record.
    pub load: LoadRecord,
    /// Profit breakdown behind the profit sub-score.
    pub profit: ProfitEstimate,
    /// Destination market signal, as resolved for this call.
    pub market: Resolved<MarketSignal>,
    /// The KAYAAN Profit Score.
    pub score: CompositeScore,
}

/// Scores loads against market signals and sorts them.
///
/// Scoring is pure: every market fetch happens before `rank` is called and
/// failures arrive as `Resolved::Failed` entries in the signal map.
#[derive(Debug, Clone)]
pub struct LoadRanker {
    config: ScoringConfig,
}

impl LoadRanker {
    /// Create a ranker with an explicit parameter set.
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// The active parameter set.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one load against its destination's market signal.
    #[must_use]
    pub fn score_load(&self, load: LoadRecord, market: Resolved<MarketSignal>) -> RankedLoad {
        let profit_scorer = ProfitScorer::new(&self.config);
        let market_scorer = MarketScorer::new(&self.config);

        let profit = profit_scorer.estimate(&load);
        let score = CompositeScore::compute(
            &self.config.weights,
            profit_scorer.score(&profit),
            market_scorer.connectivity_score(&market),
            market_scorer.ease_score(&market),
        );

        RankedLoad {
            load,
            profit,
            market,
            score,
        }
    }

    /// Score every load and sort the result.
    ///
    /// Destinations missing from `signals` resolve to `Unknown`, which
    /// floors the market sub-scores without dropping the load. Ordering is
    /// composite score descending, ties broken by higher gross revenue,
    /// then by shorter total distance; the sort is stable so equal loads
    /// keep their input order.
    #[must_use]
    pub fn rank(
        &self,
        loads: Vec<LoadRecord>,
        signals: &HashMap<String, Resolved<MarketSignal>>,
    ) -> Vec<RankedLoad> {
        let mut ranked: Vec<RankedLoad> = loads
            .into_iter()
            .map(|load| {
                let market = load
                    .destination_state()
                    .and_then(|state| signals.get(state))
                    .cloned()
                    .unwrap_or(Resolved::Unknown);
                self.score_load(load, market)
            })
            .collect();

        ranked.sort_by(compare_ranked);
        ranked
    }
}

impl Default for LoadRanker {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Ranking order: score desc, revenue desc, total distance asc.
fn compare_ranked(a: &RankedLoad, b: &RankedLoad) -> Ordering {
    b.score
        .value
        .cmp(&a.score.value)
        .then_with(|| b.profit.total_revenue.total_cmp(&a.profit.total_revenue))
        .then_with(|| a.profit.total_miles.cmp(&b.profit.total_miles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::freight::{
        BrokerInfo, EquipmentType, FullPartial, RateInfo, ServiceFlags,
    };
    use crate::domain::shared::{MatchId, Place};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn load(id: &str, dest_state: &str, trip: u32, rate_cents_per_mile: i64) -> LoadRecord {
        LoadRecord {
            match_id: MatchId::new(id),
            reference_id: None,
            origin: Place::city_state("Houston", "TX"),
            destination: Some(Place::state_only(dest_state)),
            trip_miles: Some(trip),
            origin_deadhead_miles: Some(0),
            rate: RateInfo {
                estimated_rate_per_mile: Some(Decimal::new(rate_cents_per_mile, 2)),
                board_rate: None,
            },
            equipment: EquipmentType::Van,
            full_partial: Some(FullPartial::Full),
            max_weight_pounds: None,
            max_length_feet: None,
            commodity: None,
            pickup: None,
            broker: BrokerInfo::default(),
            service_flags: ServiceFlags::default(),
            comments: None,
            posting_id: None,
        }
    }

    fn strong_market(state: &str) -> (String, Resolved<MarketSignal>) {
        (
            state.to_string(),
            Resolved::Known(MarketSignal {
                state: state.to_string(),
                outbound_loads: 150,
                available_trucks: 40,
            }),
        )
    }

    #[test]
    fn higher_scores_rank_first() {
        let ranker = LoadRanker::default();
        let signals: HashMap<_, _> = [strong_market("GA"), strong_market("IL")].into();
        let loads = vec![load("cheap", "IL", 500, 200), load("rich", "GA", 500, 340)];

        let ranked = ranker.rank(loads, &signals);
        assert_eq!(ranked[0].load.match_id.as_str(), "rich");
        assert!(ranked[0].score.value >= ranked[1].score.value);
    }

    fn ranked_fixture(id: &str, score: u8, revenue: f64, total_miles: u32) -> RankedLoad {
        let ranker = LoadRanker::default();
        let mut ranked = ranker.score_load(load(id, "GA", total_miles, 200), Resolved::Unknown);
        ranked.score.value = score;
        ranked.profit.total_revenue = revenue;
        ranked.profit.total_miles = total_miles;
        ranked
    }

    #[test]
    fn revenue_breaks_score_ties() {
        let a = ranked_fixture("smaller", 70, 900.0, 500);
        let b = ranked_fixture("bigger", 70, 1200.0, 500);
        assert_eq!(compare_ranked(&b, &a), Ordering::Less);
        assert_eq!(compare_ranked(&a, &b), Ordering::Greater);
    }

    #[test]
    fn distance_breaks_revenue_ties() {
        // Loads A and B: same score, revenue 1000 each, 500 vs 300 miles.
        // B's shorter haul ranks first.
        let a = ranked_fixture("a", 70, 1000.0, 500);
        let b = ranked_fixture("b", 70, 1000.0, 300);

        let mut ordered = vec![a, b];
        ordered.sort_by(compare_ranked);
        assert_eq!(ordered[0].load.match_id.as_str(), "b");
        assert_eq!(ordered[1].load.match_id.as_str(), "a");
    }

    #[test]
    fn fully_tied_loads_keep_input_order() {
        let first = ranked_fixture("first", 70, 1000.0, 400);
        let second = ranked_fixture("second", 70, 1000.0, 400);
        let mut ordered = vec![first, second];
        ordered.sort_by(compare_ranked);
        assert_eq!(ordered[0].load.match_id.as_str(), "first");
    }

    #[test]
    fn missing_signal_never_drops_a_load() {
        let ranker = LoadRanker::default();
        let signals: HashMap<_, _> = [strong_market("GA")].into();
        let loads = vec![
            load("known-market", "GA", 500, 300),
            load("unknown-market", "ZZ", 500, 300),
        ];

        let ranked = ranker.rank(loads, &signals);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[1].load.match_id.as_str(), "unknown-market");
        assert_eq!(ranked[1].market, Resolved::Unknown);
    }

    #[test]
    fn degraded_market_scores_at_most_the_favorable_score() {
        let ranker = LoadRanker::default();
        let favorable: HashMap<_, _> = [strong_market("GA")].into();
        let degraded = HashMap::new();

        let with_market = ranker.rank(vec![load("l", "GA", 500, 300)], &favorable);
        let without = ranker.rank(vec![load("l", "GA", 500, 300)], &degraded);
        assert!(without[0].score.value <= with_market[0].score.value);
    }

    #[test]
    fn loads_without_destination_score_conservatively() {
        let ranker = LoadRanker::default();
        let signals: HashMap<_, _> = [strong_market("GA")].into();
        let mut open = load("open-dest", "GA", 500, 300);
        open.destination = None;

        let ranked = ranker.rank(vec![open], &signals);
        assert_eq!(ranked[0].market, Resolved::Unknown);
        assert!((ranked[0].score.connectivity - 0.0).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn composite_always_within_range(
            trip in 0_u32..3000,
            deadhead in 0_u32..300,
            rate_cents in 0_i64..900,
            outbound in 0_u32..500,
            trucks in 0_u32..500,
        ) {
            let ranker = LoadRanker::default();
            let mut record = load("p", "GA", trip, rate_cents);
            record.origin_deadhead_miles = Some(deadhead);
            let signals: HashMap<_, _> = [(
                "GA".to_string(),
                Resolved::Known(MarketSignal {
                    state: "GA".to_string(),
                    outbound_loads: outbound,
                    available_trucks: trucks,
                }),
            )].into();

            let ranked = ranker.rank(vec![record], &signals);
            prop_assert!(ranked[0].score.value <= 100);
        }

        #[test]
        fn losing_the_market_signal_never_raises_the_score(
            trip in 1_u32..2000,
            rate_cents in 50_i64..600,
            outbound in 0_u32..500,
            trucks in 0_u32..500,
        ) {
            let ranker = LoadRanker::default();
            let record = load("p", "GA", trip, rate_cents);
            let with_signal: HashMap<_, _> = [(
                "GA".to_string(),
                Resolved::Known(MarketSignal {
                    state: "GA".to_string(),
                    outbound_loads: outbound,
                    available_trucks: trucks,
                }),
            )].into();
            let without_signal = HashMap::new();

            let favorable = ranker.rank(vec![record.clone()], &with_signal);
            let degraded = ranker.rank(vec![record], &without_signal);
            prop_assert!(degraded[0].score.value <= favorable[0].score.value);
        }
    }
}
