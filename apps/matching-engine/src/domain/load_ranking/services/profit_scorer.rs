//! Profit estimation and profit sub-score.

use rust_decimal::prelude::ToPrimitive;

use crate::domain::freight::{LoadRecord, RateBasis};

use super::super::value_objects::profit_estimate::{ProfitEstimate, round_cents};
use super::super::value_objects::scoring_config::{CostModel, ScoringConfig};

/// Computes the economics of a load and maps them onto [0, 100].
///
/// Pure and synchronous: all market I/O happens before scoring.
#[derive(Debug, Clone, Copy)]
pub struct ProfitScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> ProfitScorer<'a> {
    /// Create a scorer over a parameter set.
    #[must_use]
    pub const fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Estimate revenue, costs, and per-mile profit for a load.
    ///
    /// Rate preference order: board-estimated rate per mile, then the
    /// posted rate (converted from flat using loaded miles), then the
    /// configured fallback for the load's equipment and trip length.
    #[must_use]
    pub fn estimate(&self, load: &LoadRecord) -> ProfitEstimate {
        let trip_miles = load.trip_miles.unwrap_or(0);
        let deadhead_miles = load.origin_deadhead_miles.unwrap_or(0);
        let total_miles = trip_miles + deadhead_miles;
        let trip = f64::from(trip_miles);
        let total = f64::from(total_miles);

        let (rate_per_mile, rate_assumed) = self.effective_rate(load, trip_miles);

        let total_revenue = rate_per_mile * trip;
        let costs = &self.config.costs;
        let fuel_cost =
            (total / CostModel::miles_per_gallon(&load.equipment)) * costs.fuel_price_per_gallon;
        let ops_cost = total * costs.ops_cost_per_mile;
        let net_profit = total_revenue - fuel_cost - ops_cost;
        let profit_per_mile = net_profit / total.max(1.0);

        ProfitEstimate {
            rate_per_mile: round_cents(rate_per_mile),
            total_revenue: round_cents(total_revenue),
            fuel_cost: round_cents(fuel_cost),
            ops_cost: round_cents(ops_cost),
            net_profit: round_cents(net_profit),
            profit_per_mile: round_cents(profit_per_mile),
            trip_miles,
            deadhead_miles,
            total_miles,
            rate_assumed,
        }
    }

    /// Profit sub-score in [0, 100] for an estimate.
    #[must_use]
    pub fn score(&self, estimate: &ProfitEstimate) -> f64 {
        let bands = &self.config.profit;
        let combined = bands.profit_per_mile_weight * bands.profit_per_mile.score(estimate.profit_per_mile)
            + bands.rate_per_mile_weight * bands.rate_per_mile.score(estimate.rate_per_mile)
            + bands.revenue_weight * bands.revenue.score(estimate.total_revenue);
        let factor = bands.distance.factor(f64::from(estimate.total_miles));
        (combined * factor).clamp(0.0, 100.0)
    }

    fn effective_rate(&self, load: &LoadRecord, trip_miles: u32) -> (f64, bool) {
        if let Some(rate) = load.rate.estimated_rate_per_mile
            && let Some(rate) = rate.to_f64()
            && rate > 0.0
        {
            return (rate, false);
        }

        if let Some(board) = load.rate.board_rate
            && let Some(amount) = board.amount_usd.to_f64()
            && amount > 0.0
        {
            match board.basis {
                RateBasis::PerMile => return (amount, false),
                RateBasis::Flat if trip_miles > 0 => {
                    return (amount / f64::from(trip_miles), false);
                }
                RateBasis::Flat => {}
            }
        }

        (
            self.config
                .fallback_rates
                .rate_for(&load.equipment, trip_miles),
            true,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::freight::{
        BoardRate, BrokerInfo, EquipmentType, FullPartial, RateInfo, ServiceFlags,
    };
    use crate::domain::shared::{MatchId, Place};
    use rust_decimal::Decimal;

    fn load(trip: u32, deadhead: u32, rate: RateInfo) -> LoadRecord {
        LoadRecord {
            match_id: MatchId::new("m-1"),
            reference_id: None,
            origin: Place::city_state("Houston", "TX"),
            destination: Some(Place::city_state("Atlanta", "GA")),
            trip_miles: Some(trip),
            origin_deadhead_miles: Some(deadhead),
            rate,
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

    #[test]
    fn estimate_prefers_board_estimated_rate() {
        let config = ScoringConfig::default();
        let scorer = ProfitScorer::new(&config);
        let rate = RateInfo {
            estimated_rate_per_mile: Some(Decimal::new(30, 1)), // 3.00
            board_rate: Some(BoardRate {
                amount_usd: Decimal::new(1000, 0),
                basis: RateBasis::Flat,
            }),
        };
        let estimate = scorer.estimate(&load(500, 0, rate));
        assert!((estimate.rate_per_mile - 3.0).abs() < f64::EPSILON);
        assert!((estimate.total_revenue - 1500.0).abs() < f64::EPSILON);
        assert!(!estimate.rate_assumed);
    }

    #[test]
    fn estimate_converts_flat_rate_to_per_mile() {
        let config = ScoringConfig::default();
        let scorer = ProfitScorer::new(&config);
        let rate = RateInfo {
            estimated_rate_per_mile: None,
            board_rate: Some(BoardRate {
                amount_usd: Decimal::new(1250, 0),
                basis: RateBasis::Flat,
            }),
        };
        let estimate = scorer.estimate(&load(500, 0, rate));
        assert!((estimate.rate_per_mile - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn estimate_falls_back_when_no_rate_posted() {
        let config = ScoringConfig::default();
        let scorer = ProfitScorer::new(&config);
        let estimate = scorer.estimate(&load(400, 0, RateInfo::default()));
        // Dry van, short haul fallback.
        assert!((estimate.rate_per_mile - 2.70).abs() < f64::EPSILON);
        assert!(estimate.rate_assumed);
    }

    #[test]
    fn estimate_costs_cover_deadhead_miles() {
        let config = ScoringConfig::default();
        let scorer = ProfitScorer::new(&config);
        let rate = RateInfo {
            estimated_rate_per_mile: Some(Decimal::new(25, 1)),
            board_rate: None,
        };
        let with_deadhead = scorer.estimate(&load(500, 100, rate));
        let without = scorer.estimate(&load(500, 0, rate));
        // Same revenue, more miles to cover.
        assert!((with_deadhead.total_revenue - without.total_revenue).abs() < f64::EPSILON);
        assert!(with_deadhead.net_profit < without.net_profit);
        assert_eq!(with_deadhead.total_miles, 600);
    }

    #[test]
    fn score_is_monotone_in_profit_per_mile() {
        let config = ScoringConfig::default();
        let scorer = ProfitScorer::new(&config);
        let low = RateInfo {
            estimated_rate_per_mile: Some(Decimal::new(20, 1)),
            board_rate: None,
        };
        let high = RateInfo {
            estimated_rate_per_mile: Some(Decimal::new(35, 1)),
            board_rate: None,
        };
        let low_score = scorer.score(&scorer.estimate(&load(500, 0, low)));
        let high_score = scorer.score(&scorer.estimate(&load(500, 0, high)));
        assert!(high_score > low_score);
    }

    #[test]
    fn score_penalizes_very_short_hauls() {
        let config = ScoringConfig::default();
        let scorer = ProfitScorer::new(&config);
        let rate = RateInfo {
            estimated_rate_per_mile: Some(Decimal::new(30, 1)),
            board_rate: None,
        };
        let short = scorer.estimate(&load(60, 0, rate));
        let target = scorer.estimate(&load(500, 0, rate));
        let short_ppm_score = config.profit.profit_per_mile.score(short.profit_per_mile);
        let target_ppm_score = config.profit.profit_per_mile.score(target.profit_per_mile);
        // The short haul's raw per-mile economics are no better, and the
        // distance factor pushes its sub-score further down.
        assert!(short_ppm_score <= target_ppm_score + f64::EPSILON);
        assert!(scorer.score(&short) < scorer.score(&target));
    }

    #[test]
    fn score_stays_in_range() {
        let config = ScoringConfig::default();
        let scorer = ProfitScorer::new(&config);
        let rich = RateInfo {
            estimated_rate_per_mile: Some(Decimal::new(99, 0)),
            board_rate: None,
        };
        let estimate = scorer.estimate(&load(800, 0, rich));
        let score = scorer.score(&estimate);
        assert!((0.0..=100.0).contains(&score));
    }
}
