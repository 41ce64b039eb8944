//! Scoring bands and weights for the KAYAAN Profit Score.
//!
//! Every threshold the score depends on lives here as a named, testable
//! parameter. The defaults encode the operating assumptions of the ranking
//! model; callers may override any of them.

use serde::{Deserialize, Serialize};

use crate::domain::freight::EquipmentType;

/// A linear normalization band mapping a raw metric onto [0, 100].
///
/// Values at or below `floor` score 0, values at or above `ceiling` score
/// 100, with linear interpolation between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Raw value mapped to 0.
    pub floor: f64,
    /// Raw value mapped to 100.
    pub ceiling: f64,
}

impl Band {
    /// Create a band.
    #[must_use]
    pub const fn new(floor: f64, ceiling: f64) -> Self {
        Self { floor, ceiling }
    }

    /// Normalized position of `value` in the band, clamped to [0, 1].
    #[must_use]
    pub fn position(&self, value: f64) -> f64 {
        if self.ceiling <= self.floor {
            return if value >= self.ceiling { 1.0 } else { 0.0 };
        }
        ((value - self.floor) / (self.ceiling - self.floor)).clamp(0.0, 1.0)
    }

    /// Band score in [0, 100]; higher raw value scores higher.
    #[must_use]
    pub fn score(&self, value: f64) -> f64 {
        self.position(value) * 100.0
    }

    /// Band score in [0, 100]; higher raw value scores *lower*.
    #[must_use]
    pub fn inverted_score(&self, value: f64) -> f64 {
        (1.0 - self.position(value)) * 100.0
    }
}

/// Top-level composite weights (profit / connectivity / ease).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    /// Weight of the profit sub-score.
    pub profit: f64,
    /// Weight of the lane-connectivity sub-score.
    pub connectivity: f64,
    /// Weight of the ease-of-booking sub-score.
    pub ease: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            profit: 0.50,
            connectivity: 0.30,
            ease: 0.20,
        }
    }
}

/// Operating cost model used to turn a rate into an estimated profit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Diesel price in $/gallon.
    pub fuel_price_per_gallon: f64,
    /// Non-fuel operating cost in $/mile.
    pub ops_cost_per_mile: f64,
}

impl CostModel {
    /// Fuel efficiency in miles per gallon for an equipment category.
    #[must_use]
    pub fn miles_per_gallon(equipment: &EquipmentType) -> f64 {
        match equipment {
            EquipmentType::Reefer => 6.0,
            EquipmentType::Flatbed => 5.8,
            EquipmentType::Van | EquipmentType::Other(_) => 6.6,
        }
    }

    /// Estimated all-in cost for the given miles.
    #[must_use]
    pub fn total_cost(&self, total_miles: f64, equipment: &EquipmentType) -> f64 {
        let fuel = (total_miles / Self::miles_per_gallon(equipment)) * self.fuel_price_per_gallon;
        let ops = total_miles * self.ops_cost_per_mile;
        fuel + ops
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            fuel_price_per_gallon: 3.89,
            ops_cost_per_mile: 0.40,
        }
    }
}

/// Fallback rates when a load carries no usable rate signal, in $/mile.
///
/// Long hauls clear the market at lower per-mile rates, so the fallback
/// drops past `long_haul_miles`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackRates {
    /// Trip length at which the long-haul rate applies.
    pub long_haul_miles: u32,
    /// Reefer rate for short hauls.
    pub reefer_short: f64,
    /// Reefer rate for long hauls.
    pub reefer_long: f64,
    /// Rate for all other equipment, short hauls.
    pub dry_short: f64,
    /// Rate for all other equipment, long hauls.
    pub dry_long: f64,
}

impl FallbackRates {
    /// The assumed rate for a load with no rate signal.
    #[must_use]
    pub const fn rate_for(&self, equipment: &EquipmentType, trip_miles: u32) -> f64 {
        let long = trip_miles > self.long_haul_miles;
        match (equipment, long) {
            (EquipmentType::Reefer, true) => self.reefer_long,
            (EquipmentType::Reefer, false) => self.reefer_short,
            (_, true) => self.dry_long,
            (_, false) => self.dry_short,
        }
    }
}

impl Default for FallbackRates {
    fn default() -> Self {
        Self {
            long_haul_miles: 500,
            reefer_short: 2.90,
            reefer_long: 2.60,
            dry_short: 2.70,
            dry_long: 2.30,
        }
    }
}

/// Penalty applied to hauls outside the target distance band.
///
/// Very short hauls spend a disproportionate share of their revenue on
/// deadhead and loading time; very long hauls concentrate time risk. Inside
/// `[target_min_miles, target_max_miles]` the factor is 1.0; it decays
/// linearly to `min_factor` at zero miles and at
/// `target_max_miles + falloff_miles`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceModeration {
    /// Lower edge of the full-credit band.
    pub target_min_miles: f64,
    /// Upper edge of the full-credit band.
    pub target_max_miles: f64,
    /// Miles past the upper edge at which the penalty bottoms out.
    pub falloff_miles: f64,
    /// Smallest multiplier the penalty can reach.
    pub min_factor: f64,
}

impl DistanceModeration {
    /// Multiplier in `[min_factor, 1.0]` for a haul of `total_miles`.
    #[must_use]
    pub fn factor(&self, total_miles: f64) -> f64 {
        let span = 1.0 - self.min_factor;
        if total_miles < self.target_min_miles {
            let shortfall = (self.target_min_miles - total_miles) / self.target_min_miles;
            1.0 - shortfall.clamp(0.0, 1.0) * span
        } else if total_miles > self.target_max_miles {
            let overrun = (total_miles - self.target_max_miles) / self.falloff_miles;
            1.0 - overrun.clamp(0.0, 1.0) * span
        } else {
            1.0
        }
    }
}

impl Default for DistanceModeration {
    fn default() -> Self {
        Self {
            target_min_miles: 250.0,
            target_max_miles: 900.0,
            falloff_miles: 600.0,
            min_factor: 0.6,
        }
    }
}

/// Bands and sub-weights for the profit sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitBands {
    /// Band over profit per mile ($/mi).
    pub profit_per_mile: Band,
    /// Band over rate per mile ($/mi).
    pub rate_per_mile: Band,
    /// Band over gross revenue ($).
    pub revenue: Band,
    /// Sub-weight of profit per mile.
    pub profit_per_mile_weight: f64,
    /// Sub-weight of rate per mile.
    pub rate_per_mile_weight: f64,
    /// Sub-weight of gross revenue.
    pub revenue_weight: f64,
    /// Distance moderation applied to the combined result.
    pub distance: DistanceModeration,
}

impl Default for ProfitBands {
    fn default() -> Self {
        Self {
            profit_per_mile: Band::new(0.0, 1.50),
            rate_per_mile: Band::new(1.50, 3.50),
            revenue: Band::new(0.0, 3000.0),
            profit_per_mile_weight: 0.55,
            rate_per_mile_weight: 0.25,
            revenue_weight: 0.20,
            distance: DistanceModeration::default(),
        }
    }
}

/// Bands and sub-weights for the connectivity sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityBands {
    /// Band over the lane-connectivity measure (distinct profitable lanes
    /// originating near the destination, proxied by outbound volume).
    pub lane_band: Band,
    /// Band over raw outbound load availability.
    pub outbound_band: Band,
    /// Weight of the lane measure; outbound availability gets the rest.
    pub lane_weight: f64,
}

impl Default for ConnectivityBands {
    fn default() -> Self {
        Self {
            lane_band: Band::new(0.0, 100.0),
            outbound_band: Band::new(0.0, 150.0),
            lane_weight: 0.6,
        }
    }
}

/// Bands and sub-weights for the ease-of-booking sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EaseBands {
    /// Band over the supply/demand ratio (trucks per outbound load);
    /// inverted, since fewer competing trucks means easier booking.
    pub sdr_band: Band,
    /// Band over raw outbound load availability.
    pub outbound_band: Band,
    /// Weight of the supply/demand measure; outbound count gets the rest.
    pub sdr_weight: f64,
}

impl Default for EaseBands {
    fn default() -> Self {
        Self {
            sdr_band: Band::new(0.5, 4.0),
            outbound_band: Band::new(0.0, 100.0),
            sdr_weight: 0.6,
        }
    }
}

/// Complete parameter set for the KAYAAN Profit Score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Top-level composite weights.
    pub weights: CompositeWeights,
    /// Profit sub-score parameters.
    pub profit: ProfitBands,
    /// Connectivity sub-score parameters.
    pub connectivity: ConnectivityBands,
    /// Ease sub-score parameters.
    pub ease: EaseBands,
    /// Operating cost model.
    pub costs: CostModel,
    /// Fallback rates for loads without rate signals.
    pub fallback_rates: FallbackRates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_interpolates_linearly() {
        let band = Band::new(0.0, 2.0);
        assert!((band.score(-1.0) - 0.0).abs() < f64::EPSILON);
        assert!((band.score(0.0) - 0.0).abs() < f64::EPSILON);
        assert!((band.score(1.0) - 50.0).abs() < f64::EPSILON);
        assert!((band.score(2.0) - 100.0).abs() < f64::EPSILON);
        assert!((band.score(5.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn inverted_band_rewards_low_values() {
        let band = Band::new(0.5, 4.0);
        assert!((band.inverted_score(0.25) - 100.0).abs() < f64::EPSILON);
        assert!((band.inverted_score(4.0) - 0.0).abs() < f64::EPSILON);
        assert!(band.inverted_score(1.0) > band.inverted_score(2.0));
    }

    #[test]
    fn degenerate_band_is_a_step() {
        let band = Band::new(3.0, 3.0);
        assert!((band.score(2.9) - 0.0).abs() < f64::EPSILON);
        assert!((band.score(3.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn composite_weights_sum_to_one() {
        let weights = CompositeWeights::default();
        let sum = weights.profit + weights.connectivity + weights.ease;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn profit_sub_weights_sum_to_one() {
        let bands = ProfitBands::default();
        let sum = bands.profit_per_mile_weight + bands.rate_per_mile_weight + bands.revenue_weight;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn distance_factor_full_credit_inside_band() {
        let moderation = DistanceModeration::default();
        assert!((moderation.factor(250.0) - 1.0).abs() < f64::EPSILON);
        assert!((moderation.factor(500.0) - 1.0).abs() < f64::EPSILON);
        assert!((moderation.factor(900.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_factor_penalizes_extremes() {
        let moderation = DistanceModeration::default();
        assert!(moderation.factor(50.0) < 1.0);
        assert!(moderation.factor(1500.0) < 1.0);
        assert!((moderation.factor(0.0) - 0.6).abs() < 1e-9);
        assert!((moderation.factor(10_000.0) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn fallback_rate_depends_on_equipment_and_length() {
        let rates = FallbackRates::default();
        assert!((rates.rate_for(&EquipmentType::Reefer, 200) - 2.90).abs() < f64::EPSILON);
        assert!((rates.rate_for(&EquipmentType::Reefer, 800) - 2.60).abs() < f64::EPSILON);
        assert!((rates.rate_for(&EquipmentType::Van, 200) - 2.70).abs() < f64::EPSILON);
        assert!((rates.rate_for(&EquipmentType::Van, 800) - 2.30).abs() < f64::EPSILON);
    }

    #[test]
    fn cost_model_uses_equipment_efficiency() {
        let costs = CostModel::default();
        let van = costs.total_cost(660.0, &EquipmentType::Van);
        let reefer = costs.total_cost(660.0, &EquipmentType::Reefer);
        assert!(reefer > van);
    }
}
