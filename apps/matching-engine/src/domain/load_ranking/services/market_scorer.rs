//! Connectivity and ease-of-booking sub-scores.

use crate::domain::freight::MarketSignal;
use crate::domain::shared::Resolved;

use super::super::value_objects::scoring_config::ScoringConfig;

/// Maps a destination market signal onto the two market sub-scores.
///
/// An unresolved signal scores 0 on both axes. That is the conservative
/// floor: degraded inputs sink a load in the ranking but never drop it.
#[derive(Debug, Clone, Copy)]
pub struct MarketScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> MarketScorer<'a> {
    /// Create a scorer over a parameter set.
    #[must_use]
    pub const fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Connectivity sub-score in [0, 100].
    #[must_use]
    pub fn connectivity_score(&self, signal: &Resolved<MarketSignal>) -> f64 {
        let Some(signal) = signal.known() else {
            return 0.0;
        };
        let bands = &self.config.connectivity;
        let outbound = f64::from(signal.outbound_loads);
        bands.lane_weight.mul_add(
            bands.lane_band.score(outbound),
            (1.0 - bands.lane_weight) * bands.outbound_band.score(outbound),
        )
    }

    /// Ease-of-booking sub-score in [0, 100].
    #[must_use]
    pub fn ease_score(&self, signal: &Resolved<MarketSignal>) -> f64 {
        let Some(signal) = signal.known() else {
            return 0.0;
        };
        if signal.is_dead() {
            return 0.0;
        }
        let bands = &self.config.ease;
        let sdr = signal.supply_demand_ratio();
        let outbound = f64::from(signal.outbound_loads);
        bands.sdr_weight.mul_add(
            bands.sdr_band.inverted_score(sdr),
            (1.0 - bands.sdr_weight) * bands.outbound_band.score(outbound),
        )
    }
}
