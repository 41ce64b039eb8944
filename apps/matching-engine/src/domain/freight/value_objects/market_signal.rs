//! Destination market supply/demand snapshot.

use serde::{Deserialize, Serialize};

/// Supply/demand indicators for a destination state.
///
/// Fetched per distinct destination during a ranking call and discarded
/// afterward; never cached across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSignal {
    /// Destination state code.
    pub state: String,
    /// Loads posted outbound from the state.
    pub outbound_loads: u32,
    /// Trucks available in the state.
    pub available_trucks: u32,
}

impl MarketSignal {
    /// Trucks per outbound load; lower means easier to book onward.
    ///
    /// A market with zero outbound loads is treated as one load to keep the
    /// ratio finite.
    #[must_use]
    pub fn supply_demand_ratio(&self) -> f64 {
        f64::from(self.available_trucks) / f64::from(self.outbound_loads.max(1))
    }

    /// True when the market shows no activity at all.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.outbound_loads == 0 && self.available_trucks == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_divides_trucks_by_loads() {
        let signal = MarketSignal {
            state: "GA".to_string(),
            outbound_loads: 80,
            available_trucks: 40,
        };
        assert!((signal.supply_demand_ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_is_finite_with_no_outbound_loads() {
        let signal = MarketSignal {
            state: "WY".to_string(),
            outbound_loads: 0,
            available_trucks: 12,
        };
        assert!((signal.supply_demand_ratio() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dead_market_detection() {
        let dead = MarketSignal {
            state: "VT".to_string(),
            outbound_loads: 0,
            available_trucks: 0,
        };
        assert!(dead.is_dead());
    }
}
