//! Profit breakdown for a candidate load.

use serde::{Deserialize, Serialize};

/// Estimated economics of hauling one load.
///
/// All dollar amounts are rounded to cents for display; the scorer consumes
/// the rounded values so what the user sees is what was ranked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitEstimate {
    /// Effective rate in $/loaded mile.
    pub rate_per_mile: f64,
    /// Gross revenue in $.
    pub total_revenue: f64,
    /// Estimated fuel cost in $.
    pub fuel_cost: f64,
    /// Estimated non-fuel operating cost in $.
    pub ops_cost: f64,
    /// Revenue minus all costs, in $.
    pub net_profit: f64,
    /// Net profit per total mile driven, in $/mi.
    pub profit_per_mile: f64,
    /// Loaded miles.
    pub trip_miles: u32,
    /// Deadhead miles to the pickup.
    pub deadhead_miles: u32,
    /// Loaded plus deadhead miles.
    pub total_miles: u32,
    /// True when the rate was assumed rather than posted.
    pub rate_assumed: bool,
}

impl ProfitEstimate {
    /// Estimated total cost in $.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        round_cents(self.fuel_cost + self.ops_cost)
    }
}

/// Round a dollar amount to cents.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
