//! Composite KAYAAN Profit Score and its recommendation label.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::scoring_config::CompositeWeights;

/// Categorical recommendation derived from the composite score.
///
/// Thresholds are inclusive lower bounds: 90 is `Excellent`, 89 is `Good`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Composite in [90, 100].
    Excellent,
    /// Composite in [75, 90).
    Good,
    /// Composite in [60, 75).
    Moderate,
    /// Composite in [0, 60).
    Low,
}

impl Recommendation {
    /// Map a composite score onto its label.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::Excellent,
            75..=89 => Self::Good,
            60..=74 => Self::Moderate,
            _ => Self::Low,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The KAYAAN Profit Score for one load: an integer in [0, 100] with the
/// three sub-scores it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    /// Weighted, rounded composite in [0, 100].
    pub value: u8,
    /// Recommendation label for `value`.
    pub recommendation: Recommendation,
    /// Profit sub-score in [0, 100].
    pub profit: f64,
    /// Connectivity sub-score in [0, 100].
    pub connectivity: f64,
    /// Ease-of-booking sub-score in [0, 100].
    pub ease: f64,
}

impl CompositeScore {
    /// Weight and round the sub-scores into a composite.
    ///
    /// Sub-scores are clamped to [0, 100] first so a mis-normalized input
    /// can never push the composite out of range.
    #[must_use]
    pub fn compute(weights: &CompositeWeights, profit: f64, connectivity: f64, ease: f64) -> Self {
        let profit = profit.clamp(0.0, 100.0);
        let connectivity = connectivity.clamp(0.0, 100.0);
        let ease = ease.clamp(0.0, 100.0);

        let weighted = weights
            .profit
            .mul_add(profit, weights.connectivity * connectivity)
            + weights.ease * ease;
        let value = weighted.round().clamp(0.0, 100.0) as u8;

        Self {
            value,
            recommendation: Recommendation::from_score(value),
            profit,
            connectivity,
            ease,
        }
    }
}
