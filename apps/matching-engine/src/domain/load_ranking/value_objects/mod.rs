//! Load Ranking Value Objects

pub mod composite_score;
pub mod profit_estimate;
pub mod scoring_config;

pub use composite_score::{CompositeScore, Recommendation};
pub use profit_estimate::ProfitEstimate;
pub use scoring_config::{
    Band, CompositeWeights, ConnectivityBands, CostModel, DistanceModeration, EaseBands,
    FallbackRates, ProfitBands, ScoringConfig,
};
