//! Load Ranking Context (KAYAAN Profit Score)
//!
//! Pre-scoring filters, the profit/connectivity/ease sub-scores, and the
//! deterministic composite ranking of candidate loads.

pub mod services;
pub mod value_objects;

pub use services::{LoadRanker, LoadTypeFilter, RankedLoad, filter_loads};
pub use value_objects::{
    CompositeScore, CostModel, ProfitEstimate, Recommendation, ScoringConfig,
};
