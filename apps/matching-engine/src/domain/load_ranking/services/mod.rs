//! Load Ranking Domain Services

mod load_filter;
mod load_ranker;
mod market_scorer;
mod profit_scorer;

pub use load_filter::{LoadTypeFilter, filter_loads};
pub use load_ranker::{LoadRanker, RankedLoad};
pub use market_scorer::MarketScorer;
pub use profit_scorer::ProfitScorer;
