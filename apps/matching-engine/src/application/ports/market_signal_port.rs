//! Market Signal Port (Driven Port)
//!
//! Interface for per-destination supply/demand counts. Failures degrade
//! the affected load's market sub-scores; they never fail a ranking.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::freight::{EquipmentType, MarketSignal};

/// Query for one destination market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketQuery {
    /// Destination state code.
    pub state: String,
    /// Equipment types to count.
    pub equipment: Vec<EquipmentType>,
}

impl MarketQuery {
    /// Query a state across the common equipment categories.
    #[must_use]
    pub fn for_state(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            equipment: vec![
                EquipmentType::Van,
                EquipmentType::Reefer,
                EquipmentType::Flatbed,
            ],
        }
    }
}

/// Market-signal fetch failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SignalError {
    /// Transport-level failure.
    #[error("Market query transport failure: {message}")]
    Network {
        /// Error details.
        message: String,
    },

    /// The board rejected the count query.
    #[error("Market query rejected (HTTP {status}): {detail}")]
    Rejected {
        /// Upstream HTTP status.
        status: u16,
        /// Upstream error detail.
        detail: String,
    },

    /// The board answered with a payload we could not interpret.
    #[error("Malformed market response: {message}")]
    MalformedResponse {
        /// Error details.
        message: String,
    },
}

/// Port for destination market lookups.
#[async_trait]
pub trait MarketSignalPort: Send + Sync {
    /// Fetch outbound-load and available-truck counts for a destination.
    async fn fetch_market_signal(&self, query: MarketQuery) -> Result<MarketSignal, SignalError>;
}
