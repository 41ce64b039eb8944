//! Geographic place value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A city/state pair as reported by the freight board.
///
/// State is a two-letter postal code. City may be absent for area-level
/// postings (state-only searches, open destinations narrowed to a state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// City name, if known.
    pub city: Option<String>,
    /// Two-letter state code.
    pub state: String,
}

impl Place {
    /// Create a place with both city and state.
    #[must_use]
    pub fn city_state(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            state: state.into(),
        }
    }

    /// Create a state-level place with no city.
    #[must_use]
    pub fn state_only(state: impl Into<String>) -> Self {
        Self {
            city: None,
            state: state.into(),
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.city {
            Some(city) => write!(f, "{city}, {}", self.state),
            None => write!(f, "{}", self.state),
        }
    }
}
