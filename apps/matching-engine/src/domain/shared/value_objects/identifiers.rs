//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up IDs from different contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a new unique identifier using UUID v4.
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(MatchId, "Freight-board identifier for a search match.");
define_id!(PostingId, "Freight-board identifier for a capacity/load posting.");

/// Federal carrier identifier (USDOT number).
///
/// The freight board reports DOT numbers inconsistently: as numbers, as
/// numeric strings, as `"N/A"`, or as a literal zero. Construction goes
/// through [`DotNumber::from_raw`], which rejects all the "absent" spellings
/// so the rest of the system only ever sees a usable key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DotNumber(String);

impl DotNumber {
    /// Normalize a raw DOT value, returning `None` for absent markers.
    #[must_use]
    pub fn from_raw(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == "0" || trimmed.eq_ignore_ascii_case("n/a") {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Normalize a numeric DOT value, returning `None` for zero.
    #[must_use]
    pub fn from_numeric(value: u64) -> Option<Self> {
        if value == 0 {
            return None;
        }
        Some(Self(value.to_string()))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DotNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
