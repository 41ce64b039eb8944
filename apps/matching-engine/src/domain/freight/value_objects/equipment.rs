//! Equipment type value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trailer equipment category.
///
/// The freight board uses single-letter codes; anything outside the three
/// categories we cost-model is preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentType {
    /// Dry van ("V").
    Van,
    /// Refrigerated ("R").
    Reefer,
    /// Flatbed ("F").
    Flatbed,
    /// Any other board code, kept as-is.
    Other(String),
}

impl EquipmentType {
    /// Parse a freight-board equipment code.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "V" => Self::Van,
            "R" => Self::Reefer,
            "F" => Self::Flatbed,
            other => Self::Other(other.to_string()),
        }
    }

    /// The freight-board code for this equipment.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Van => "V",
            Self::Reefer => "R",
            Self::Flatbed => "F",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
