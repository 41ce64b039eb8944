//! Carrier fleet snapshot from the federal registry.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{DotNumber, Resolved};

/// Fleet and identity data for one carrier, keyed by DOT number.
///
/// The registry reports counts as free-form strings; each count is coerced
/// independently at the adapter boundary, so one unparseable field never
/// invalidates the rest of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetInfo {
    /// Carrier DOT number.
    pub dot_number: DotNumber,
    /// Registered legal name.
    pub legal_name: Option<String>,
    /// Power units (trucks) on file.
    pub truck_units: Resolved<u32>,
    /// Drivers on file.
    pub total_drivers: Resolved<u32>,
    /// Physical address city.
    pub physical_city: Option<String>,
    /// Physical address state.
    pub physical_state: Option<String>,
    /// MC number, when the docket prefix is MC.
    pub mc_number: Option<u64>,
    /// Registry entity type (carrier, broker, ...).
    pub entity_type: Option<String>,
}

impl FleetInfo {
    /// A snapshot with identity only and no counts on file.
    #[must_use]
    pub const fn counts_unknown(dot_number: DotNumber) -> Self {
        Self {
            dot_number,
            legal_name: None,
            truck_units: Resolved::Unknown,
            total_drivers: Resolved::Unknown,
            physical_city: None,
            physical_state: None,
            mc_number: None,
            entity_type: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_unknown_has_no_fleet_data() {
        let dot = DotNumber::from_raw("123456").unwrap();
        let info = FleetInfo::counts_unknown(dot.clone());
        assert_eq!(info.dot_number, dot);
        assert_eq!(info.truck_units, Resolved::Unknown);
        assert_eq!(info.total_drivers, Resolved::Unknown);
    }
}
