//! Wire types for the USDOT Socrata carrier dataset.
//!
//! The dataset reports every field as a JSON string, including counts.
//! Coercion happens here, per field: one unparseable count degrades that
//! field to `Unknown` without discarding the rest of the record.

use serde::Deserialize;

use crate::domain::carrier_vetting::FleetInfo;
use crate::domain::shared::{DotNumber, Resolved};

/// One carrier row from the census dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarrierRow {
    /// DOT number, echoed back as a string.
    #[serde(default)]
    pub dot_number: Option<String>,
    /// Registered legal name.
    #[serde(default)]
    pub legal_name: Option<String>,
    /// Power units, stringly typed.
    #[serde(default)]
    pub truck_units: Option<String>,
    /// Driver count, stringly typed.
    #[serde(default)]
    pub total_drivers: Option<String>,
    /// Physical address city.
    #[serde(default)]
    pub phy_city: Option<String>,
    /// Physical address state.
    #[serde(default)]
    pub phy_state: Option<String>,
    /// Docket prefix (e.g. "MC").
    #[serde(default)]
    pub docket1prefix: Option<String>,
    /// Docket number.
    #[serde(default)]
    pub docket1: Option<String>,
    /// Entity type (carrier, broker, ...).
    #[serde(default)]
    pub entity_type: Option<String>,
}

impl CarrierRow {
    /// Convert the row into a fleet snapshot for `dot`.
    ///
    /// The caller's DOT number keys the snapshot; the echoed `dot_number`
    /// column is display-only and not trusted for identity.
    #[must_use]
    pub fn into_fleet_info(self, dot: &DotNumber) -> FleetInfo {
        let mc_number = match (self.docket1prefix.as_deref(), self.docket1.as_deref()) {
            (Some(prefix), Some(number)) if prefix.eq_ignore_ascii_case("MC") => {
                number.trim().parse().ok()
            }
            _ => None,
        };

        FleetInfo {
            dot_number: dot.clone(),
            legal_name: self.legal_name,
            truck_units: coerce_count(self.truck_units.as_deref()),
            total_drivers: coerce_count(self.total_drivers.as_deref()),
            physical_city: self.phy_city,
            physical_state: self.phy_state,
            mc_number,
            entity_type: self.entity_type,
        }
    }
}

/// Coerce a stringly-typed count onto the tri-state.
///
/// Absent and empty values are `Unknown`; present but non-numeric values
/// are `Failed` with the offending text, so logs can show what the
/// registry actually sent.
fn coerce_count(raw: Option<&str>) -> Resolved<u32> {
    match raw {
        None => Resolved::Unknown,
        Some(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Resolved::Unknown;
            }
            trimmed.parse::<u32>().map_or_else(
                |_| Resolved::Failed(format!("unparseable count {trimmed:?}")),
                Resolved::Known,
            )
        }
    }
}
