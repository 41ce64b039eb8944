//! Driver record annotated with its fleet resolution.

use serde::{Deserialize, Serialize};

use crate::domain::freight::DriverRecord;
use crate::domain::shared::Resolved;

use super::fleet_info::FleetInfo;

/// A driver that passed the small-carrier filter.
///
/// Every surfaced driver carries its fleet resolution, including `Unknown`
/// and `Failed`, so display stays consistent whether or not the registry
/// answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VettedDriver {
    /// The underlying capacity record.
    pub driver: DriverRecord,
    /// Outcome of the fleet-size lookup.
    pub fleet: Resolved<FleetInfo>,
}

impl VettedDriver {
    /// Attach a fleet resolution to a driver record.
    #[must_use]
    pub const fn new(driver: DriverRecord, fleet: Resolved<FleetInfo>) -> Self {
        Self { driver, fleet }
    }

    /// Verified truck count, when the registry had one.
    #[must_use]
    pub fn truck_units(&self) -> Option<u32> {
        self.fleet
            .known()
            .and_then(|info| info.truck_units.known().copied())
    }
}
