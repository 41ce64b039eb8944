//! Carrier Vetting Context
//!
//! Fleet snapshots from the federal registry and the small-carrier
//! inclusion policy applied to capacity search results.

pub mod services;
pub mod value_objects;

pub use services::{DEFAULT_MAX_TRUCKS, SmallCarrierPolicy, VettingDecision};
pub use value_objects::{FleetInfo, VettedDriver};
