//! Carrier Vetting Domain Services

mod small_carrier_policy;

pub use small_carrier_policy::{DEFAULT_MAX_TRUCKS, SmallCarrierPolicy, VettingDecision};
