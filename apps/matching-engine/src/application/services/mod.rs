//! Application Services
//!
//! Stateful orchestration helpers shared by the use cases.

mod driver_filter;
mod fleet_size_resolver;

pub use driver_filter::DriverFilterPipeline;
pub use fleet_size_resolver::{FleetCache, FleetSizeResolver};
