//! Carrier Vetting Value Objects

mod fleet_info;
mod vetted_driver;

pub use fleet_info::FleetInfo;
pub use vetted_driver::VettedDriver;
