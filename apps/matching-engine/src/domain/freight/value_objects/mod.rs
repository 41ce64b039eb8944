//! Freight Matching Value Objects
//!
//! Normalized records produced by the freight-board adapter.

mod driver_record;
mod equipment;
mod load_record;
mod market_signal;

pub use driver_record::{Contact, DriverRecord, ServiceFlags, TruckCapacity};
pub use equipment::EquipmentType;
pub use load_record::{BoardRate, BrokerInfo, FullPartial, LoadRecord, RateBasis, RateInfo};
pub use market_signal::MarketSignal;
