//! Freight Matching Context
//!
//! Driver (capacity) and load (shipment) records plus per-destination
//! market signals, as normalized at the gateway boundary.

pub mod value_objects;

pub use value_objects::{
    BoardRate, BrokerInfo, Contact, DriverRecord, EquipmentType, FullPartial, LoadRecord,
    MarketSignal, RateBasis, RateInfo, ServiceFlags, TruckCapacity,
};
