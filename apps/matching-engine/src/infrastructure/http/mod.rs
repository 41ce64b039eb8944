//! HTTP Surface (Driver Adapter)
//!
//! Thin REST layer over the two core use cases plus a health probe.

mod controller;
pub mod request;
pub mod response;

pub use controller::{AppState, create_router};
