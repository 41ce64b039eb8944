//! USDOT Carrier Registry Adapter
//!
//! Per-DOT fleet snapshots from the federal carrier census, with all
//! stringly-typed numerics coerced at this boundary.

pub mod api_types;
mod adapter;
mod config;

pub use adapter::SocrataRegistryAdapter;
pub use config::{DEFAULT_LOOKUP_TIMEOUT, DEFAULT_REGISTRY_URL, RegistryConfig};
