//! DAT Freight Board Adapter
//!
//! Two-step authentication, capacity/load search, and destination market
//! counts against the DAT search/v3 API.

pub mod api_types;
mod adapter;
mod auth;
mod config;

pub use adapter::DatFreightBoardAdapter;
pub use auth::TokenManager;
pub use config::{DatConfig, DatCredentials, DatEnvironment};
