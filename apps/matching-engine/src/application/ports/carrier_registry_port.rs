//! Carrier Registry Port (Driven Port)
//!
//! Interface for the federal carrier registry used to verify fleet size.
//! Every failure here is absorbed by the resolver (fail-open); nothing in
//! this port is ever fatal to a request.

use async_trait::async_trait;

use crate::domain::carrier_vetting::FleetInfo;
use crate::domain::shared::DotNumber;

/// Registry lookup failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    /// The lookup exceeded its deadline.
    #[error("Registry lookup timed out")]
    Timeout,

    /// Transport-level failure.
    #[error("Registry unreachable: {message}")]
    Network {
        /// Error details.
        message: String,
    },

    /// The registry rejected or failed the request.
    #[error("Registry request failed (HTTP {status}): {detail}")]
    Unavailable {
        /// Upstream HTTP status.
        status: u16,
        /// Upstream error detail.
        detail: String,
    },

    /// The registry answered with a payload we could not interpret.
    #[error("Malformed registry response: {message}")]
    MalformedResponse {
        /// Error details.
        message: String,
    },
}

/// Port for carrier fleet lookups.
#[async_trait]
pub trait CarrierRegistryPort: Send + Sync {
    /// Fetch the fleet snapshot for one carrier.
    ///
    /// `Ok(None)` means the registry has no record for the DOT number,
    /// a completed lookup, distinct from a failed one.
    async fn fleet_snapshot(&self, dot: &DotNumber) -> Result<Option<FleetInfo>, RegistryError>;
}
