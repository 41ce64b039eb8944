//! Fleet-size resolution with process-lifetime memoization.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::application::ports::{CarrierRegistryPort, RegistryError};
use crate::domain::carrier_vetting::FleetInfo;
use crate::domain::shared::{DotNumber, Resolved};

/// A completed registry lookup, as memoized.
///
/// Only finished lookups are cached; failures are returned to the caller
/// but never stored, so a transient outage cannot poison the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CachedLookup {
    /// The registry had a record.
    Found(FleetInfo),
    /// The registry had no record for this DOT number.
    NoRecord,
}

/// Process-wide memoization of fleet lookups, keyed by DOT number.
///
/// Unbounded and never invalidated: fleet size is assumed stable within a
/// session, and the number of distinct carriers seen per run is small.
/// Concurrent misses on the same key may both fetch; last writer wins,
/// which is harmless because both fetched the same record.
#[derive(Debug, Default)]
pub struct FleetCache {
    entries: RwLock<HashMap<DotNumber, CachedLookup>>,
}

impl FleetCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized lookups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    /// True when nothing has been memoized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, dot: &DotNumber) -> Option<CachedLookup> {
        self.entries.read().ok().and_then(|map| map.get(dot).cloned())
    }

    fn insert(&self, dot: DotNumber, lookup: CachedLookup) {
        if let Ok(mut map) = self.entries.write() {
            map.insert(dot, lookup);
        }
    }
}

/// Resolves a carrier's fleet size, fail-open.
///
/// Every outcome is a [`Resolved`] value; this service never returns an
/// error. An unresolvable fleet size must never remove a driver from
/// consideration, so failures degrade to `Failed` and are logged.
pub struct FleetSizeResolver<R>
where
    R: CarrierRegistryPort,
{
    registry: Arc<R>,
    cache: Arc<FleetCache>,
}

impl<R> FleetSizeResolver<R>
where
    R: CarrierRegistryPort,
{
    /// Create a resolver over a registry adapter and a shared cache.
    pub fn new(registry: Arc<R>, cache: Arc<FleetCache>) -> Self {
        Self { registry, cache }
    }

    /// Resolve the fleet snapshot for an optional DOT number.
    ///
    /// - No DOT number: `Unknown`, no lookup.
    /// - Cached: the memoized outcome, no network call.
    /// - Otherwise: one registry call; success (including "no record") is
    ///   memoized, failure is logged and returned as `Failed` uncached.
    pub async fn resolve(&self, dot: Option<&DotNumber>) -> Resolved<FleetInfo> {
        let Some(dot) = dot else {
            return Resolved::Unknown;
        };

        if let Some(cached) = self.cache.get(dot) {
            tracing::debug!(dot = %dot, "Fleet cache hit");
            return match cached {
                CachedLookup::Found(info) => Resolved::Known(info),
                CachedLookup::NoRecord => Resolved::Unknown,
            };
        }

        match self.registry.fleet_snapshot(dot).await {
            Ok(Some(info)) => {
                self.cache.insert(dot.clone(), CachedLookup::Found(info.clone()));
                Resolved::Known(info)
            }
            Ok(None) => {
                tracing::debug!(dot = %dot, "Registry has no record for carrier");
                self.cache.insert(dot.clone(), CachedLookup::NoRecord);
                Resolved::Unknown
            }
            Err(error) => {
                tracing::warn!(
                    dot = %dot,
                    error = %error,
                    "Fleet lookup failed; treating fleet size as unverifiable"
                );
                Resolved::Failed(registry_failure_reason(&error))
            }
        }
    }
}

fn registry_failure_reason(error: &RegistryError) -> String {
    match error {
        RegistryError::Timeout => "registry timeout".to_string(),
        RegistryError::Network { .. } => "registry unreachable".to_string(),
        RegistryError::Unavailable { status, .. } => {
            format!("registry error (HTTP {status})")
        }
        RegistryError::MalformedResponse { .. } => "malformed registry response".to_string(),
    }
}
