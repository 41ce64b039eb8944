//! Driver filter pipeline: small carriers only, fail-open.

use crate::application::services::fleet_size_resolver::FleetSizeResolver;
use crate::application::ports::CarrierRegistryPort;
use crate::domain::carrier_vetting::{SmallCarrierPolicy, VettedDriver, VettingDecision};
use crate::domain::freight::DriverRecord;

/// Filters raw capacity records down to small carriers.
///
/// Order-preserving and exhaustive: every input driver is evaluated even
/// when an upstream limit already bounded the batch, and every included
/// driver is annotated with its fleet resolution. Repeated carriers in one
/// batch dedupe through the resolver's cache.
pub struct DriverFilterPipeline<R>
where
    R: CarrierRegistryPort,
{
    resolver: FleetSizeResolver<R>,
    policy: SmallCarrierPolicy,
}

impl<R> DriverFilterPipeline<R>
where
    R: CarrierRegistryPort,
{
    /// Create a pipeline over a resolver and an inclusion policy.
    pub const fn new(resolver: FleetSizeResolver<R>, policy: SmallCarrierPolicy) -> Self {
        Self { resolver, policy }
    }

    /// Apply the small-carrier filter to a batch of drivers.
    pub async fn filter(&self, drivers: Vec<DriverRecord>) -> Vec<VettedDriver> {
        let input_count = drivers.len();
        let mut vetted = Vec::with_capacity(input_count);

        for driver in drivers {
            let fleet = self.resolver.resolve(driver.dot_number.as_ref()).await;
            match self.policy.decide(&fleet) {
                VettingDecision::Include => {
                    vetted.push(VettedDriver::new(driver, fleet));
                }
                VettingDecision::Exclude => {
                    tracing::debug!(
                        company = driver.company_name.as_deref().unwrap_or("unknown"),
                        dot = ?driver.dot_number,
                        "Excluding driver: fleet exceeds small-carrier threshold"
                    );
                }
            }
        }

        tracing::info!(
            input = input_count,
            included = vetted.len(),
            max_trucks = self.policy.max_trucks(),
            "Driver filter pipeline complete"
        );
        vetted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RegistryError;
    use crate::application::services::fleet_size_resolver::FleetCache;
    use crate::domain::carrier_vetting::FleetInfo;
    use crate::domain::freight::{Contact, EquipmentType, ServiceFlags, TruckCapacity};
    use crate::domain::shared::{DotNumber, MatchId, Place, Resolved, TimeWindow};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;

    struct StubRegistry {
        trucks_by_dot: HashMap<String, u32>,
    }

    #[async_trait]
    impl CarrierRegistryPort for StubRegistry {
        async fn fleet_snapshot(
            &self,
            dot: &DotNumber,
        ) -> Result<Option<FleetInfo>, RegistryError> {
            Ok(self.trucks_by_dot.get(dot.as_str()).map(|&trucks| {
                let mut info = FleetInfo::counts_unknown(dot.clone());
                info.truck_units = Resolved::Known(trucks);
                info
            }))
        }
    }

    fn driver(id: &str, dot: Option<&str>) -> DriverRecord {
        DriverRecord {
            match_id: MatchId::new(id),
            company_name: Some(format!("Carrier {id}")),
            dot_number: dot.and_then(DotNumber::from_raw),
            mc_number: None,
            equipment: EquipmentType::Van,
            origin: Place::city_state("Houston", "TX"),
            destination: None,
            availability: TimeWindow::new(None, None),
            capacity: TruckCapacity::default(),
            service_flags: ServiceFlags::default(),
            origin_deadhead_miles: None,
            contact: Contact::default(),
            comments: None,
            posting_id: None,
            posting_expires: None,
        }
    }

    fn pipeline(trucks_by_dot: &[(&str, u32)]) -> DriverFilterPipeline<StubRegistry> {
        let registry = Arc::new(StubRegistry {
            trucks_by_dot: trucks_by_dot
                .iter()
                .map(|(dot, trucks)| ((*dot).to_string(), *trucks))
                .collect(),
        });
        let resolver = FleetSizeResolver::new(registry, Arc::new(FleetCache::new()));
        DriverFilterPipeline::new(resolver, SmallCarrierPolicy::default())
    }

    #[tokio::test]
    async fn large_fleets_are_excluded_and_order_is_preserved() {
        let pipeline = pipeline(&[("1", 4), ("2", 25), ("3", 10)]);
        let drivers = vec![
            driver("a", Some("1")),
            driver("b", Some("2")),
            driver("c", Some("3")),
            driver("d", None),
        ];

        let vetted = pipeline.filter(drivers).await;
        let ids: Vec<&str> = vetted.iter().map(|v| v.driver.match_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "d"]);
    }

    #[tokio::test]
    async fn every_included_driver_carries_its_resolution() {
        let pipeline = pipeline(&[("1", 4)]);
        let vetted = pipeline
            .filter(vec![driver("a", Some("1")), driver("b", None)])
            .await;

        assert_eq!(vetted[0].truck_units(), Some(4));
        assert_eq!(vetted[1].fleet, Resolved::Unknown);
    }

    #[tokio::test]
    async fn mixed_batch_keeps_small_and_unverifiable_carriers() {
        // 8 with 5 trucks, 5 with 15 trucks, 7 with no DOT => 15 included.
        let pipeline = pipeline(&[("small", 5), ("large", 15)]);
        let mut drivers = Vec::new();
        for i in 0..8 {
            drivers.push(driver(&format!("s{i}"), Some("small")));
        }
        for i in 0..5 {
            drivers.push(driver(&format!("l{i}"), Some("large")));
        }
        for i in 0..7 {
            drivers.push(driver(&format!("n{i}"), None));
        }

        let vetted = pipeline.filter(drivers).await;
        assert_eq!(vetted.len(), 15);
    }
}
