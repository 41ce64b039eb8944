//! Rank Drivers Use Case
//!
//! Capacity search followed by the small-carrier filter pipeline.

use std::sync::Arc;

use crate::application::ports::{
    CarrierRegistryPort, DriverSearchQuery, FreightBoardPort, SearchError,
};
use crate::application::services::DriverFilterPipeline;
use crate::domain::carrier_vetting::VettedDriver;

/// Filtered driver search results.
#[derive(Debug, Clone)]
pub struct RankedDrivers {
    /// Vetted drivers in board order, each annotated with fleet data.
    pub drivers: Vec<VettedDriver>,
    /// Total matches the board reported before filtering.
    pub total_available: u32,
}

/// Use case for searching and vetting capacity.
pub struct RankDriversUseCase<F, R>
where
    F: FreightBoardPort,
    R: CarrierRegistryPort,
{
    board: Arc<F>,
    pipeline: DriverFilterPipeline<R>,
}

impl<F, R> RankDriversUseCase<F, R>
where
    F: FreightBoardPort,
    R: CarrierRegistryPort,
{
    /// Create a new RankDriversUseCase.
    pub const fn new(board: Arc<F>, pipeline: DriverFilterPipeline<R>) -> Self {
        Self { board, pipeline }
    }

    /// Execute the use case.
    ///
    /// Search failures propagate; fleet-lookup failures never do, they
    /// degrade individual annotations inside the pipeline.
    pub async fn execute(&self, mut query: DriverSearchQuery) -> Result<RankedDrivers, SearchError> {
        // The board rejects limits above the documented cap.
        query.limit = query.capped_limit();

        tracing::info!(
            origin_state = %query.origin_state,
            origin_city = ?query.origin_city,
            limit = query.limit,
            "Searching capacity"
        );

        let results = self.board.search_drivers(query).await?;
        let total_available = results.total_available;
        let found = results.drivers.len();

        let drivers = self.pipeline.filter(results.drivers).await;

        tracing::info!(
            found,
            included = drivers.len(),
            total_available,
            "Capacity search complete"
        );

        Ok(RankedDrivers {
            drivers,
            total_available,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{DriverSearchResults, LoadSearchQuery, RegistryError};
    use crate::application::services::{FleetCache, FleetSizeResolver};
    use crate::domain::carrier_vetting::{FleetInfo, SmallCarrierPolicy};
    use crate::domain::freight::{
        Contact, DriverRecord, EquipmentType, LoadRecord, ServiceFlags, TruckCapacity,
    };
    use crate::domain::shared::{DotNumber, MatchId, Place, Resolved, TimeWindow};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubBoard {
        drivers: Vec<DriverRecord>,
        total: u32,
        seen_limit: Mutex<Option<u32>>,
    }

    #[async_trait]
    impl FreightBoardPort for StubBoard {
        async fn search_drivers(
            &self,
            query: DriverSearchQuery,
        ) -> Result<DriverSearchResults, SearchError> {
            *self.seen_limit.lock().unwrap() = Some(query.limit);
            Ok(DriverSearchResults {
                drivers: self.drivers.clone(),
                total_available: self.total,
            })
        }

        async fn search_loads(
            &self,
            _query: LoadSearchQuery,
        ) -> Result<Vec<LoadRecord>, SearchError> {
            unimplemented!("not used by this use case")
        }
    }

    struct StubRegistry {
        trucks: u32,
    }

    #[async_trait]
    impl CarrierRegistryPort for StubRegistry {
        async fn fleet_snapshot(
            &self,
            dot: &DotNumber,
        ) -> Result<Option<FleetInfo>, RegistryError> {
            let mut info = FleetInfo::counts_unknown(dot.clone());
            info.truck_units = Resolved::Known(self.trucks);
            Ok(Some(info))
        }
    }

    fn driver(id: &str, dot: Option<&str>) -> DriverRecord {
        DriverRecord {
            match_id: MatchId::new(id),
            company_name: None,
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

    fn use_case(
        drivers: Vec<DriverRecord>,
        total: u32,
        trucks: u32,
    ) -> (RankDriversUseCase<StubBoard, StubRegistry>, Arc<StubBoard>) {
        let board = Arc::new(StubBoard {
            drivers,
            total,
            seen_limit: Mutex::new(None),
        });
        let resolver =
            FleetSizeResolver::new(Arc::new(StubRegistry { trucks }), Arc::new(FleetCache::new()));
        let pipeline = DriverFilterPipeline::new(resolver, SmallCarrierPolicy::default());
        (
            RankDriversUseCase::new(Arc::clone(&board), pipeline),
            board,
        )
    }

    #[tokio::test]
    async fn clamps_limit_to_board_cap() {
        let (use_case, board) = use_case(vec![], 0, 5);
        let mut query = DriverSearchQuery::for_state("TX");
        query.limit = 400;

        use_case.execute(query).await.unwrap();
        assert_eq!(*board.seen_limit.lock().unwrap(), Some(150));
    }

    #[tokio::test]
    async fn surfaces_total_and_filters_large_fleets() {
        let (use_case, _) = use_case(
            vec![driver("a", Some("1")), driver("b", None)],
            230,
            40, // every verified carrier is too large
        );
        let ranked = use_case
            .execute(DriverSearchQuery::for_state("TX"))
            .await
            .unwrap();

        assert_eq!(ranked.total_available, 230);
        // Verified 40-truck carrier excluded; unverifiable driver kept.
        assert_eq!(ranked.drivers.len(), 1);
        assert_eq!(ranked.drivers[0].driver.match_id.as_str(), "b");
    }
}
