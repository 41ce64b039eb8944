// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Matching Engine - Rust Core Library
//!
//! Driver filtering and load ranking engine for the Kayaan freight system.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (value objects, domain services)
//!   - `freight`: Normalized driver/load records and market signals
//!   - `carrier_vetting`: Fleet snapshots, small-carrier policy
//!   - `load_ranking`: KAYAAN Profit Score, filters, deterministic ordering
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`FreightBoardPort`,
//!     `CarrierRegistryPort`, `MarketSignalPort`)
//!   - `services`: Fleet-size resolver with its process-lifetime cache,
//!     driver filter pipeline
//!   - `use_cases`: `RankDrivers`, `RankLoads`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `dat`: DAT freight-board adapter (two-step auth, search, counts)
//!   - `registry`: USDOT carrier census adapter
//!   - `http`: REST surface

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases, services, and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Tracing initialization.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::carrier_vetting::{FleetInfo, SmallCarrierPolicy, VettedDriver, VettingDecision};
pub use domain::freight::{DriverRecord, EquipmentType, LoadRecord, MarketSignal};
pub use domain::load_ranking::{
    CompositeScore, LoadRanker, LoadTypeFilter, ProfitEstimate, RankedLoad, Recommendation,
    ScoringConfig, filter_loads,
};
pub use domain::shared::{DotNumber, MatchId, Place, Resolved, TimeWindow};

// Application re-exports
pub use application::ports::{
    AuthError, CarrierRegistryPort, DriverSearchQuery, DriverSearchResults, FreightBoardPort,
    LoadSearchQuery, MAX_SEARCH_LIMIT, MarketQuery, MarketSignalPort, RegistryError, SearchError,
    SignalError,
};
pub use application::services::{DriverFilterPipeline, FleetCache, FleetSizeResolver};
pub use application::use_cases::{
    LoadRankingRequest, RankDriversUseCase, RankLoadsUseCase, RankedDrivers,
};

// Infrastructure re-exports
pub use infrastructure::dat::{DatConfig, DatCredentials, DatEnvironment, DatFreightBoardAdapter};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::registry::{RegistryConfig, SocrataRegistryAdapter};
