//! Matching Engine Binary
//!
//! Starts the Kayaan matching engine.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin matching-engine
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `DAT_USERNAME`: Organization username for the freight board
//! - `DAT_PASSWORD`: Organization password
//! - `DAT_USER`: Service-account user the search token is issued for
//!
//! ## Optional
//! - `KAYAAN_ENV`: staging | production (default: staging)
//! - `USDOT_APP_TOKEN`: Socrata app token for carrier lookups
//! - `HTTP_PORT`: HTTP server port (default: 5004)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use matching_engine::application::services::{
    DriverFilterPipeline, FleetCache, FleetSizeResolver,
};
use matching_engine::application::use_cases::{RankDriversUseCase, RankLoadsUseCase};
use matching_engine::domain::carrier_vetting::SmallCarrierPolicy;
use matching_engine::domain::load_ranking::LoadRanker;
use matching_engine::infrastructure::dat::{
    DatConfig, DatCredentials, DatEnvironment, DatFreightBoardAdapter,
};
use matching_engine::infrastructure::http::{AppState, create_router};
use matching_engine::infrastructure::registry::{RegistryConfig, SocrataRegistryAdapter};
use matching_engine::telemetry::init_telemetry;

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 5004;

/// Parsed configuration from environment variables.
struct EngineConfig {
    environment: DatEnvironment,
    http_port: u16,
    credentials: DatCredentials,
    usdot_app_token: Option<String>,
}

impl EngineConfig {
    fn from_env() -> anyhow::Result<Self> {
        let credentials = DatCredentials {
            username: std::env::var("DAT_USERNAME").context("DAT_USERNAME is required")?,
            password: std::env::var("DAT_PASSWORD").context("DAT_PASSWORD is required")?,
            user: std::env::var("DAT_USER").context("DAT_USER is required")?,
        };
        anyhow::ensure!(
            !credentials.is_incomplete(),
            "DAT credentials must not be empty"
        );

        let environment = std::env::var("KAYAAN_ENV")
            .map(|name| DatEnvironment::from_name(&name))
            .unwrap_or(DatEnvironment::Staging);

        let http_port = std::env::var("HTTP_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);

        Ok(Self {
            environment,
            http_port,
            credentials,
            usdot_app_token: std::env::var("USDOT_APP_TOKEN").ok(),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_telemetry();

    let config = EngineConfig::from_env()?;
    tracing::info!(
        environment = %config.environment,
        http_port = config.http_port,
        usdot_token_present = config.usdot_app_token.is_some(),
        "Starting Kayaan matching engine"
    );

    // Driven adapters.
    let board = Arc::new(
        DatFreightBoardAdapter::new(DatConfig::new(
            config.credentials.clone(),
            config.environment,
        ))
        .context("failed to build freight board adapter")?,
    );
    let registry = Arc::new(
        SocrataRegistryAdapter::new(RegistryConfig::new(config.usdot_app_token.clone()))
            .context("failed to build carrier registry adapter")?,
    );

    // Process-lifetime caches and use cases.
    let fleet_cache = Arc::new(FleetCache::new());
    let resolver = FleetSizeResolver::new(Arc::clone(&registry), Arc::clone(&fleet_cache));
    let pipeline = DriverFilterPipeline::new(resolver, SmallCarrierPolicy::default());

    let rank_drivers = Arc::new(RankDriversUseCase::new(Arc::clone(&board), pipeline));
    let rank_loads = Arc::new(RankLoadsUseCase::new(
        Arc::clone(&board),
        Arc::clone(&board),
        LoadRanker::default(),
    ));

    let state = AppState {
        rank_drivers,
        rank_loads,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Resolve when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => tracing::warn!(%error, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
