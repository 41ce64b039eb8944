//! Tracing Setup
//!
//! Console tracing with `EnvFilter`.
//!
//! # Configuration
//!
//! - `RUST_LOG`: Log level filter (default: `info`)
//! - `NODE_ENV`: `development` enables ANSI colors and hides targets

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_telemetry() {
    let is_development = std::env::var("NODE_ENV")
        .map(|v| v == "development")
        .unwrap_or(false);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(!is_development)
        .with_ansi(is_development)
        .init();
}
