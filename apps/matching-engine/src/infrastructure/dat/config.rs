//! DAT adapter configuration.

use std::time::Duration;

/// Environment for the DAT APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatEnvironment {
    /// Staging (sandbox data).
    Staging,
    /// Production (live freight data).
    Production,
}

impl DatEnvironment {
    /// Base URL for the identity (token) service.
    #[must_use]
    pub const fn identity_base_url(&self) -> &'static str {
        match self {
            Self::Staging => "https://identity.api.staging.dat.com",
            Self::Production => "https://identity.api.dat.com",
        }
    }

    /// Base URL for the freight search API.
    #[must_use]
    pub const fn freight_base_url(&self) -> &'static str {
        match self {
            Self::Staging => "https://freight.api.staging.dat.com",
            Self::Production => "https://freight.api.prod.dat.com",
        }
    }

    /// Check if this is the production environment.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Parse an environment name; anything unrecognized is staging.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Staging
        }
    }
}

impl std::fmt::Display for DatEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Staging => write!(f, "STAGING"),
            Self::Production => write!(f, "PRODUCTION"),
        }
    }
}

/// The three credentials DAT authentication needs.
#[derive(Debug, Clone)]
pub struct DatCredentials {
    /// Organization username (email).
    pub username: String,
    /// Organization password.
    pub password: String,
    /// Service-account user (email) the user token is issued for.
    pub user: String,
}

impl DatCredentials {
    /// True when any credential is missing.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.username.is_empty() || self.password.is_empty() || self.user.is_empty()
    }
}

/// Configuration for the DAT freight-board adapter.
#[derive(Debug, Clone)]
pub struct DatConfig {
    /// Authentication credentials.
    pub credentials: DatCredentials,
    /// Target environment.
    pub environment: DatEnvironment,
    /// HTTP request timeout for search calls.
    pub timeout: Duration,
    /// Maximum posting age the searches consider, in minutes.
    pub max_age_minutes: u32,
    /// Default origin deadhead for load searches, in miles.
    pub default_load_deadhead_miles: u32,
}

impl DatConfig {
    /// Create a configuration with default tuning.
    #[must_use]
    pub const fn new(credentials: DatCredentials, environment: DatEnvironment) -> Self {
        Self {
            credentials,
            environment,
            timeout: Duration::from_secs(30),
            max_age_minutes: 2880,
            default_load_deadhead_miles: 50,
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Identity base URL for the configured environment.
    #[must_use]
    pub const fn identity_base_url(&self) -> &'static str {
        self.environment.identity_base_url()
    }

    /// Freight base URL for the configured environment.
    #[must_use]
    pub const fn freight_base_url(&self) -> &'static str {
        self.environment.freight_base_url()
    }
}
