//! Carrier registry adapter configuration.

use std::time::Duration;

/// Default Socrata dataset endpoint for carrier census records.
pub const DEFAULT_REGISTRY_URL: &str = "https://data.transportation.gov/resource/az4n-8mr2.json";

/// Fleet lookups must stay cheap; they run once per distinct carrier in a
/// search batch and any slower bound would stall driver results.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the USDOT registry adapter.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Dataset endpoint.
    pub base_url: String,
    /// Socrata application token, when issued.
    pub app_token: Option<String>,
    /// Per-lookup timeout.
    pub timeout: Duration,
}

impl RegistryConfig {
    /// Create a configuration with default endpoint and timeout.
    #[must_use]
    pub fn new(app_token: Option<String>) -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            app_token,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Override the endpoint (tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the lookup timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RegistryConfig::new(Some("token".to_string()));
        assert_eq!(config.base_url, DEFAULT_REGISTRY_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
