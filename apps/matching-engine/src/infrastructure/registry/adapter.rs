//! USDOT registry adapter implementing `CarrierRegistryPort`.

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{CarrierRegistryPort, RegistryError};
use crate::domain::carrier_vetting::FleetInfo;
use crate::domain::shared::DotNumber;

use super::api_types::CarrierRow;
use super::config::RegistryConfig;

/// Carrier registry adapter over the USDOT Socrata dataset.
///
/// One attempt per lookup, bounded by the configured timeout; the resolver
/// above this adapter decides what failures mean.
pub struct SocrataRegistryAdapter {
    http: Client,
    config: RegistryConfig,
}

impl SocrataRegistryAdapter {
    /// Create a new adapter from config.
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RegistryError::Network {
                message: e.to_string(),
            })?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl CarrierRegistryPort for SocrataRegistryAdapter {
    async fn fleet_snapshot(&self, dot: &DotNumber) -> Result<Option<FleetInfo>, RegistryError> {
        let mut request = self
            .http
            .get(&self.config.base_url)
            .header("Accept", "application/json")
            .query(&[("dot_number", dot.as_str())]);
        if let Some(token) = &self.config.app_token {
            request = request.header("X-App-Token", token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::Timeout
            } else {
                RegistryError::Network {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(RegistryError::Unavailable {
                status: status.as_u16(),
                detail: detail.chars().take(200).collect(),
            });
        }

        let rows: Vec<CarrierRow> =
            response.json().await.map_err(|e| RegistryError::MalformedResponse {
                message: e.to_string(),
            })?;

        Ok(rows.into_iter().next().map(|row| {
            let info = row.into_fleet_info(dot);
            tracing::debug!(
                dot = %dot,
                trucks = ?info.truck_units,
                "Registry snapshot fetched"
            );
            info
        }))
    }
}
