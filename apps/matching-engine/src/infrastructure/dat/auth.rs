//! Two-step DAT authentication with token caching.
//!
//! DAT issues an organization token from credentials, then a short-lived
//! user token (15 minutes) from the organization token. The user token is
//! what search calls carry. Both are cached: the organization token for
//! the process (the identity service reports no expiry for it), the user
//! token until its reported expiry.

use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;

use crate::application::ports::AuthError;

use super::api_types::{OrgTokenRequest, TokenResponse, UserTokenRequest};
use super::config::{DatConfig, DatCredentials, DatEnvironment};

/// Fallback validity when the identity service omits `expiresIn`.
const DEFAULT_USER_TOKEN_SECS: i64 = 900;

#[derive(Debug, Clone)]
struct UserToken {
    bearer: String,
    expires_at: DateTime<Utc>,
}

impl UserToken {
    fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Default)]
struct TokenState {
    org_token: Option<String>,
    user_token: Option<UserToken>,
}

/// Issues and caches DAT bearer tokens.
///
/// Refreshes are serialized behind an async mutex so concurrent requests
/// over an expired token trigger one issuance, best effort.
pub struct TokenManager {
    http: Client,
    credentials: DatCredentials,
    environment: DatEnvironment,
    identity_base_url: String,
    state: Mutex<TokenState>,
}

impl TokenManager {
    /// Create a manager from adapter config, sharing its HTTP client.
    #[must_use]
    pub fn new(http: Client, config: &DatConfig) -> Self {
        Self {
            http,
            credentials: config.credentials.clone(),
            environment: config.environment,
            identity_base_url: config.identity_base_url().to_string(),
            state: Mutex::new(TokenState::default()),
        }
    }

    /// Override the identity base URL (tests).
    #[must_use]
    pub fn with_identity_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.identity_base_url = base_url.into();
        self
    }

    /// A user bearer token valid right now.
    ///
    /// Returns the cached token when unexpired; otherwise runs whichever
    /// authentication steps are needed. A stale organization token that
    /// the user step rejects is discarded and both steps rerun once.
    pub async fn bearer_token(&self) -> Result<String, AuthError> {
        let mut state = self.state.lock().await;
        let now = Utc::now();

        if let Some(token) = &state.user_token
            && token.is_valid(now)
        {
            tracing::debug!(
                environment = %self.environment,
                expires_at = %token.expires_at,
                "Reusing cached user token"
            );
            return Ok(token.bearer.clone());
        }

        tracing::info!(environment = %self.environment, "Authenticating with DAT");

        if state.org_token.is_none() {
            state.org_token = Some(self.fetch_org_token().await?);
        }

        let org_token = state.org_token.clone().unwrap_or_default();
        let user_token = match self.fetch_user_token(&org_token).await {
            Ok(token) => token,
            Err(AuthError::InvalidCredentials { .. }) => {
                // The cached organization token may itself have lapsed;
                // reissue it once before giving up.
                tracing::warn!(
                    environment = %self.environment,
                    "User token request rejected; reissuing organization token"
                );
                let fresh_org = self.fetch_org_token().await?;
                state.org_token = Some(fresh_org.clone());
                self.fetch_user_token(&fresh_org).await?
            }
            Err(other) => return Err(other),
        };

        let bearer = user_token.bearer.clone();
        tracing::info!(
            environment = %self.environment,
            expires_at = %user_token.expires_at,
            "User token issued"
        );
        state.user_token = Some(user_token);
        Ok(bearer)
    }

    async fn fetch_org_token(&self) -> Result<String, AuthError> {
        let url = format!("{}/access/v1/token/organization", self.identity_base_url);
        let request = OrgTokenRequest {
            username: &self.credentials.username,
            password: &self.credentials.password,
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(auth_rejection(self.environment, status, detail));
        }

        let token: TokenResponse = response.json().await.map_err(|e| AuthError::TokenIssuance {
            message: format!("malformed organization token response: {e}"),
        })?;
        Ok(token.access_token)
    }

    async fn fetch_user_token(&self, org_token: &str) -> Result<UserToken, AuthError> {
        let url = format!("{}/access/v1/token/user", self.identity_base_url);
        let request = UserTokenRequest {
            username: &self.credentials.user,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(org_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(auth_rejection(self.environment, status, detail));
        }

        let token: TokenResponse = response.json().await.map_err(|e| AuthError::TokenIssuance {
            message: format!("malformed user token response: {e}"),
        })?;

        let expires_in = token
            .expires_in
            .and_then(|secs| i64::try_from(secs).ok())
            .unwrap_or(DEFAULT_USER_TOKEN_SECS);
        Ok(UserToken {
            bearer: token.access_token,
            expires_at: Utc::now() + Duration::seconds(expires_in),
        })
    }
}

fn auth_rejection(environment: DatEnvironment, status: StatusCode, detail: String) -> AuthError {
    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        AuthError::InvalidCredentials {
            environment: environment.to_string(),
            detail,
        }
    } else {
        AuthError::TokenIssuance {
            message: format!("HTTP {status}: {detail}"),
        }
    }
}
