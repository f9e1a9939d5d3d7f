//! Identity service client.
//!
//! Roles are owned by the identity service; this client only forwards the
//! caller's token and reads back who they are.

use reqwest::header::{AUTHORIZATION, HeaderValue};
use tracing::debug;

use super::error::IdentityError;
use super::session::Identity;

/// Configuration for the identity client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Base URL; identities are resolved at `{base_url}/me`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl IdentityConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 10,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the external identity service.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up the identity behind a bearer token.
    pub async fn resolve(&self, token: &str) -> Result<Identity, IdentityError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| IdentityError::MalformedToken)?;
        auth.set_sensitive(true);

        let url = format!("{}/me", self.base_url);
        let response = self.http.get(&url).header(AUTHORIZATION, auth).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(IdentityError::Unauthenticated);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let identity: Identity =
            serde_json::from_str(&body).map_err(|e| IdentityError::Json {
                message: e.to_string(),
            })?;

        debug!(email = %identity.email, role = ?identity.role, "resolved identity");
        Ok(identity)
    }
}
