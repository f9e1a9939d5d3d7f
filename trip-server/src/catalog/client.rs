//! Trip catalog HTTP client.
//!
//! Fetches the full catalog from the backend in one request. There is no
//! retry here: a failed fetch leaves the store empty.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::debug;

use super::CatalogSource;
use super::error::CatalogError;
use super::types::{CatalogResponse, TripDto};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much of an unparseable body to keep for the error message.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Backend base URL; trips are fetched from `{base_url}/trips`
    pub base_url: String,
    /// Optional bearer token for the backend
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Create a new config for the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Authenticate with a bearer token.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the backend trip catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|_| CatalogError::InvalidApiKey)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL the catalog is fetched from.
    pub fn trips_url(&self) -> String {
        format!("{}/trips", self.base_url)
    }

    /// Fetch every trip from the backend, in backend order.
    pub async fn fetch_all(&self) -> Result<Vec<TripDto>, CatalogError> {
        let url = self.trips_url();
        debug!(%url, "fetching trip catalog");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(CatalogError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_catalog(&body)
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch_trips(&self) -> Result<Vec<TripDto>, CatalogError> {
        self.fetch_all().await
    }

    fn describe(&self) -> String {
        self.trips_url()
    }
}

/// Parse a catalog body in any of the accepted shapes.
pub(crate) fn parse_catalog(body: &str) -> Result<Vec<TripDto>, CatalogError> {
    let response: CatalogResponse =
        serde_json::from_str(body).map_err(|e| CatalogError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
        })?;

    Ok(response.into_trips())
}
