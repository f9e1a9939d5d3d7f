//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::auth::IdentityConfig;
use crate::catalog::CatalogConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default catalog request timeout (seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors in the server's environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Neither a catalog URL nor a catalog file was given
    #[error("no trip catalog configured: set CATALOG_URL or CATALOG_FILE")]
    MissingCatalog,

    /// A variable was set to something unusable
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Where the trip catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSourceConfig {
    /// Backend REST service.
    Http {
        url: String,
        api_key: Option<String>,
        timeout_secs: u64,
    },
    /// JSON file on disk.
    File(PathBuf),
}

impl CatalogSourceConfig {
    /// Client configuration, for the HTTP source.
    pub fn client_config(&self) -> Option<CatalogConfig> {
        match self {
            CatalogSourceConfig::Http {
                url,
                api_key,
                timeout_secs,
            } => {
                let config = CatalogConfig::new(url.clone()).with_timeout(*timeout_secs);
                Some(match api_key {
                    Some(key) => config.with_api_key(key.clone()),
                    None => config,
                })
            }
            CatalogSourceConfig::File(_) => None,
        }
    }
}

/// Everything `main` needs to start the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub catalog: CatalogSourceConfig,
    /// Identity service; admin routes are unavailable without one.
    pub identity: Option<IdentityConfig>,
    /// Directory served at `/static`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; empty values count as unset.
    ///
    /// Variables:
    /// - `TRIP_BIND_ADDR` (default `127.0.0.1:3000`)
    /// - `CATALOG_FILE` or `CATALOG_URL` (file wins when both are set)
    /// - `CATALOG_API_KEY`, `CATALOG_TIMEOUT_SECS` (default 30)
    /// - `IDENTITY_URL`
    /// - `STATIC_DIR` (default `static`)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_value = get("TRIP_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_value
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "TRIP_BIND_ADDR",
                value: bind_value.clone(),
                reason: e.to_string(),
            })?;

        let timeout_secs = match get("CATALOG_TIMEOUT_SECS") {
            Some(value) => parse_timeout(&value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let catalog = match (get("CATALOG_FILE"), get("CATALOG_URL")) {
            (Some(path), _) => CatalogSourceConfig::File(PathBuf::from(path)),
            (None, Some(url)) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::Invalid {
                        key: "CATALOG_URL",
                        value: url,
                        reason: "must be an http:// or https:// URL".to_string(),
                    });
                }
                CatalogSourceConfig::Http {
                    url,
                    api_key: get("CATALOG_API_KEY"),
                    timeout_secs,
                }
            }
            (None, None) => return Err(ConfigError::MissingCatalog),
        };

        let identity =
            get("IDENTITY_URL").map(|url| IdentityConfig::new(url).with_timeout(timeout_secs));

        let static_dir = PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| "static".to_string()));

        Ok(Self {
            bind_addr,
            catalog,
            identity,
            static_dir,
        })
    }
}

fn parse_timeout(value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key: "CATALOG_TIMEOUT_SECS",
        value: value.to_string(),
        reason,
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid("must be at least 1".to_string())),
        Ok(secs) => Ok(secs),
        Err(e) => Err(invalid(e.to_string())),
    }
}
