//! Catalog fetch error types.

/// Errors that can occur when fetching the trip catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected our credentials
    #[error("unauthorized: check CATALOG_API_KEY")]
    Unauthorized,

    /// API key contains characters not allowed in a header
    #[error("invalid API key format")]
    InvalidApiKey,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Failed to read a catalog file
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}
