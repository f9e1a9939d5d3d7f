//! Identity service error types.

/// Errors that can occur when resolving a session token.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Token missing, expired or unknown
    #[error("unauthenticated: token rejected by identity service")]
    Unauthenticated,

    /// Token contains characters not allowed in a header
    #[error("malformed token")]
    MalformedToken,

    /// Identity service returned an error status
    #[error("identity service error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
