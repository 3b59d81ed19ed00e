//! Error types for catalog source operations.
//!
//! Only the primary-registry client surfaces these; the local-server
//! client absorbs every failure and returns an empty catalog instead.

use thiserror::Error;

/// Result type alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors related to fetching a model catalog.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Request completed with a non-success HTTP status.
    #[error("registry request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("failed to parse registry response: {0}")]
    JsonParse(#[from] serde_json::Error),
}
