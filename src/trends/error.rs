//! Error types for the external trend source adapter

use thiserror::Error;

/// Errors that can occur while querying the external trend source
///
/// Every variant is treated as "source unavailable" by the orchestrator
/// and converted into fallback data; none of them reach HTTP callers.
#[derive(Error, Debug)]
pub enum SourceError {
    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status code from the source
    #[error("Source returned status {0}")]
    Status(u16),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// Source returned no usable data
    #[error("Empty response from source")]
    EmptyResponse,

    /// Response body could not be interpreted
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl SourceError {
    /// Classify a reqwest error, separating timeouts from other transport
    /// failures
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

/// Result type for trend source operations
pub type SourceResult<T> = Result<T, SourceError>;
