//! Unified error handling for the pado crate
//!
//! Domain-specific errors ([`SourceError`], [`ReposError`]) stay local to
//! their modules; this unified `Error` is what crosses module boundaries
//! and what the HTTP layer maps onto status codes.
//!
//! Trend source failures deserve a note: the orchestrator absorbs every
//! [`SourceError`] by substituting fallback data, so the `Source` variant
//! only appears when a caller uses the adapter directly.

use std::io;
use thiserror::Error;

pub use crate::repos::ReposError;
pub use crate::trends::error::SourceError;

/// Unified error type for the pado crate
#[derive(Error, Debug)]
pub enum Error {
    /// Trend source failure (absorbed into fallback data on request paths)
    #[error("Trend source error: {0}")]
    Source(#[from] SourceError),

    /// Repository listing failure
    #[error("Repos error: {0}")]
    Repos(#[from] ReposError),

    /// Caller-supplied input was rejected at the boundary
    #[error("{0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// True when the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: err.to_string(),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_client_error() {
        let err = Error::invalid_input("블로그 URL이 필요합니다.");
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "블로그 URL이 필요합니다.");
    }

    #[test]
    fn test_source_error_is_not_client_error() {
        let err = Error::from(SourceError::EmptyResponse);
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_error_conversion() {
        let source_err = SourceError::Status(503);
        let unified: Error = source_err.into();
        assert!(matches!(unified, Error::Source(_)));
    }

    #[test]
    fn test_config_error_message() {
        let err = Error::config("invalid bind address");
        assert_eq!(err.to_string(), "Config error: invalid bind address");
    }
}
