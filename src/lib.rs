//! pado - Korean Blog Platform Trend Aggregator
//!
//! A web backend that aggregates trend signals for Korean blog platforms
//! and serves them through a small JSON HTTP surface, substituting
//! deterministic fallback data when the live trend source is unreachable.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`keyword`] - URL to keyword token normalization
//! - [`trends`] - Trend source adapter and fallback data
//! - [`ranking`] - Platform scoring and ranking
//! - [`analyzer`] - Request orchestration
//! - [`repos`] - Repository-hosting API client
//! - [`server`] - HTTP API server
//! - [`models`] - Core data structures and types
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use pado::analyzer::TrendAnalyzer;
//! use pado::config::Config;
//! use pado::trends::GoogleTrendsClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = GoogleTrendsClient::new(config.trends)?;
//!     let analyzer = TrendAnalyzer::new(Arc::new(client));
//!     let urls = vec!["https://blog.naver.com".to_string()];
//!     let analysis = analyzer.analyze_urls(&urls).await?;
//!     println!("{:?}", analysis.analyzed_domains);
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod keyword;
pub mod models;
pub mod ranking;
pub mod repos;
pub mod server;
pub mod trends;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analyzer::TrendAnalyzer;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::models::{AnalysisResult, TrendPeriod, TrendPoint};
    pub use crate::ranking::{platform_ranking, PlatformEntry};
    pub use crate::server::{ApiServer, ServerConfig};
    pub use crate::trends::{GoogleTrendsClient, SourceError, TrendSource};
}

// Direct re-exports for convenience
pub use models::{AnalysisResult, TrendPeriod, TrendPoint};
