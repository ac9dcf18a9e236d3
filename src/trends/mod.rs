//! External trend source adapter and fallback data
//!
//! This module covers both halves of the trend data path:
//!
//! - [`client`] - HTTP adapter for the live trend source
//! - [`fallback`] - deterministic substitute data for source outages
//! - [`error`] - the source failure taxonomy
//!
//! The [`TrendSource`] trait is the seam between the orchestrator and the
//! live source, so tests can inject a stub in place of the HTTP client.

pub mod client;
pub mod error;
pub mod fallback;

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::models::{QueryGroup, TrendPeriod, TrendPoint};

pub use client::GoogleTrendsClient;
pub use error::{SourceError, SourceResult};

/// Interest data returned by a trend source, before the orchestrator
/// attaches the analyzed keyword list
#[derive(Debug, Clone, Default)]
pub struct InterestData {
    /// Chronologically ordered interest points with synthesized dates
    pub interest_over_time: Vec<TrendPoint>,

    /// Related queries keyed by keyword
    pub related_queries: BTreeMap<String, QueryGroup>,
}

/// A provider of keyword interest and trending-search data
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// Fetch interest-over-time and related queries for a keyword set
    async fn interest_for(
        &self,
        keywords: &[String],
        period: TrendPeriod,
    ) -> SourceResult<InterestData>;

    /// Fetch trending searches for a time window
    async fn trending(&self, period: TrendPeriod) -> SourceResult<Vec<String>>;
}
