//! HTTP adapter for the external trend source
//!
//! Issues single-attempt, bounded-timeout requests for interest-over-time,
//! related-query, and trending-search data. Every failure mode (transport,
//! status, malformed body, empty data) is reported as a [`SourceError`] for
//! the orchestrator to absorb; this client never retries.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::config::TrendsConfig;
use crate::models::{QueryGroup, TrendPeriod, TrendPoint};

use super::error::{SourceError, SourceResult};
use super::{InterestData, TrendSource};

/// The source reports points over this window; synthesized dates are
/// distributed backward across it
const SOURCE_WINDOW_DAYS: i64 = 365;

/// Raw interest-over-time rows from the source (values only, no dates)
#[derive(Debug, Deserialize)]
struct InterestResponse {
    timeline: Vec<BTreeMap<String, f64>>,
}

/// Related queries keyed by keyword
#[derive(Debug, Deserialize)]
struct RelatedResponse {
    queries: BTreeMap<String, QueryGroup>,
}

/// Trending search strings
#[derive(Debug, Deserialize)]
struct TrendingResponse {
    searches: Vec<String>,
}

/// Client for the Google Trends style interest API
///
/// Constructed from an explicit, immutable [`TrendsConfig`]; there is no
/// process-global client state.
pub struct GoogleTrendsClient {
    client: Client,
    config: TrendsConfig,
}

impl GoogleTrendsClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Http` if the HTTP client cannot be built
    pub fn new(config: TrendsConfig) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .gzip(true)
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch interest-over-time and related queries for a keyword set
    ///
    /// The source returns bare value rows; calendar dates are synthesized
    /// by distributing the points backward from today across the 365-day
    /// window, using the same integer-division spacing for every gap.
    pub async fn fetch_interest(
        &self,
        keywords: &[String],
        period: TrendPeriod,
    ) -> SourceResult<InterestData> {
        let query = [
            ("keywords", keywords.join(",")),
            ("timeframe", period.timeframe().to_string()),
            ("geo", self.config.geo.clone()),
            ("hl", self.config.locale.clone()),
            ("tz", self.config.tz_offset.to_string()),
        ];

        let interest: InterestResponse = self.get_json("interest-over-time", &query).await?;
        if interest.timeline.is_empty() {
            return Err(SourceError::EmptyResponse);
        }

        let related: RelatedResponse = self.get_json("related-queries", &query).await?;

        Ok(InterestData {
            interest_over_time: Self::date_points(interest.timeline),
            related_queries: related.queries,
        })
    }

    /// Fetch the current trending searches for the configured region
    pub async fn fetch_trending(&self, period: TrendPeriod) -> SourceResult<Vec<String>> {
        let query = [
            ("timeframe", period.timeframe().to_string()),
            ("geo", self.config.geo.clone()),
            ("hl", self.config.locale.clone()),
        ];

        let trending: TrendingResponse = self.get_json("trending-searches", &query).await?;
        if trending.searches.is_empty() {
            return Err(SourceError::EmptyResponse);
        }

        Ok(trending.searches)
    }

    /// Attach synthesized dates to raw value rows
    ///
    /// For n > 1 points, row i is dated `(n-1-i) * (365 / (n-1))` days
    /// before today (integer division); a single point is dated today.
    fn date_points(timeline: Vec<BTreeMap<String, f64>>) -> Vec<TrendPoint> {
        let today = Utc::now().date_naive();
        let n = timeline.len();

        timeline
            .into_iter()
            .enumerate()
            .map(|(i, values)| {
                let days_back = if n > 1 {
                    (n - 1 - i) as i64 * (SOURCE_WINDOW_DAYS / (n - 1) as i64)
                } else {
                    0
                };
                TrendPoint {
                    date: today - Duration::days(days_back),
                    values,
                }
            })
            .collect()
    }

    /// Single-attempt GET returning deserialized JSON
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> SourceResult<T> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(SourceError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SourceError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl TrendSource for GoogleTrendsClient {
    async fn interest_for(
        &self,
        keywords: &[String],
        period: TrendPeriod,
    ) -> SourceResult<InterestData> {
        self.fetch_interest(keywords, period).await
    }

    async fn trending(&self, period: TrendPeriod) -> SourceResult<Vec<String>> {
        self.fetch_trending(period).await
    }
}
