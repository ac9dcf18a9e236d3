//! Request orchestration for trend analysis
//!
//! The [`TrendAnalyzer`] is the coordinator between the keyword
//! normalizer, the live trend source, and the fallback provider. It owns
//! the failure policy: source outages are absorbed locally by substituting
//! fallback data and never surface to callers, while invalid caller input
//! is rejected at the boundary before any lookup happens.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::keyword;
use crate::models::{AnalysisResult, TrendPeriod};
use crate::trends::{fallback, TrendSource};

/// Blog platforms analyzed by the aggregate trends endpoint
const POPULAR_PLATFORM_DOMAINS: &[&str] = &[
    "tistory.com",
    "blog.naver.com",
    "blog.daum.net",
    "medium.com",
    "velog.io",
    "github.io",
];

/// Orchestrates keyword normalization, source calls, and fallback
/// substitution
pub struct TrendAnalyzer {
    source: Arc<dyn TrendSource>,
}

impl TrendAnalyzer {
    /// Create an analyzer backed by the given trend source
    pub fn new(source: Arc<dyn TrendSource>) -> Self {
        Self { source }
    }

    /// Analyze caller-supplied blog URLs
    ///
    /// An empty URL list is a boundary validation failure and returns
    /// `Error::InvalidInput`; the normalizer's own default token is
    /// reserved for internal callers. After validation this operation
    /// cannot fail: source outages degrade to synthetic data.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` when `urls` is empty
    pub async fn analyze_urls(&self, urls: &[String]) -> Result<AnalysisResult> {
        if urls.is_empty() {
            return Err(Error::invalid_input("블로그 URL이 필요합니다."));
        }

        let keywords = keyword::normalize_urls(urls);
        tracing::debug!(keywords = ?keywords, "analyzing blog keywords");

        Ok(self.interest_with_fallback(&keywords).await)
    }

    /// Analyze the fixed list of popular blog platforms
    pub async fn popular_platforms(&self) -> AnalysisResult {
        let keywords: Vec<String> = POPULAR_PLATFORM_DOMAINS
            .iter()
            .map(|d| d.to_string())
            .collect();

        self.interest_with_fallback(&keywords).await
    }

    /// Get trending searches for a time window
    ///
    /// Falls back to the static per-period list when the live source is
    /// unavailable; this operation never fails.
    pub async fn trending(&self, period: TrendPeriod) -> Vec<String> {
        match self.source.trending(period).await {
            Ok(searches) => searches,
            Err(e) => {
                tracing::warn!(period = %period, error = %e, "trend source unavailable, using fallback searches");
                fallback::trending_searches(period)
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            }
        }
    }

    /// Query the source for a keyword set, substituting fallback data on
    /// any source failure
    async fn interest_with_fallback(&self, keywords: &[String]) -> AnalysisResult {
        match self.source.interest_for(keywords, TrendPeriod::Yearly).await {
            Ok(data) => AnalysisResult {
                interest_over_time: data.interest_over_time,
                related_queries: data.related_queries,
                analyzed_domains: keywords.to_vec(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "trend source unavailable, synthesizing analysis");
                fallback::keyword_analysis(keywords)
            }
        }
    }
}
