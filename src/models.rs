// Core data structures for the pado trend aggregator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One interest-over-time data point
///
/// Values are keyed by the normalized keyword they belong to. The
/// serialized form flattens the value map next to the date, matching the
/// `interest_over_time` rows of the JSON API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    /// Calendar date of this data point
    pub date: NaiveDate,

    /// Interest value per keyword (0-100 scale from the source)
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl TrendPoint {
    /// Create a data point with no values yet
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            values: BTreeMap::new(),
        }
    }
}

/// A single related search query with its interest value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedQuery {
    pub query: String,
    pub value: f64,
}

impl RelatedQuery {
    pub fn new(query: impl Into<String>, value: f64) -> Self {
        Self {
            query: query.into(),
            value,
        }
    }
}

/// Related queries for one keyword; either list may be empty
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryGroup {
    pub top: Vec<RelatedQuery>,
    pub rising: Vec<RelatedQuery>,
}

/// Unified result of a keyword trend analysis
///
/// Constructed fresh per request and returned to the caller; never shared
/// or persisted across requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Chronologically ordered interest data points
    pub interest_over_time: Vec<TrendPoint>,

    /// Related queries keyed by keyword
    pub related_queries: BTreeMap<String, QueryGroup>,

    /// Normalized keywords that were analyzed
    pub analyzed_domains: Vec<String>,
}

/// Requested trend time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl TrendPeriod {
    /// Create from a route segment (accepts both long and short forms)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Some(Self::Daily),
            "week" | "weekly" => Some(Self::Weekly),
            "month" | "monthly" => Some(Self::Monthly),
            "year" | "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// Get string representation used in API responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Get the timeframe string for trend source requests
    pub fn timeframe(&self) -> &'static str {
        match self {
            Self::Daily => "today 1-d",
            Self::Weekly => "today 7-d",
            Self::Monthly => "today 1-m",
            Self::Yearly => "today 12-m",
        }
    }

    /// Get all periods
    pub fn all() -> Vec<Self> {
        vec![Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly]
    }
}

impl std::fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parse() {
        assert_eq!(TrendPeriod::parse("daily"), Some(TrendPeriod::Daily));
        assert_eq!(TrendPeriod::parse("day"), Some(TrendPeriod::Daily));
        assert_eq!(TrendPeriod::parse("week"), Some(TrendPeriod::Weekly));
        assert_eq!(TrendPeriod::parse("MONTH"), Some(TrendPeriod::Monthly));
        assert_eq!(TrendPeriod::parse("yearly"), Some(TrendPeriod::Yearly));
        assert_eq!(TrendPeriod::parse("hourly"), None);
    }

    #[test]
    fn test_period_timeframe() {
        assert_eq!(TrendPeriod::Daily.timeframe(), "today 1-d");
        assert_eq!(TrendPeriod::Yearly.timeframe(), "today 12-m");
    }

    #[test]
    fn test_period_labels() {
        assert_eq!(TrendPeriod::Weekly.to_string(), "weekly");
        assert_eq!(TrendPeriod::all().len(), 4);
    }

    #[test]
    fn test_trend_point_serialization_flattens_values() {
        let mut point = TrendPoint::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        point.values.insert("tistory.com".to_string(), 72.0);

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2025-03-01");
        assert_eq!(json["tistory.com"], 72.0);
    }

    #[test]
    fn test_analysis_result_roundtrip() {
        let mut result = AnalysisResult::default();
        result.analyzed_domains.push("velog.io".to_string());
        result
            .related_queries
            .insert("velog.io".to_string(), QueryGroup::default());

        let json = serde_json::to_string(&result).unwrap();
        let restored: AnalysisResult = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.analyzed_domains, vec!["velog.io"]);
        assert!(restored.related_queries.contains_key("velog.io"));
    }
}
