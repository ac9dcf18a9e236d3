//! Blog platform ranking with weighted composite scores
//!
//! Ranks a fixed reference list of Korean blog-hosting platforms by a
//! weighted sum of traffic, trend, and growth metrics. The computation is
//! pure and deterministic: the same reference table always produces the
//! same scores and ordering.

use serde::{Deserialize, Serialize};

/// Weight applied to the traffic score
const TRAFFIC_WEIGHT: f64 = 0.4;

/// Weight applied to the trend score
const TREND_WEIGHT: f64 = 0.4;

/// Weight applied to the growth rate
const GROWTH_WEIGHT: f64 = 0.2;

/// One blog-hosting platform under evaluation
///
/// `total_score` and `rank` start unset and are filled in exactly once by
/// [`rank_platforms`]; the base metrics are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformEntry {
    pub platform: String,
    pub domain: String,
    pub traffic_score: f64,
    pub trend_score: f64,
    pub user_count: u64,
    pub growth_rate: f64,

    /// Weighted composite score, set during ranking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<f64>,

    /// 1-based position in the ranked order, set during ranking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl PlatformEntry {
    fn base(
        platform: &str,
        domain: &str,
        traffic_score: f64,
        trend_score: f64,
        user_count: u64,
        growth_rate: f64,
    ) -> Self {
        Self {
            platform: platform.to_string(),
            domain: domain.to_string(),
            traffic_score,
            trend_score,
            user_count,
            growth_rate,
            total_score: None,
            rank: None,
        }
    }

    /// Weighted composite score: 0.4*traffic + 0.4*trend + 0.2*growth
    pub fn composite_score(&self) -> f64 {
        self.traffic_score * TRAFFIC_WEIGHT
            + self.trend_score * TREND_WEIGHT
            + self.growth_rate * GROWTH_WEIGHT
    }
}

/// Static reference table of evaluated platforms
///
/// Process-wide, read-only; every ranking request starts from a fresh copy
/// of this list.
pub fn reference_platforms() -> Vec<PlatformEntry> {
    vec![
        PlatformEntry::base("Tistory", "tistory.com", 95.0, 88.0, 15_000_000, 12.5),
        PlatformEntry::base("Naver Blog", "blog.naver.com", 92.0, 85.0, 12_000_000, 8.3),
        PlatformEntry::base("Medium", "medium.com", 88.0, 90.0, 8_000_000, 15.2),
        PlatformEntry::base("Velog", "velog.io", 82.0, 92.0, 3_000_000, 25.7),
        PlatformEntry::base("GitHub Pages", "github.io", 85.0, 87.0, 5_000_000, 18.9),
        PlatformEntry::base("Daum Blog", "blog.daum.net", 75.0, 70.0, 6_000_000, 2.1),
    ]
}

/// Score and rank a list of platform entries
///
/// Sorts descending by composite score with a stable sort, so entries with
/// equal scores keep their original relative order, then assigns 1-based
/// ranks.
pub fn rank_platforms(mut entries: Vec<PlatformEntry>) -> Vec<PlatformEntry> {
    for entry in &mut entries {
        entry.total_score = Some(entry.composite_score());
    }

    entries.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = Some(i as u32 + 1);
    }

    entries
}

/// Rank the static reference table
pub fn platform_ranking() -> Vec<PlatformEntry> {
    rank_platforms(reference_platforms())
}
