//! Deterministic fallback data for trend source outages
//!
//! When the live trend source cannot be reached, these pure lookups and
//! synthesizers substitute representative data so callers always receive
//! a well-formed result. Nothing here performs I/O or can fail.

use chrono::{Duration, Utc};

use crate::models::{AnalysisResult, QueryGroup, RelatedQuery, TrendPoint};
use crate::models::TrendPeriod;

/// Fallback trending searches for the daily window
const DAILY_SEARCHES: [&str; 20] = [
    "파이썬",
    "자바스크립트",
    "리액트",
    "웹개발",
    "코딩",
    "개발자",
    "프로그래밍",
    "깃허브",
    "티스토리",
    "네이버블로그",
    "벨로그",
    "미디엄",
    "개발도구",
    "IDE",
    "VS Code",
    "데이터분석",
    "인공지능",
    "머신러닝",
    "클라우드",
    "DevOps",
];

/// Fallback trending searches for the weekly window
const WEEKLY_SEARCHES: [&str; 20] = [
    "블로그 플랫폼",
    "개발자 커뮤니티",
    "기술 블로그",
    "프로그래밍 언어",
    "웹 개발",
    "모바일 앱 개발",
    "데이터 분석",
    "인공지능",
    "클라우드 컴퓨팅",
    "보안",
    "DevOps",
    "마이크로서비스",
    "도커",
    "쿠버네티스",
    "CI/CD",
    "테스트 자동화",
    "코드 리뷰",
    "페어 프로그래밍",
    "애자일",
    "스크럼",
];

/// Fallback trending searches for the monthly window
const MONTHLY_SEARCHES: [&str; 20] = [
    "스프링부트",
    "장고",
    "플라스크",
    "노드js",
    "익스프레스",
    "뷰js",
    "앵귤러",
    "타입스크립트",
    "고랭",
    "러스트",
    "코틀린",
    "스위프트",
    "플러터",
    "리액트네이티브",
    "유니티",
    "블렌더",
    "피그마",
    "제플린",
    "노션",
    "슬랙",
];

/// Fallback trending searches for the yearly window
const YEARLY_SEARCHES: [&str; 20] = [
    "메타버스",
    "NFT",
    "블록체인",
    "Web3",
    "DeFi",
    "크립토",
    "비트코인",
    "이더리움",
    "솔라나",
    "폴리곤",
    "디앱",
    "스마트 컨트랙트",
    "DAO",
    "DeFi 프로토콜",
    "NFT 마켓플레이스",
    "게임파이",
    "플레이투언",
    "스테이킹",
    "리퀴디티",
    "가스비",
];

/// Interest rows and related-query groups are synthesized for at most this
/// many keywords
const MAX_SYNTHETIC_KEYWORDS: usize = 3;

/// Number of synthetic interest points and their spacing in days
const SYNTHETIC_POINTS: usize = 3;
const SYNTHETIC_STEP_DAYS: i64 = 30;

/// Get the fixed trending-search list for a time window
pub fn trending_searches(period: TrendPeriod) -> &'static [&'static str; 20] {
    match period {
        TrendPeriod::Daily => &DAILY_SEARCHES,
        TrendPeriod::Weekly => &WEEKLY_SEARCHES,
        TrendPeriod::Monthly => &MONTHLY_SEARCHES,
        TrendPeriod::Yearly => &YEARLY_SEARCHES,
    }
}

/// Synthesize a keyword analysis result
///
/// Produces exactly three interest points dated 90, 60, and 30 days before
/// now (oldest first), with values `50 + 10*i + 5*j` for point index i and
/// keyword position j, and a top related-query list of three entries with
/// values 100/80/60 per keyword. Only the first three keywords receive
/// values; the full keyword list is still recorded as analyzed.
pub fn keyword_analysis(keywords: &[String]) -> AnalysisResult {
    let now = Utc::now().date_naive();
    let scored = &keywords[..keywords.len().min(MAX_SYNTHETIC_KEYWORDS)];

    let mut interest_over_time = Vec::with_capacity(SYNTHETIC_POINTS);
    for i in 0..SYNTHETIC_POINTS {
        let days_back = (SYNTHETIC_POINTS - i) as i64 * SYNTHETIC_STEP_DAYS;
        let mut point = TrendPoint::new(now - Duration::days(days_back));
        for (j, keyword) in scored.iter().enumerate() {
            let value = 50.0 + (i as f64 * 10.0) + (j as f64 * 5.0);
            point.values.insert(keyword.clone(), value);
        }
        interest_over_time.push(point);
    }

    let mut result = AnalysisResult {
        interest_over_time,
        ..Default::default()
    };

    for keyword in scored {
        let top = (1..=3)
            .map(|n| {
                let value = 100.0 - 20.0 * (n - 1) as f64;
                RelatedQuery::new(format!("{keyword} 관련 검색어 {n}"), value)
            })
            .collect();

        result.related_queries.insert(
            keyword.clone(),
            QueryGroup {
                top,
                rising: Vec::new(),
            },
        );
    }

    result.analyzed_domains = keywords.to_vec();
    result
}
