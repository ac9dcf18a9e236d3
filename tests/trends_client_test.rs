//! Integration tests for GoogleTrendsClient using wiremock
//!
//! These tests validate the trend source adapter's behavior with mock
//! servers: wire decoding, date synthesis, the failure taxonomy, and the
//! single-attempt policy.

use chrono::Utc;
use pado::config::TrendsConfig;
use pado::models::TrendPeriod;
use pado::trends::{GoogleTrendsClient, SourceError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GoogleTrendsClient {
    let config = TrendsConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    GoogleTrendsClient::new(config).unwrap()
}

fn keywords(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Test successful interest fetch with related queries
#[tokio::test]
async fn test_fetch_interest_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interest-over-time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "timeline": [
                {"tistory.com": 40.0},
                {"tistory.com": 55.0},
                {"tistory.com": 72.0}
            ]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/related-queries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "queries": {
                "tistory.com": {
                    "top": [{"query": "티스토리 스킨", "value": 100.0}],
                    "rising": []
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data = client
        .fetch_interest(&keywords(&["tistory.com"]), TrendPeriod::Yearly)
        .await
        .unwrap();

    assert_eq!(data.interest_over_time.len(), 3);
    assert_eq!(data.interest_over_time[2].values["tistory.com"], 72.0);
    assert_eq!(
        data.related_queries["tistory.com"].top[0].query,
        "티스토리 스킨"
    );
}

/// Test synthesized dates end today and stay chronological
#[tokio::test]
async fn test_fetch_interest_date_synthesis() {
    let mock_server = MockServer::start().await;

    let timeline: Vec<_> = (0..5).map(|i| json!({"velog.io": i as f64})).collect();
    Mock::given(method("GET"))
        .and(path("/interest-over-time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"timeline": timeline})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/related-queries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"queries": {}})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data = client
        .fetch_interest(&keywords(&["velog.io"]), TrendPeriod::Yearly)
        .await
        .unwrap();

    let points = &data.interest_over_time;
    let today = Utc::now().date_naive();

    assert_eq!(points.last().unwrap().date, today);
    // 365 / 4 = 91 day spacing for 5 points
    assert_eq!((today - points[0].date).num_days(), 4 * 91);
    for pair in points.windows(2) {
        assert!(pair[0].date <= pair[1].date);
    }
}

/// Test requests carry the configured region and timeframe
#[tokio::test]
async fn test_request_carries_geo_and_timeframe() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trending-searches"))
        .and(query_param("geo", "KR"))
        .and(query_param("timeframe", "today 7-d"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"searches": ["개발자"]})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let searches = client.fetch_trending(TrendPeriod::Weekly).await.unwrap();

    assert_eq!(searches, vec!["개발자"]);
}

/// Test a server error is reported as a status failure
#[tokio::test]
async fn test_server_error_reported_as_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interest-over-time"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .fetch_interest(&keywords(&["medium.com"]), TrendPeriod::Monthly)
        .await;

    assert!(matches!(result, Err(SourceError::Status(500))));
}

/// Test the adapter makes exactly one attempt per call
#[tokio::test]
async fn test_no_retry_on_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trending-searches"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch_trending(TrendPeriod::Daily).await;

    assert!(result.is_err());
    // Mock expectation of exactly one call is verified on drop
}

/// Test a malformed body is reported as such
#[tokio::test]
async fn test_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interest-over-time"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .fetch_interest(&keywords(&["github.io"]), TrendPeriod::Yearly)
        .await;

    assert!(matches!(result, Err(SourceError::Malformed(_))));
}

/// Test an empty timeline counts as source unavailability
#[tokio::test]
async fn test_empty_timeline_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interest-over-time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"timeline": []})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .fetch_interest(&keywords(&["blog.daum.net"]), TrendPeriod::Yearly)
        .await;

    assert!(matches!(result, Err(SourceError::EmptyResponse)));
}

/// Test an empty trending list counts as source unavailability
#[tokio::test]
async fn test_empty_trending_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trending-searches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"searches": []})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch_trending(TrendPeriod::Yearly).await;

    assert!(matches!(result, Err(SourceError::EmptyResponse)));
}
