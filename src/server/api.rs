//! REST API handlers for the trend aggregation server
//!
//! This module defines the API routes and handlers. Response bodies carry
//! a `success` flag; error responses share the `{success: false, error}`
//! shape across all endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::models::{AnalysisResult, TrendPeriod};
use crate::ranking::{platform_ranking, PlatformEntry};

use super::AppState;

// ============================================================================
// API Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Simple error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Aggregate platform trends response
#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub success: bool,
    pub trends: AnalysisResult,
}

/// Trending searches payload for a single period
#[derive(Debug, Serialize)]
pub struct TrendingSearches {
    pub trending_searches: Vec<String>,
}

/// Period trends response
#[derive(Debug, Serialize)]
pub struct PeriodTrendsResponse {
    pub success: bool,
    pub trends: TrendingSearches,
    pub period: &'static str,
}

/// Custom analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Custom analysis response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
}

/// Platform ranking response
#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub success: bool,
    pub ranking: Vec<PlatformEntry>,
}

// ============================================================================
// API Routes
// ============================================================================

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/api/health", get(health_check))
        // Trend endpoints
        .route("/api/trends", get(platform_trends))
        .route("/api/trends/{period}", get(period_trends))
        // Analysis endpoints
        .route("/api/analyze", post(analyze_blogs))
        // Ranking endpoints
        .route("/api/ranking", get(blog_ranking))
        .with_state(state)
}

// ============================================================================
// Health Handlers
// ============================================================================

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.start_time.elapsed().as_secs();

    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: uptime,
    }))
}

// ============================================================================
// Trend Handlers
// ============================================================================

/// Aggregate trend analysis for the popular blog platforms
async fn platform_trends(State(state): State<AppState>) -> impl IntoResponse {
    let trends = state.analyzer.popular_platforms().await;

    Json(TrendsResponse {
        success: true,
        trends,
    })
}

/// Trending searches for a specific time window
async fn period_trends(
    State(state): State<AppState>,
    Path(period_str): Path<String>,
) -> axum::response::Response {
    let period = match TrendPeriod::parse(&period_str) {
        Some(p) => p,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!(
                    "Invalid period: {}. Expected daily, week, month, or year",
                    period_str
                ))),
            )
                .into_response();
        }
    };

    let trending_searches = state.analyzer.trending(period).await;

    Json(PeriodTrendsResponse {
        success: true,
        trends: TrendingSearches { trending_searches },
        period: period.as_str(),
    })
    .into_response()
}

// ============================================================================
// Analysis Handlers
// ============================================================================

/// Analyze caller-supplied blog URLs
async fn analyze_blogs(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> axum::response::Response {
    match state.analyzer.analyze_urls(&request.urls).await {
        Ok(analysis) => Json(AnalyzeResponse {
            success: true,
            analysis,
        })
        .into_response(),
        Err(e) if e.is_client_error() => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response(),
    }
}

// ============================================================================
// Ranking Handlers
// ============================================================================

/// Blog platform ranking with composite scores
async fn blog_ranking() -> impl IntoResponse {
    Json(RankingResponse {
        success: true,
        ranking: platform_ranking(),
    })
}

// ============================================================================
// Tests
// ============================================================================
