//! Repository-hosting API client
//!
//! Lists a user's blog-related repositories from the GitHub REST API.
//! This capability is part of the library surface but is deliberately not
//! mounted in any HTTP route; consumers call it directly.

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ReposConfig;

/// Repository name fragments that mark a repo as blog-related
const BLOG_NAME_MARKERS: &[&str] = &["blog", "blogger", "website", "site"];

/// Errors from the repository listing client
#[derive(Error, Debug)]
pub enum ReposError {
    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the API
    #[error("Repos API returned status {0}")]
    Status(u16),

    /// Token or header material could not be encoded
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
}

/// Raw repository record from the API
#[derive(Debug, Deserialize)]
struct RawRepo {
    name: String,
    description: Option<String>,
    stargazers_count: u64,
    forks_count: u64,
    html_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// A blog-related repository
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogRepo {
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RawRepo> for BlogRepo {
    fn from(raw: RawRepo) -> Self {
        Self {
            name: raw.name,
            description: raw.description,
            stars: raw.stargazers_count,
            forks: raw.forks_count,
            url: raw.html_url,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

/// Client for listing blog-related repositories
pub struct GithubClient {
    client: Client,
    config: ReposConfig,
}

impl GithubClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns `ReposError::InvalidCredentials` if the configured token
    /// cannot be used as a header value, or `ReposError::Http` if the
    /// client cannot be built
    pub fn new(config: ReposConfig) -> Result<Self, ReposError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(&format!("token {token}"))
                .map_err(|e| ReposError::InvalidCredentials(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .user_agent(format!("pado/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// List a user's blog-related repositories
    ///
    /// Filters the user's repositories to those whose name contains one of
    /// the blog markers (case-insensitive). Failures are logged and
    /// reported as an empty list, matching the degraded-data policy of the
    /// rest of the system.
    pub async fn blog_repos(&self, username: &str) -> Vec<BlogRepo> {
        match self.fetch_repos(username).await {
            Ok(repos) => repos,
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "repository listing failed");
                Vec::new()
            }
        }
    }

    /// Fetch and filter the user's repositories
    ///
    /// # Errors
    ///
    /// Returns `ReposError::Status` on non-2xx responses and
    /// `ReposError::Http` on transport or decode failures
    pub async fn fetch_repos(&self, username: &str) -> Result<Vec<BlogRepo>, ReposError> {
        let url = format!(
            "{}/users/{}/repos",
            self.config.api_base.trim_end_matches('/'),
            username
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReposError::Status(status.as_u16()));
        }

        let repos: Vec<RawRepo> = response.json().await?;

        Ok(repos
            .into_iter()
            .filter(|r| Self::is_blog_repo(&r.name))
            .map(BlogRepo::from)
            .collect())
    }

    /// Check whether a repository name marks it as blog-related
    fn is_blog_repo(name: &str) -> bool {
        let lowered = name.to_lowercase();
        BLOG_NAME_MARKERS.iter().any(|m| lowered.contains(m))
    }
}
