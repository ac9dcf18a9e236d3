//! Integration tests for GithubClient using wiremock

use pado::config::ReposConfig;
use pado::repos::GithubClient;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repo_json(name: &str, stars: u64) -> serde_json::Value {
    json!({
        "name": name,
        "description": "test repository",
        "stargazers_count": stars,
        "forks_count": 2,
        "html_url": format!("https://github.com/tester/{name}"),
        "created_at": "2024-01-15T09:00:00Z",
        "updated_at": "2025-06-01T12:30:00Z"
    })
}

fn client_for(server: &MockServer, token: Option<&str>) -> GithubClient {
    let config = ReposConfig {
        api_base: server.uri(),
        token: token.map(|t| t.to_string()),
        ..Default::default()
    };
    GithubClient::new(config).unwrap()
}

/// Test only blog-related repositories are returned
#[tokio::test]
async fn test_blog_repos_filtered() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/tester/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_json("my-blog", 41),
            repo_json("dotfiles", 7),
            repo_json("personal-website", 12),
            repo_json("rust-parser", 99),
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let repos = client.blog_repos("tester").await;

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["my-blog", "personal-website"]);
    assert_eq!(repos[0].stars, 41);
    assert_eq!(repos[0].url, "https://github.com/tester/my-blog");
}

/// Test the access token is sent as an Authorization header
#[tokio::test]
async fn test_token_sent_as_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/tester/repos"))
        .and(header("authorization", "token ghp_testtoken"))
        .and(header("accept", "application/vnd.github.v3+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Some("ghp_testtoken"));
    let repos = client.blog_repos("tester").await;

    assert!(repos.is_empty());
}

/// Test API failures degrade to an empty list
#[tokio::test]
async fn test_failure_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/tester/repos"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let repos = client.blog_repos("tester").await;

    assert!(repos.is_empty());
}

/// Test fetch_repos surfaces the status for direct callers
#[tokio::test]
async fn test_fetch_repos_reports_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/tester/repos"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let result = client.fetch_repos("tester").await;

    assert!(matches!(
        result,
        Err(pado::repos::ReposError::Status(404))
    ));
}
