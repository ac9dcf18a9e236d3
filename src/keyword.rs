//! Keyword normalization for blog URLs
//!
//! Raw blog URLs are reduced to a canonical domain token that keys both
//! the live trend source lookup and the fallback data synthesis. The
//! operation is pure string surgery and cannot fail for any input.

/// Default token substituted when an empty URL list is normalized
pub const DEFAULT_KEYWORD: &str = "example";

/// Derive a canonical keyword token from a raw URL
///
/// Strips a leading `https://` or `http://` scheme, keeps the substring
/// before the first `/`, then strips a leading `www.` prefix. Inputs
/// without a scheme pass through apart from the `www.` strip.
pub fn normalize_url(raw: &str) -> String {
    let without_scheme = raw
        .strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
        .unwrap_or(raw);

    let host = without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme);

    host.strip_prefix("www.").unwrap_or(host).to_string()
}

/// Normalize a list of URLs into keyword tokens
///
/// An empty input list yields exactly `["example"]` so downstream lookups
/// always have at least one key to work with.
pub fn normalize_urls(urls: &[String]) -> Vec<String> {
    if urls.is_empty() {
        return vec![DEFAULT_KEYWORD.to_string()];
    }

    urls.iter().map(|u| normalize_url(u)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scheme_and_path() {
        assert_eq!(normalize_url("https://blog.naver.com/somepost"), "blog.naver.com");
        assert_eq!(normalize_url("http://velog.io/@writer/post"), "velog.io");
    }

    #[test]
    fn test_strips_www_prefix() {
        assert_eq!(normalize_url("https://www.tistory.com"), "tistory.com");
        assert_eq!(normalize_url("www.medium.com"), "medium.com");
    }

    #[test]
    fn test_no_scheme_passes_through() {
        assert_eq!(normalize_url("blog.daum.net/path"), "blog.daum.net");
        assert_eq!(normalize_url("github.io"), "github.io");
    }

    #[test]
    fn test_never_fails_on_odd_input() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("https://"), "");
        assert_eq!(normalize_url("///"), "");
    }

    #[test]
    fn test_empty_list_gets_default_keyword() {
        let keywords = normalize_urls(&[]);
        assert_eq!(keywords, vec!["example".to_string()]);
    }

    #[test]
    fn test_list_normalization() {
        let urls = vec![
            "https://www.tistory.com/blog".to_string(),
            "blog.naver.com".to_string(),
        ];
        assert_eq!(normalize_urls(&urls), vec!["tistory.com", "blog.naver.com"]);
    }
}
