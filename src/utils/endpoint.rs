//! Building endpoint URLs from the configured service base URL.

use url::Url;

/// Errors that can occur while building an endpoint URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("Base URL cannot carry a path: {0}")]
    CannotBeABase(String),

    #[error("Path segment `{0}` is not allowed")]
    ReservedSegment(String),
}

/// Parses and checks a service base URL.
///
/// Only HTTP and HTTPS bases with a host are accepted.
pub fn parse_base_url(input: &str) -> Result<Url, String> {
    let url = Url::parse(input).map_err(|e| format!("Invalid URL format: {e}"))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("Only HTTP and HTTPS are allowed, got '{other}'")),
    }

    if url.host_str().is_none() {
        return Err("URL has no host".to_string());
    }

    Ok(url)
}

/// Appends path segments to a base URL.
///
/// Any path on the base is kept as a prefix, so `http://host/app/` plus
/// `["shorten"]` gives `http://host/app/shorten`. Every segment is
/// percent-encoded, which keeps `/`, `?`, `#` and `%` inside the segment
/// instead of changing the request target. `.` and `..` are refused.
///
/// # Examples
///
/// ```ignore
/// let base = Url::parse("http://localhost:8000").unwrap();
/// assert_eq!(
///     endpoint(&base, &["stats", "a/b"]).unwrap().as_str(),
///     "http://localhost:8000/stats/a%2Fb"
/// );
/// ```
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, EndpointError> {
    if let Some(bad) = segments.iter().find(|s| matches!(**s, "." | "..")) {
        return Err(EndpointError::ReservedSegment(bad.to_string()));
    }

    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    url.path_segments_mut()
        .map_err(|_| EndpointError::CannotBeABase(base.to_string()))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let url = endpoint(&base("http://localhost:8000"), &["shorten"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/shorten");
    }

    #[test]
    fn test_endpoint_on_trailing_slash() {
        let url = endpoint(&base("http://localhost:8000/"), &["stats", "abc"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/stats/abc");
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let url = endpoint(&base("https://example.com/app/"), &["shorten"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/app/shorten");

        let url = endpoint(&base("https://example.com/app"), &["stats", "x"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/app/stats/x");
    }

    #[test]
    fn test_endpoint_drops_query_and_fragment() {
        let url = endpoint(&base("http://localhost:8000/?a=1#top"), &["shorten"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/shorten");
    }

    #[test]
    fn test_endpoint_encodes_reserved_characters() {
        let b = base("http://localhost:8000");

        assert_eq!(
            endpoint(&b, &["stats", "a/b"]).unwrap().as_str(),
            "http://localhost:8000/stats/a%2Fb"
        );
        assert_eq!(
            endpoint(&b, &["stats", "a?b#c"]).unwrap().as_str(),
            "http://localhost:8000/stats/a%3Fb%23c"
        );
        assert_eq!(
            endpoint(&b, &["stats", "a b"]).unwrap().as_str(),
            "http://localhost:8000/stats/a%20b"
        );
    }

    #[test]
    fn test_endpoint_rejects_dot_segments() {
        let b = base("http://localhost:8000");

        assert_eq!(
            endpoint(&b, &["stats", ".."]),
            Err(EndpointError::ReservedSegment("..".to_string()))
        );
        assert!(endpoint(&b, &["stats", "."]).is_err());
    }

    #[test]
    fn test_endpoint_rejects_cannot_be_a_base() {
        let result = endpoint(&base("mailto:someone@example.com"), &["shorten"]);
        assert!(matches!(result, Err(EndpointError::CannotBeABase(_))));
    }

    #[test]
    fn test_parse_base_url() {
        assert!(parse_base_url("http://localhost:8000").is_ok());
        assert!(parse_base_url("https://s.example.com/app/").is_ok());
        assert!(parse_base_url("ftp://example.com").is_err());
        assert!(parse_base_url("localhost:8000").is_err());
        assert!(parse_base_url("not a url").is_err());
    }
}
