//! URL Utility Functions
//!
//! Resolution of link targets against the document URL, used when links
//! are rewritten as footnotes.

use url::Url;

/// Parse `base` as an absolute URL, if given and valid.
#[must_use]
pub fn parse_base(base: Option<&str>) -> Option<Url> {
    base.and_then(|b| Url::parse(b.trim()).ok())
}

/// Resolve `href` against `base`.
///
/// Absolute hrefs parse on their own; relative ones need a base.
#[must_use]
pub fn resolve(href: &str, base: Option<&Url>) -> Option<Url> {
    let href = href.trim();
    match Url::parse(href) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => base.and_then(|b| b.join(href).ok()),
        Err(_) => None,
    }
}

/// Host of a URL with its port, when the port is not the scheme default.
#[must_use]
pub fn host_with_port(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Host a link points at, falling back to the document's own host.
#[must_use]
pub fn link_host(href: &str, base: Option<&Url>) -> String {
    resolve(href, base)
        .as_ref()
        .and_then(host_with_port)
        .or_else(|| base.and_then(host_with_port))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_and_relative() {
        let base = Url::parse("https://example.com/blog/post.html").unwrap();

        let abs = resolve("https://other.org/x", Some(&base)).unwrap();
        assert_eq!(abs.as_str(), "https://other.org/x");

        let rel = resolve("../about", Some(&base)).unwrap();
        assert_eq!(rel.as_str(), "https://example.com/about");

        assert!(resolve("/about", None).is_none());
    }

    #[test]
    fn test_host_with_port() {
        let url = Url::parse("http://localhost:8080/a").unwrap();
        assert_eq!(host_with_port(&url).as_deref(), Some("localhost:8080"));

        let url = Url::parse("https://example.com:443/a").unwrap();
        assert_eq!(host_with_port(&url).as_deref(), Some("example.com"));
    }

    #[test]
    fn test_link_host_fallbacks() {
        let base = parse_base(Some("https://news.example.com/story"));

        assert_eq!(link_host("https://cdn.example.org/img", base.as_ref()), "cdn.example.org");
        assert_eq!(link_host("/local", base.as_ref()), "news.example.com");
        assert_eq!(link_host("mailto:someone@example.com", base.as_ref()), "news.example.com");
        assert_eq!(link_host("/local", None), "");
    }
}
