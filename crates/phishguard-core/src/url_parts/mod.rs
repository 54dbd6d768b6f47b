//! URL decomposition for the feature pipeline.
//!
//! Parsing is total: a string that is not an absolute URL degrades to empty
//! components (with the raw input preserved) instead of erroring, so every
//! downstream feature computation can assume non-null strings.

/// Components of a request URL, derived once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComponents {
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub query: String,
    /// The raw input string, exactly as received.
    pub raw: String,
}

impl UrlComponents {
    /// The domain label: the label just before the TLD, or the whole host
    /// when it has a single label. This is the brand-carrying token
    /// (`example` for both `example.com` and `sub.example.com`).
    pub fn domain_label(&self) -> &str {
        let mut last = "";
        let mut second_last = "";
        for label in self.host.split('.') {
            second_last = last;
            last = label;
        }
        if second_last.is_empty() { last } else { second_last }
    }
}

/// Decomposes `raw` into scheme/host/path/query. Never fails: anything the
/// `url` crate rejects (relative references, garbage) yields empty components.
pub fn parse(raw: &str) -> UrlComponents {
    match url::Url::parse(raw) {
        Ok(parsed) => UrlComponents {
            scheme: parsed.scheme().to_string(),
            host: parsed.host_str().unwrap_or("").to_string(),
            path: parsed.path().to_string(),
            query: parsed.query().unwrap_or("").to_string(),
            raw: raw.to_string(),
        },
        Err(_) => UrlComponents {
            scheme: String::new(),
            host: String::new(),
            path: String::new(),
            query: String::new(),
            raw: raw.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url() {
        let c = parse("https://sub.example.com/login?next=/home");
        assert_eq!(c.scheme, "https");
        assert_eq!(c.host, "sub.example.com");
        assert_eq!(c.path, "/login");
        assert_eq!(c.query, "next=/home");
        assert_eq!(c.raw, "https://sub.example.com/login?next=/home");
    }

    #[test]
    fn host_is_lowercased_by_parser() {
        let c = parse("http://EXAMPLE.Com/Path");
        assert_eq!(c.host, "example.com");
        assert_eq!(c.path, "/Path");
    }

    #[test]
    fn ip_host() {
        let c = parse("http://192.168.0.1/admin");
        assert_eq!(c.host, "192.168.0.1");
    }

    #[test]
    fn missing_scheme_degrades_to_empty_components() {
        let c = parse("example.com/login");
        assert_eq!(c.scheme, "");
        assert_eq!(c.host, "");
        assert_eq!(c.path, "");
        assert_eq!(c.query, "");
        assert_eq!(c.raw, "example.com/login");
    }

    #[test]
    fn garbage_degrades_to_empty_components() {
        let c = parse(":::not a url:::");
        assert_eq!(c.host, "");
        assert_eq!(c.raw, ":::not a url:::");
    }

    #[test]
    fn domain_label() {
        assert_eq!(parse("http://sub.example.com/").domain_label(), "example");
        assert_eq!(parse("http://example.com/").domain_label(), "example");
        assert_eq!(parse("http://localhost/").domain_label(), "localhost");
        assert_eq!(parse("nope").domain_label(), "");
    }

    #[test]
    fn deep_subdomain_domain_label() {
        assert_eq!(parse("http://a.b.example.com/").domain_label(), "example");
    }
}
