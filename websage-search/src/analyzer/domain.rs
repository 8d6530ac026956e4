//! Source-domain extraction for confidence scoring.

use url::Url;

/// Extract the normalised host of a result URL.
///
/// The host is lowercased by URL parsing and a single leading `www.` is
/// removed. Ports, credentials, paths and query strings are ignored.
/// Returns `None` for empty, relative or otherwise unparseable URLs and for
/// URLs without a host.
///
/// # Examples
///
/// ```
/// use websage_search::analyzer::domain::source_domain;
///
/// assert_eq!(source_domain("https://www.Example.com/a?b=1").as_deref(), Some("example.com"));
/// assert_eq!(source_domain("example.com/no-scheme"), None);
/// ```
pub fn source_domain(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = Url::parse(raw.trim()).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        return None;
    }
    Some(host.to_owned())
}
