//! URL helpers for user-supplied links.
//!
//! Profile fields such as a GitHub blog are free text: `example.com`,
//! `https://example.com/`, or occasionally something that must never become
//! an `href` (`javascript:...`).

/// Errors that can occur during URL normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    /// URL is empty
    Empty,
    /// URL uses a scheme other than http/https
    InvalidProtocol,
    /// URL has no host/domain
    NoHost,
}

/// Turn a free-text link into an absolute http(s) URL.
///
/// - Links without a scheme get `https://` prepended
/// - Any other explicit scheme is rejected
/// - The result must have a host
pub fn normalize_external_url(url: &str) -> Result<String, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url_lower = url.to_lowercase();
    let absolute = if url_lower.starts_with("http://") || url_lower.starts_with("https://") {
        url.to_string()
    } else if has_scheme(url) {
        return Err(UrlValidationError::InvalidProtocol);
    } else {
        format!("https://{}", url)
    };

    if extract_host(&absolute).is_none() {
        return Err(UrlValidationError::NoHost);
    }

    Ok(absolute)
}

/// Whether the string starts with `scheme:` (RFC 3986 scheme characters).
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        // "localhost:8080" style host:port is not a scheme
        && !url[scheme.len() + 1..].starts_with(|c: char| c.is_ascii_digit())
}

/// Extract host from an absolute http(s) URL
fn extract_host(url: &str) -> Option<String> {
    let lower = url.to_lowercase();
    let without_protocol = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))?;

    // Get the host part (before first / ? # or end of string)
    let host_part = without_protocol.split(['/', '?', '#']).next()?;

    // Remove credentials and port if present
    let host_part = host_part.rsplit('@').next()?;
    let host = host_part.split(':').next()?;

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}
