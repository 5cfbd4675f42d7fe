use reqwest::Url;

/// Check that a candidate is an absolute URL with a scheme and a host.
///
/// The authority (text between `://` and the next `/`, `?` or `#`) must be
/// non-empty in the candidate as written. URL parsing alone is not enough
/// here: special schemes tolerate extra slashes, so `http:///nohost` would
/// otherwise parse with `nohost` promoted to the host.
///
/// Parse failures are reported as `false`, never as an error.
///
/// # Examples
/// ```
/// use linktag::validation::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/contact"));
/// assert!(!is_valid_url("https://"));
/// assert!(!is_valid_url("http:///nohost"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    let Some((scheme, rest)) = candidate.split_once("://") else {
        return false;
    };
    if scheme.is_empty() {
        return false;
    }

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if authority.is_empty() {
        return false;
    }

    match Url::parse(candidate) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}
