//! Which URLs a page WebView may navigate to.

/// Allowed URL prefixes for page navigation. Everything else is blocked.
pub const ALLOWED_NAV_PREFIXES: &[&str] = &["https://", "http://", "about:blank"];

/// Check whether a URL is allowed by the navigation allowlist.
/// Matching ignores ASCII case and leading whitespace.
pub fn is_navigation_allowed(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}
