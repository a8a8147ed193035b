//! URL normalization.

/// Normalizes a raw user-supplied URL string into a fetchable absolute URL.
///
/// Trims surrounding whitespace and returns an empty string for blank input.
/// If the trimmed string lacks an `http://` or `https://` prefix (checked
/// case-sensitively), `https://` is prepended. Hostname syntax is not
/// validated here; malformed results surface downstream as fetch failures.
///
/// # Examples
///
/// ```
/// use site_audit::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// assert_eq!(normalize_url("   "), "");
/// ```
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        format!("https://{trimmed}")
    } else {
        trimmed.to_string()
    }
}
