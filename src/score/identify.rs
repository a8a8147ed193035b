//! Backend and protocol identification from response metadata.

use reqwest::Version;

use crate::config::{HEADER_SERVER, HEADER_X_POWERED_BY};
use crate::fetch::header_value;
use crate::models::FetchedPage;

/// Server software and protocol labels for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerIdentity {
    /// Comma-joined Server / X-Powered-By values, or "Unknown"
    pub backend: String,
    /// HTTP version label, suffixed with " over TLS" for HTTPS URLs
    pub protocol: String,
}

/// Derives backend and protocol labels from a fetched page.
///
/// Backend joins the non-empty `Server` and `X-Powered-By` header values
/// (e.g. "nginx/1.18.0, PHP/8.2"), falling back to "Unknown". The protocol
/// label reflects the response's HTTP version and notes TLS for HTTPS URLs.
pub fn identify(page: &FetchedPage, url: &str) -> ServerIdentity {
    let parts: Vec<&str> = [
        header_value(&page.headers, HEADER_SERVER),
        header_value(&page.headers, HEADER_X_POWERED_BY),
    ]
    .into_iter()
    .filter(|value| !value.is_empty())
    .collect();
    let backend = if parts.is_empty() {
        "Unknown".to_string()
    } else {
        parts.join(", ")
    };

    let https = url
        .get(..8)
        .map(|prefix| prefix.eq_ignore_ascii_case("https://"))
        .unwrap_or(false);
    let label = version_label(page.version);
    let protocol = if https {
        format!("{label} over TLS")
    } else {
        label.to_string()
    };

    ServerIdentity { backend, protocol }
}

/// Maps an HTTP version to its display label, defaulting to "HTTP/1.1" when
/// the version cannot be determined.
fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/1.1",
    }
}
