//! Page fetching with timing and HTTPS→HTTP fallback.
//!
//! The fetcher issues a GET with a fixed browser-like header profile, measures
//! wall-clock latency to the response headers, and reads the body best-effort.
//! TLS certificate validation is intentionally disabled: the goal is maximal
//! reachability across heterogeneous third-party sites, not transport trust
//! verification. Many low-maintenance sites have broken or self-signed TLS, so
//! a transport-level failure on an `https://` URL triggers exactly one retry
//! over plain `http://` - never more.

use std::io::Read;
use std::time::Instant;

use log::{debug, info, warn};
use reqwest::header::{self, HeaderMap};

use crate::config::{AnalyzerConfig, MAX_FAILURE_REASON_LENGTH};
use crate::error::InitializationError;
use crate::models::{FetchOutcome, FetchedPage};

#[cfg(test)]
mod tests;

/// Fetches pages and classifies the outcome per URL.
///
/// Holds a pooled [`reqwest::Client`]; dropping a [`FetchOutcome`] releases
/// any connection it held back to the pool.
pub struct PageFetcher {
    client: reqwest::Client,
}

/// Outcome of a single fetch attempt, before fallback is considered.
///
/// `Completed` covers both in-range and out-of-range statuses; `Transport`
/// carries the error that prevented a response from arriving at all.
enum Attempt {
    Completed(FetchOutcome),
    Transport(reqwest::Error),
}

impl PageFetcher {
    /// Creates a fetcher with the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AnalyzerConfig) -> Result<Self, InitializationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `url`, measuring latency and applying the fallback policy.
    ///
    /// A status in `[200, 400)` yields `Success` with the body read
    /// best-effort; any other status yields `Failure("HTTP Status: <code>")`
    /// without retry. A transport-level error on an `https://` URL is retried
    /// exactly once against the `http://` equivalent; if that attempt fails
    /// for any reason the outcome is `Failure("Both HTTPS and HTTP failed")`.
    /// A transport error on a non-HTTPS URL is surfaced directly, truncated.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        match self.attempt(url).await {
            Attempt::Completed(outcome) => outcome,
            Attempt::Transport(e) => {
                warn!("✗ {url} | {e}");
                let Some(http_url) = downgrade_to_http(url) else {
                    return FetchOutcome::Failure {
                        reason: truncate_reason(&e.to_string()),
                    };
                };
                match self.attempt(&http_url).await {
                    Attempt::Completed(FetchOutcome::Success(page)) => {
                        FetchOutcome::Success(page)
                    }
                    Attempt::Completed(FetchOutcome::Failure { .. }) => FetchOutcome::Failure {
                        reason: "Both HTTPS and HTTP failed".to_string(),
                    },
                    Attempt::Transport(e2) => {
                        warn!("✗ {http_url} (HTTP fallback) | {e2}");
                        FetchOutcome::Failure {
                            reason: "Both HTTPS and HTTP failed".to_string(),
                        }
                    }
                }
            }
        }
    }

    /// Issues one GET and classifies the response, without fallback.
    async fn attempt(&self, url: &str) -> Attempt {
        let start = Instant::now();
        let response = match apply_request_headers(self.client.get(url)).send().await {
            Ok(response) => response,
            Err(e) => return Attempt::Transport(e),
        };
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let status = response.status().as_u16();
        if !(200..400).contains(&status) {
            warn!("✗ {url} | Status: {status}");
            // Dropping the response releases the connection.
            return Attempt::Completed(FetchOutcome::Failure {
                reason: format!("HTTP Status: {status}"),
            });
        }

        let version = response.version();
        let headers = response.headers().clone();
        let body = read_body(response).await;
        info!("✓ {url} | {status} | {elapsed_ms}ms | {} bytes", body.len());

        Attempt::Completed(FetchOutcome::Success(FetchedPage {
            status,
            headers,
            body,
            elapsed_ms,
            version,
        }))
    }
}

/// Applies the fixed request header profile.
///
/// `Accept-Encoding` is set manually so the response keeps its
/// `Content-Encoding` and `Content-Length` headers for scoring; the body is
/// decoded by [`read_body`] instead of the client.
fn apply_request_headers(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder
        .header(
            header::ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .header(header::ACCEPT_ENCODING, "gzip, deflate")
        .header(header::CONNECTION, "keep-alive")
}

/// Rewrites an `https://` URL to its `http://` equivalent.
///
/// Returns `None` when the URL is not HTTPS, in which case no fallback is
/// attempted. The scheme check is case-insensitive, matching the fallback
/// trigger rather than the normalizer's stricter prefixing rule.
fn downgrade_to_http(url: &str) -> Option<String> {
    match url.get(..8) {
        Some(prefix) if prefix.eq_ignore_ascii_case("https://") => {
            Some(format!("http://{}", &url[8..]))
        }
        _ => None,
    }
}

/// Truncates a transport error message for the failure reason.
fn truncate_reason(message: &str) -> String {
    message.chars().take(MAX_FAILURE_REASON_LENGTH).collect()
}

/// Reads the response body as text, best-effort.
///
/// A body-read failure yields an empty string rather than a failed outcome:
/// the timing, headers, and status are still valid signals. Compressed bodies
/// are decoded here because the client's automatic decompression is bypassed
/// to preserve the Content-Encoding header.
async fn read_body(response: reqwest::Response) -> String {
    let encoding = response
        .headers()
        .get(header::CONTENT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();
    match response.bytes().await {
        Ok(raw) => decode_body(&raw, &encoding),
        Err(e) => {
            debug!("Could not read response body: {e}");
            String::new()
        }
    }
}

/// Decodes a raw body according to its Content-Encoding.
///
/// Falls back to lossy UTF-8 of the raw bytes if decoding fails; downstream
/// markup parsing degrades gracefully on garbage input.
fn decode_body(raw: &[u8], encoding: &str) -> String {
    if encoding.contains("gzip") {
        let mut decoded = Vec::new();
        if flate2::read::GzDecoder::new(raw)
            .read_to_end(&mut decoded)
            .is_ok()
        {
            return String::from_utf8_lossy(&decoded).into_owned();
        }
        debug!("Failed to decode gzip body; using raw bytes");
    } else if encoding.contains("deflate") {
        let mut decoded = Vec::new();
        if flate2::read::ZlibDecoder::new(raw)
            .read_to_end(&mut decoded)
            .is_ok()
        {
            return String::from_utf8_lossy(&decoded).into_owned();
        }
        debug!("Failed to decode deflate body; using raw bytes");
    }
    String::from_utf8_lossy(raw).into_owned()
}

/// Case-insensitive lookup of a header value as a string.
///
/// Returns an empty string for absent or non-UTF-8 values. `HeaderMap` keys
/// match case-insensitively, so callers can pass the canonical names from
/// [`crate::config`].
pub(crate) fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
