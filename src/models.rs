//! Data model: fetch outcomes, score breakdowns, and per-URL results.
//!
//! All breakdown types are immutable value types with zero/false defaults so
//! that a failed fetch can still produce a fully populated result. Composite
//! and sub-scores are always integers clamped to `[0, 100]`.

use reqwest::header::HeaderMap;
use reqwest::Version;
use serde::Serialize;

/// A fetched page: response metadata plus the decoded body text.
///
/// Headers are kept as a [`HeaderMap`], which preserves insertion order,
/// supports repeated header names, and matches case-insensitively on lookup.
#[derive(Debug)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as text (empty if the body could not be read)
    pub body: String,
    /// Wall-clock milliseconds from request start to response headers received
    pub elapsed_ms: u64,
    /// HTTP protocol version of the response
    pub version: Version,
}

/// Outcome of fetching a single URL.
///
/// Exactly one variant is populated; callers cannot read success fields of a
/// failed fetch. The pooled connection behind a `Success` is released when the
/// value is dropped, on every exit path.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The page was retrieved with a status in `[200, 400)`.
    Success(FetchedPage),
    /// The page could not be retrieved; `reason` is human-readable.
    Failure {
        /// Why the fetch failed (HTTP status or transport error)
        reason: String,
    },
}

/// A category score paired with its breakdown.
///
/// Every scorer returns one of these: the composite score in `[0, 100]` and
/// the named sub-signals it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult<T> {
    /// Composite score in `[0, 100]`
    pub score: u32,
    /// The sub-signals behind the composite
    pub breakdown: T,
}

/// Performance sub-signals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceBreakdown {
    /// Measured response latency in milliseconds
    pub latency_ms: u64,
    /// Latency sub-score
    pub latency_score: u32,
    /// Compression label from Content-Encoding ("br", "gzip", or "none")
    pub compression: String,
    /// Compression sub-score
    pub compression_score: u32,
    /// Raw Cache-Control header value
    pub cache_control: String,
    /// Caching sub-score
    pub caching_score: u32,
    /// Reported content length in kilobytes (0 if unreported)
    pub content_length_kb: u64,
    /// Content-size sub-score
    pub size_score: u32,
    /// Broken links found by the sampling probe (diagnostic only)
    pub broken_links: u32,
    /// Total links sampled by the probe (diagnostic only)
    pub total_links: u32,
}

impl Default for PerformanceBreakdown {
    fn default() -> Self {
        Self {
            latency_ms: 0,
            latency_score: 0,
            compression: "none".to_string(),
            compression_score: 0,
            cache_control: String::new(),
            caching_score: 0,
            content_length_kb: 0,
            size_score: 0,
            broken_links: 0,
            total_links: 0,
        }
    }
}

/// Security sub-signals. Each boolean contributes 0 or 100 to the composite,
/// except `referrer_policy`, which is recorded as metadata only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityBreakdown {
    /// URL scheme is https
    pub https: bool,
    /// Strict-Transport-Security header present
    pub hsts: bool,
    /// Content-Security-Policy header present
    pub csp: bool,
    /// X-Content-Type-Options equals "nosniff"
    pub content_type_options: bool,
    /// X-Frame-Options present, or CSP contains "frame-ancestors"
    pub frame_options: bool,
    /// Referrer-Policy header present (diagnostic only, not scored)
    pub referrer_policy: bool,
}

/// SEO sub-signals, each already expressed as a `[0, 100]` sub-score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoBreakdown {
    /// Title presence/length sub-score
    pub title_score: u32,
    /// Meta description presence/length sub-score
    pub meta_description_score: u32,
    /// Heading structure (h1/h2) sub-score
    pub heading_score: u32,
    /// Mobile viewport meta tag sub-score
    pub viewport_score: u32,
    /// Rounded percentage of images with a non-empty alt attribute
    pub image_alt_score: u32,
}

/// Reliability sub-signals (diagnostic category, not part of `overall`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliabilityBreakdown {
    /// HTTP status code of the response
    pub status_code: u16,
    /// Number of response headers
    pub header_count: u32,
    /// Response was served compressed (gzip or brotli)
    pub compression_enabled: bool,
    /// Cache-Control or ETag header present
    pub caching_enabled: bool,
}

/// Complete analysis result for a single URL.
///
/// This is the unit returned to the caller, one per input URL in input order.
/// `overall` is always the rounded mean of the performance, security, and SEO
/// composites; reliability is reported alongside but not averaged in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The normalized URL that was analyzed
    pub url: String,
    /// Performance composite score
    pub performance: u32,
    /// Security composite score
    pub security: u32,
    /// SEO composite score
    pub seo: u32,
    /// Reliability composite score (diagnostic)
    pub reliability: u32,
    /// Rounded mean of performance, security, and SEO
    pub overall: u32,
    /// Server software label from Server / X-Powered-By, or "Unknown"
    pub backend: String,
    /// HTTP version label, with " over TLS" suffix for HTTPS
    pub protocol: String,
    /// Human-readable response time (e.g. "234 ms"), or "Invalid URL"
    pub response_time: String,
    /// Performance sub-signals
    pub performance_breakdown: PerformanceBreakdown,
    /// Security sub-signals
    pub security_breakdown: SecurityBreakdown,
    /// SEO sub-signals
    pub seo_breakdown: SeoBreakdown,
    /// Reliability sub-signals
    pub reliability_breakdown: ReliabilityBreakdown,
}

impl AnalysisResult {
    /// Builds the all-zero result emitted when a URL cannot be fetched.
    ///
    /// Every score is 0 and every breakdown holds its zero/false defaults, so
    /// the batch contract (one fully populated result per input URL) holds
    /// even on failure.
    pub fn failure(url: String) -> Self {
        Self {
            url,
            performance: 0,
            security: 0,
            seo: 0,
            reliability: 0,
            overall: 0,
            backend: "N/A".to_string(),
            protocol: "N/A".to_string(),
            response_time: "Invalid URL".to_string(),
            performance_breakdown: PerformanceBreakdown::default(),
            security_breakdown: SecurityBreakdown::default(),
            seo_breakdown: SeoBreakdown::default(),
            reliability_breakdown: ReliabilityBreakdown::default(),
        }
    }
}
