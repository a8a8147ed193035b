//! Configuration constants.
//!
//! This module defines the default values used throughout the application:
//! timeouts, scoring thresholds, and sampling limits. All of them can be
//! overridden per run through [`crate::config::AnalyzerConfig`].

use std::time::Duration;

/// Per-attempt timeout for page fetches (connect + response read).
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for individual link-probe HEAD requests.
///
/// Deliberately much shorter than the page fetch timeout: the probe is a
/// sampling reachability check, and one hanging link must not stall the
/// whole analysis.
pub const LINK_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Maximum number of unique links sampled by the link probe.
pub const MAX_PROBE_LINKS: usize = 10;

/// Maximum redirect hops followed by the link-probe client.
pub const MAX_PROBE_REDIRECT_HOPS: usize = 10;

/// Maximum concurrent URL pipelines in a batch.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Maximum length of a transport failure reason surfaced to callers.
/// Longer messages are truncated.
pub const MAX_FAILURE_REASON_LENGTH: usize = 100;

/// Default User-Agent string for HTTP requests.
///
/// A current Chrome string; many sites serve degraded or blocked responses
/// to unknown agents. Overridable via `AnalyzerConfig::user_agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Latency thresholds for the performance scorer.
///
/// Each entry is `(max_elapsed_ms, score)`; the first threshold the measured
/// latency fits under wins. Latencies beyond the last threshold score 0.
pub const LATENCY_THRESHOLDS: &[(u64, u32)] = &[(200, 100), (500, 80), (1000, 60), (2000, 40)];

/// Content-size thresholds for the performance scorer.
///
/// Each entry is `(max_bytes, score)`; the first threshold the Content-Length
/// fits under wins. Larger or unreported sizes score 0.
pub const CONTENT_SIZE_THRESHOLDS: &[(u64, u32)] = &[(300_000, 100), (1_000_000, 50)];
