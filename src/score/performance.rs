//! Performance scoring from latency and response headers.

use reqwest::header;

use crate::config::AnalyzerConfig;
use crate::fetch::header_value;
use crate::models::{FetchedPage, PerformanceBreakdown, ScoringResult};
use crate::probe::LinkProbeReport;
use crate::score::clamp_score;

/// Scores page performance from four independent signals.
///
/// Latency, compression, caching, and content size each yield a sub-score;
/// the composite is their unweighted integer mean, clamped to `[0, 100]`.
/// The link-probe counts are surfaced in the breakdown for diagnostics but
/// deliberately do not enter the composite.
pub fn score_performance(
    page: &FetchedPage,
    links: LinkProbeReport,
    config: &AnalyzerConfig,
) -> ScoringResult<PerformanceBreakdown> {
    let latency_score = latency_score(page.elapsed_ms, &config.latency_thresholds);

    let encoding = header_value(&page.headers, header::CONTENT_ENCODING.as_str()).to_ascii_lowercase();
    let (compression, compression_score) = if encoding.contains("br") {
        ("br".to_string(), 100)
    } else if encoding.contains("gzip") {
        ("gzip".to_string(), 50)
    } else {
        ("none".to_string(), 0)
    };

    let cache_control = header_value(&page.headers, header::CACHE_CONTROL.as_str()).to_string();
    let caching_score = if cache_control.contains("public") || cache_control.contains("immutable") {
        100
    } else if cache_control.contains("max-age") {
        50
    } else {
        0
    };

    let content_length = header_value(&page.headers, header::CONTENT_LENGTH.as_str())
        .parse::<u64>()
        .ok();
    let size_score = content_length
        .map(|length| size_score(length, &config.content_size_thresholds))
        .unwrap_or(0);

    let composite = (latency_score + compression_score + caching_score + size_score) / 4;

    ScoringResult {
        score: clamp_score(composite as i64),
        breakdown: PerformanceBreakdown {
            latency_ms: page.elapsed_ms,
            latency_score,
            compression,
            compression_score,
            cache_control,
            caching_score,
            content_length_kb: content_length.map(|length| length / 1024).unwrap_or(0),
            size_score,
            broken_links: links.broken,
            total_links: links.total,
        },
    }
}

/// Graduated latency sub-score: the first threshold the latency fits under
/// wins; beyond the last threshold the score is 0.
fn latency_score(elapsed_ms: u64, thresholds: &[(u64, u32)]) -> u32 {
    thresholds
        .iter()
        .find(|(max_ms, _)| elapsed_ms <= *max_ms)
        .map(|(_, score)| *score)
        .unwrap_or(0)
}

/// Content-size sub-score; unreported sizes are handled by the caller.
fn size_score(length: u64, thresholds: &[(u64, u32)]) -> u32 {
    thresholds
        .iter()
        .find(|(max_bytes, _)| length <= *max_bytes)
        .map(|(_, score)| *score)
        .unwrap_or(0)
}
