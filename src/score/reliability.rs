//! Reliability scoring from response shape.
//!
//! A diagnostic category reported alongside the three averaged ones: it never
//! enters the overall score. Unlike the other scorers this one is additive, a
//! baseline plus bonuses for signs of a well-run server.

use reqwest::header;

use crate::fetch::header_value;
use crate::models::{FetchedPage, ReliabilityBreakdown, ScoringResult};
use crate::score::clamp_score;

/// Header-count tiers: more response headers suggest a more complete setup.
const HEADER_COUNT_TIERS: &[(usize, i64)] = &[(20, 10), (10, 5)];

/// Scores server reliability from the response status, header count,
/// compression, and caching signals. Composite clamped to `[0, 100]`.
pub fn score_reliability(page: &FetchedPage) -> ScoringResult<ReliabilityBreakdown> {
    // Baseline for any response that arrived at all.
    let mut score: i64 = 50;

    match page.status {
        200..=299 => score += 30,
        300..=399 => score += 15,
        _ => score = 20,
    }

    let header_count = page.headers.len();
    score += HEADER_COUNT_TIERS
        .iter()
        .find(|(min, _)| header_count > *min)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0);

    let encoding = header_value(&page.headers, header::CONTENT_ENCODING.as_str()).to_ascii_lowercase();
    let compression_enabled = encoding.contains("gzip") || encoding.contains("br");
    if compression_enabled {
        score += 5;
    }

    let caching_enabled = page.headers.contains_key(header::CACHE_CONTROL)
        || page.headers.contains_key(header::ETAG);
    if caching_enabled {
        score += 10;
    }

    ScoringResult {
        score: clamp_score(score),
        breakdown: ReliabilityBreakdown {
            status_code: page.status,
            header_count: header_count as u32,
            compression_enabled,
            caching_enabled,
        },
    }
}
