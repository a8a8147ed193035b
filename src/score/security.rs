//! Security posture scoring from the URL scheme and response headers.

use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_REFERRER_POLICY, HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS,
};
use crate::fetch::header_value;
use crate::models::{FetchedPage, ScoringResult, SecurityBreakdown};
use crate::score::clamp_score;

/// Scores security posture from five binary signals.
///
/// Each signal contributes 0 or 100; the composite is `floor(sum / 5)`.
/// `Referrer-Policy` is recorded in the breakdown as metadata but excluded
/// from the composite, mirroring the performance scorer's diagnostic-only
/// broken-link fields.
pub fn score_security(url: &str, page: &FetchedPage) -> ScoringResult<SecurityBreakdown> {
    let https = url_is_https(url);
    let hsts = page.headers.contains_key(HEADER_STRICT_TRANSPORT_SECURITY);
    let csp_value = header_value(&page.headers, HEADER_CONTENT_SECURITY_POLICY);
    let csp = page.headers.contains_key(HEADER_CONTENT_SECURITY_POLICY);
    let content_type_options = header_value(&page.headers, HEADER_X_CONTENT_TYPE_OPTIONS)
        .trim()
        .eq_ignore_ascii_case("nosniff");
    let frame_options =
        page.headers.contains_key(HEADER_X_FRAME_OPTIONS) || csp_value.contains("frame-ancestors");
    let referrer_policy = page.headers.contains_key(HEADER_REFERRER_POLICY);

    let signals = [https, hsts, csp, content_type_options, frame_options];
    let sum: i64 = signals.iter().map(|on| if *on { 100i64 } else { 0 }).sum();

    ScoringResult {
        score: clamp_score(sum / 5),
        breakdown: SecurityBreakdown {
            https,
            hsts,
            csp,
            content_type_options,
            frame_options,
            referrer_policy,
        },
    }
}

/// Case-insensitive check for an `https://` scheme prefix.
fn url_is_https(url: &str) -> bool {
    url.get(..8)
        .map(|prefix| prefix.eq_ignore_ascii_case("https://"))
        .unwrap_or(false)
}
