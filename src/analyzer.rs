//! Per-URL analysis pipeline and batch orchestration.

use futures::stream::{self, StreamExt};
use log::{info, warn};

use crate::config::AnalyzerConfig;
use crate::error::InitializationError;
use crate::fetch::PageFetcher;
use crate::models::{AnalysisResult, FetchOutcome};
use crate::normalize::normalize_url;
use crate::probe::LinkProber;
use crate::score::{identify, score_performance, score_reliability, score_security, score_seo};

/// Runs the full normalize → fetch → score pipeline for batches of URLs.
///
/// Each URL's analysis is independent and side-effect-free apart from the
/// network calls themselves; no state is shared across URLs beyond the pooled
/// HTTP clients.
pub struct Analyzer {
    fetcher: PageFetcher,
    prober: LinkProber,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer from an immutable configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be built.
    pub fn new(config: AnalyzerConfig) -> Result<Self, InitializationError> {
        Ok(Self {
            fetcher: PageFetcher::new(&config)?,
            prober: LinkProber::new(&config)?,
            config,
        })
    }

    /// Analyzes a single raw URL, always producing a result.
    ///
    /// A failed fetch folds into the all-zero result rather than propagating:
    /// the pipeline is a total function from input URL to [`AnalysisResult`].
    pub async fn analyze_url(&self, raw_url: &str) -> AnalysisResult {
        let url = normalize_url(raw_url);
        info!("Analyzing: {url}");

        match self.fetcher.fetch(&url).await {
            FetchOutcome::Success(page) => {
                let links = self.prober.probe(&page.body, &url).await;

                let performance = score_performance(&page, links, &self.config);
                let security = score_security(&url, &page);
                let seo = score_seo(&page.body);
                let reliability = score_reliability(&page);
                let identity = identify(&page, &url);

                let overall = (f64::from(
                    performance.score + security.score + seo.score,
                ) / 3.0)
                    .round() as u32;

                info!(
                    "  → Performance: {} | Security: {} | SEO: {} | Reliability: {} | Overall: {}",
                    performance.score, security.score, seo.score, reliability.score, overall
                );

                AnalysisResult {
                    url,
                    performance: performance.score,
                    security: security.score,
                    seo: seo.score,
                    reliability: reliability.score,
                    overall,
                    backend: identity.backend,
                    protocol: identity.protocol,
                    response_time: format!("{} ms", page.elapsed_ms),
                    performance_breakdown: performance.breakdown,
                    security_breakdown: security.breakdown,
                    seo_breakdown: seo.breakdown,
                    reliability_breakdown: reliability.breakdown,
                }
            }
            FetchOutcome::Failure { reason } => {
                warn!("Fetch failed for {url}: {reason}");
                AnalysisResult::failure(url)
            }
        }
    }

    /// Analyzes a batch of raw URLs concurrently.
    ///
    /// Pipelines run with at most `max_concurrency` in flight; results are
    /// reassembled in input order, one per input URL. A slow or hanging URL
    /// delays only its own pipeline thanks to per-attempt timeouts.
    pub async fn analyze_batch(&self, urls: &[String]) -> Vec<AnalysisResult> {
        stream::iter(urls)
            .map(|url| self.analyze_url(url))
            .buffered(self.config.max_concurrency.max(1))
            .collect()
            .await
    }
}
