//! Broken-link sampling probe.
//!
//! Extracts a bounded sample of outbound anchors from fetched markup and
//! classifies each as reachable or broken with a short HEAD request. This is
//! a sampling probe, not an exhaustive audit: the cap bounds worst-case
//! latency no matter how many anchors a page carries.

use std::collections::HashSet;
use std::sync::LazyLock;

use futures::future::join_all;
use log::debug;
use scraper::{Html, Selector};
use url::Url;

use crate::config::{AnalyzerConfig, MAX_PROBE_REDIRECT_HOPS};
use crate::error::InitializationError;

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("Failed to parse anchor selector - this is a bug")
});

/// Counts from one probe run: how many sampled links were broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkProbeReport {
    /// Sampled links that failed the reachability check
    pub broken: u32,
    /// Total links sampled
    pub total: u32,
}

/// Probes outbound links for reachability.
pub struct LinkProber {
    client: reqwest::Client,
    max_links: usize,
}

impl LinkProber {
    /// Creates a prober with the short probe timeout and bounded redirects.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AnalyzerConfig) -> Result<Self, InitializationError> {
        let client = reqwest::Client::builder()
            .timeout(config.probe_timeout)
            .connect_timeout(config.probe_timeout)
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(MAX_PROBE_REDIRECT_HOPS))
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self {
            client,
            max_links: config.max_probe_links,
        })
    }

    /// Samples anchors from `markup` and HEAD-checks each for reachability.
    ///
    /// Empty or unparseable markup yields `{0, 0}`: no signal, not an error.
    /// Any transport error, DNS failure, or timeout counts the link as
    /// broken.
    pub async fn probe(&self, markup: &str, base_url: &str) -> LinkProbeReport {
        let links = sample_links(markup, base_url, self.max_links);
        if links.is_empty() {
            return LinkProbeReport::default();
        }

        let checks = join_all(links.iter().map(|link| self.is_link_alive(link))).await;
        let broken = checks.iter().filter(|alive| !**alive).count() as u32;
        debug!(
            "Link probe for {base_url}: {broken} broken out of {}",
            links.len()
        );
        LinkProbeReport {
            broken,
            total: links.len() as u32,
        }
    }

    /// HEAD-checks one link; final status in `[200, 400)` counts as alive.
    async fn is_link_alive(&self, link: &str) -> bool {
        match self.client.head(link).send().await {
            Ok(response) => (200..400).contains(&response.status().as_u16()),
            Err(e) => {
                debug!("Link probe failed for {link}: {e}");
                false
            }
        }
    }
}

/// Extracts up to `cap` unique, probeable link targets from markup.
///
/// Anchor `href`s are resolved against `base_url`; fragment-only anchors and
/// non-HTTP(S) schemes (`javascript:`, `mailto:`, `tel:`) are excluded.
/// Duplicates are dropped while preserving first-seen order, so the sample is
/// deterministic for a given page.
fn sample_links(markup: &str, base_url: &str, cap: usize) -> Vec<String> {
    if markup.is_empty() {
        return Vec::new();
    }

    let document = Html::parse_document(markup);
    let base = Url::parse(base_url).ok();

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for element in document.select(&ANCHOR_SELECTOR) {
        if links.len() >= cap {
            break;
        }
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if href.is_empty() || href.starts_with('#') {
            continue;
        }

        let resolved = match Url::parse(href) {
            Ok(absolute) => Some(absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                base.as_ref().and_then(|b| b.join(href).ok())
            }
            Err(_) => None,
        };
        let Some(resolved) = resolved else { continue };
        if !matches!(resolved.scheme(), "http" | "https") {
            continue;
        }

        let link = resolved.to_string();
        if seen.insert(link.clone()) {
            links.push(link);
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    #[test]
    fn test_sample_links_resolves_relative_against_base() {
        let markup = r#"<html><body>
            <a href="/about">About</a>
            <a href="contact.html">Contact</a>
            <a href="https://other.example/page">Other</a>
        </body></html>"#;
        let links = sample_links(markup, "https://example.com/dir/", 10);
        assert_eq!(
            links,
            vec![
                "https://example.com/about".to_string(),
                "https://example.com/dir/contact.html".to_string(),
                "https://other.example/page".to_string(),
            ]
        );
    }

    #[test]
    fn test_sample_links_excludes_non_http_schemes_and_fragments() {
        let markup = r##"<html><body>
            <a href="javascript:void(0)">JS</a>
            <a href="mailto:someone@example.com">Mail</a>
            <a href="tel:+15551234567">Call</a>
            <a href="#section">Anchor</a>
            <a href="">Empty</a>
            <a href="https://example.com/real">Real</a>
        </body></html>"##;
        let links = sample_links(markup, "https://example.com", 10);
        assert_eq!(links, vec!["https://example.com/real".to_string()]);
    }

    #[test]
    fn test_sample_links_deduplicates() {
        let markup = r#"<html><body>
            <a href="https://example.com/a">1</a>
            <a href="https://example.com/a">2</a>
            <a href="/a">3</a>
        </body></html>"#;
        let links = sample_links(markup, "https://example.com", 10);
        assert_eq!(links, vec!["https://example.com/a".to_string()]);
    }

    #[test]
    fn test_sample_links_caps_at_limit() {
        let mut markup = String::from("<html><body>");
        for i in 0..50 {
            markup.push_str(&format!(r#"<a href="https://example.com/page{i}">l</a>"#));
        }
        markup.push_str("</body></html>");
        let links = sample_links(&markup, "https://example.com", 10);
        assert_eq!(links.len(), 10);
    }

    #[test]
    fn test_sample_links_empty_markup() {
        assert!(sample_links("", "https://example.com", 10).is_empty());
    }

    #[test]
    fn test_sample_links_invalid_base_keeps_absolute_links_only() {
        let markup = r#"<a href="/relative">r</a><a href="https://example.com/abs">a</a>"#;
        let links = sample_links(markup, "not a base url", 10);
        assert_eq!(links, vec!["https://example.com/abs".to_string()]);
    }

    #[tokio::test]
    async fn test_probe_counts_broken_and_valid_links() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("HEAD", "/ok"))
                .respond_with(status_code(200)),
        );
        server.expect(
            Expectation::matching(request::method_path("HEAD", "/gone"))
                .respond_with(status_code(404)),
        );

        let base = format!("http://{}/", server.addr());
        let markup = r#"<html><body><a href="/ok">ok</a><a href="/gone">gone</a></body></html>"#;
        let prober = LinkProber::new(&AnalyzerConfig::default()).expect("prober should build");
        let report = prober.probe(markup, &base).await;
        assert_eq!(report.total, 2);
        assert_eq!(report.broken, 1);
    }

    #[tokio::test]
    async fn test_probe_empty_markup_is_no_signal() {
        let prober = LinkProber::new(&AnalyzerConfig::default()).expect("prober should build");
        let report = prober.probe("", "https://example.com").await;
        assert_eq!(report, LinkProbeReport::default());
    }
}
