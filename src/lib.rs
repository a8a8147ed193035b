//! site_audit library: batch website quality scoring
//!
//! This library fetches a batch of URLs over HTTP(S) and derives deterministic
//! quality scores (performance, security posture, SEO, reliability) from each
//! response's metadata and page markup.
//!
//! # Example
//!
//! ```no_run
//! use site_audit::{Analyzer, AnalyzerConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = Analyzer::new(AnalyzerConfig::default())?;
//! let urls = vec!["example.com".to_string(), "http://rust-lang.org".to_string()];
//! let results = analyzer.analyze_batch(&urls).await;
//! for result in &results {
//!     println!("{}: overall {}", result.url, result.overall);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod analyzer;
pub mod config;
mod error;
mod fetch;
mod models;
mod normalize;
mod probe;
mod score;

// Re-export public API
pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, LogLevel, OutputFormat};
pub use error::InitializationError;
pub use fetch::PageFetcher;
pub use models::{
    AnalysisResult, FetchOutcome, FetchedPage, PerformanceBreakdown, ReliabilityBreakdown,
    ScoringResult, SecurityBreakdown, SeoBreakdown,
};
pub use normalize::normalize_url;
pub use probe::{LinkProbeReport, LinkProber};
pub use score::{
    identify, score_performance, score_reliability, score_security, score_seo, ServerIdentity,
};
