//! Configuration types and CLI options.
//!
//! This module defines the immutable [`AnalyzerConfig`] struct and the enums
//! used for command-line argument parsing.

use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    CONTENT_SIZE_THRESHOLDS, DEFAULT_MAX_CONCURRENCY, DEFAULT_USER_AGENT, HTTP_TIMEOUT,
    LATENCY_THRESHOLDS, LINK_PROBE_TIMEOUT, MAX_PROBE_LINKS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Result output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed JSON for human inspection
    Pretty,
}

/// Library configuration (no CLI dependencies).
///
/// An explicit immutable value passed to [`crate::Analyzer::new`] at startup;
/// there is no global mutable configuration. It can be constructed
/// programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```
/// use site_audit::AnalyzerConfig;
/// use std::time::Duration;
///
/// let config = AnalyzerConfig {
///     timeout: Duration::from_secs(30),
///     max_concurrency: 16,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Per-attempt page fetch timeout (connect + response read)
    pub timeout: Duration,

    /// Timeout for individual link-probe HEAD requests
    pub probe_timeout: Duration,

    /// Maximum concurrent URL pipelines in a batch
    pub max_concurrency: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Latency thresholds for the performance scorer, as `(max_ms, score)`
    /// pairs in ascending order of `max_ms`
    pub latency_thresholds: Vec<(u64, u32)>,

    /// Content-size thresholds for the performance scorer, as
    /// `(max_bytes, score)` pairs in ascending order of `max_bytes`
    pub content_size_thresholds: Vec<(u64, u32)>,

    /// Maximum number of unique links sampled by the link probe
    pub max_probe_links: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            timeout: HTTP_TIMEOUT,
            probe_timeout: LINK_PROBE_TIMEOUT,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            latency_thresholds: LATENCY_THRESHOLDS.to_vec(),
            content_size_thresholds: CONTENT_SIZE_THRESHOLDS.to_vec(),
            max_probe_links: MAX_PROBE_LINKS,
        }
    }
}
