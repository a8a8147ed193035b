//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading URLs from a file or stdin
//! - Emitting the ordered results as JSON on stdout
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use site_audit::{Analyzer, AnalyzerConfig, LogLevel, OutputFormat};

/// Fetches web pages and scores their performance, security, SEO, and
/// reliability.
#[derive(Debug, Parser)]
#[command(name = "site_audit", version)]
struct Opt {
    /// File containing one URL per line, or "-" for stdin. Blank lines and
    /// lines starting with '#' are skipped.
    file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Output format for the JSON results
    #[arg(long, value_enum, default_value = "compact")]
    output: OutputFormat,

    /// Maximum concurrent URL pipelines
    #[arg(long, default_value_t = 8)]
    max_concurrency: usize,

    /// Per-attempt page fetch timeout in seconds
    #[arg(long, default_value_t = 15)]
    timeout_seconds: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    env_logger::Builder::from_default_env()
        .filter_level(opt.log_level.clone().into())
        .init();

    let urls = read_urls(&opt.file).await?;
    info!("Read {} URL(s) from input", urls.len());

    let config = AnalyzerConfig {
        timeout: Duration::from_secs(opt.timeout_seconds),
        max_concurrency: opt.max_concurrency,
        ..Default::default()
    };

    let analyzer = match Analyzer::new(config) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("site_audit error: {e:#}");
            process::exit(1);
        }
    };

    let results = analyzer.analyze_batch(&urls).await;

    let json = match opt.output {
        OutputFormat::Compact => serde_json::to_string(&results),
        OutputFormat::Pretty => serde_json::to_string_pretty(&results),
    }
    .context("Failed to serialize results")?;
    println!("{json}");

    let failed = results
        .iter()
        .filter(|r| r.response_time == "Invalid URL")
        .count();
    info!(
        "Analyzed {} URL(s): {} succeeded, {} failed",
        results.len(),
        results.len() - failed,
        failed
    );
    Ok(())
}

/// Reads URLs from the input file or stdin, skipping blank lines and
/// `#` comments.
async fn read_urls(path: &PathBuf) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    if path.as_os_str() == "-" {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
            push_url(&mut urls, &line);
        }
    } else {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        let mut lines = BufReader::new(file).lines();
        while let Some(line) = lines.next_line().await.context("Failed to read input file")? {
            push_url(&mut urls, &line);
        }
    }
    Ok(urls)
}

fn push_url(urls: &mut Vec<String>, line: &str) {
    let trimmed = line.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('#') {
        urls.push(trimmed.to_string());
    }
}
