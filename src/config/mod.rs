//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, thresholds, limits)
//! - HTTP header name constants
//! - The immutable [`AnalyzerConfig`] struct and CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{AnalyzerConfig, LogLevel, OutputFormat};
