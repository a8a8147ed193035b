//! Error type definitions.
//!
//! Failures while analyzing a single URL are data, not errors: they surface as
//! [`crate::FetchOutcome::Failure`] and fold into a zero-score result. The
//! types here cover the only operations that can genuinely fail the process,
//! which is setting up shared resources at startup.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing an HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}
