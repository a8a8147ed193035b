//! Scoring engines.
//!
//! Each category scorer is a pure, total function from response metadata or
//! markup to a [`ScoringResult`]: given any input, including missing headers
//! or empty markup, it returns a fully populated breakdown with a composite
//! in `[0, 100]`. Network I/O (the link probe) happens outside the scorers;
//! its counts are passed in as plain data.

mod identify;
mod performance;
mod reliability;
mod security;
mod seo;

pub use identify::{identify, ServerIdentity};
pub use performance::score_performance;
pub use reliability::score_reliability;
pub use security::score_security;
pub use seo::score_seo;

/// Clamps a raw composite value to the `[0, 100]` score range.
pub(crate) fn clamp_score(value: i64) -> u32 {
    value.clamp(0, 100) as u32
}
