//! Error kinds surfaced by a comparison request.

use thiserror::Error;

use crate::corpus::FetchFailure;

/// Failure of a comparison request. No partial result accompanies either
/// variant.
///
/// Empty or zero-word input is not an error: it yields an all-zero
/// [`AggregateRecord`](crate::stats::AggregateRecord).
#[derive(Debug, Error)]
pub enum CompareError {
    /// The baseline was absent and could not be built.
    #[error("baseline unavailable: {0}")]
    BaselineUnavailable(#[from] FetchFailure),
    /// Anything else: storage I/O, a malformed baseline file, ….
    #[error("processing failed: {0:#}")]
    Processing(#[from] anyhow::Error),
}

impl CompareError {
    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            CompareError::BaselineUnavailable(_) => "baseline_unavailable",
            CompareError::Processing(_) => "internal",
        }
    }
}
