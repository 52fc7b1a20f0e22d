//! Error types for the analysis pipeline.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors the core pipeline can surface to callers.
///
/// Division by zero during price-change computation is deliberately not
/// represented here: a market row with `open == 0` resolves to an absent
/// `price_change` ("no market impact data"), never an error.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// An event's date string failed to parse as a calendar date.
    /// Carries the offending record's position in the input sequence.
    #[error("invalid date {value:?} at event index {index}")]
    InvalidDate { index: usize, value: String },

    /// A data-source fetch failed. The session is terminal: no partial
    /// data, no retry.
    #[error("data source unavailable: {0}")]
    SourceUnavailable(String),
}

impl PipelineError {
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        PipelineError::SourceUnavailable(msg.into())
    }
}
