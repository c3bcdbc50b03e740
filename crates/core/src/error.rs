//! Error types for the tender-screening system.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the tender-screening system.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data error (invalid or malformed input payload).
    #[error("Data error: {0}")]
    Data(String),

    /// No bid candidates were provided at all.
    #[error("No bid candidates provided")]
    EmptyInput,

    /// Every bidder group was discarded during consolidation.
    ///
    /// A legitimate terminal outcome, distinct from a malformed request:
    /// the input was well-formed but nothing survived the selection rules.
    #[error("No valid bids after consolidation")]
    NoValidBids,

    /// A metric's cardinality precondition is unmet.
    ///
    /// Carries structured detail so a downstream explainer can narrate
    /// exactly which metric failed and by how much.
    #[error("Metric '{metric}' requires at least {required} bids, got {provided}")]
    InsufficientData {
        metric: &'static str,
        required: usize,
        provided: usize,
    },

    /// A metric's input is degenerate (zero mean, zero std, zero range).
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// A requested metric identifier is not in the registry.
    #[error("Unknown screening metric '{0}'")]
    UnknownMetric(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a data error.
    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }

    /// Create a degenerate-input error.
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Error::DegenerateInput(msg.into())
    }

    /// Create an insufficient-data error for a metric.
    pub fn insufficient(metric: &'static str, required: usize, provided: usize) -> Self {
        Error::InsufficientData {
            metric,
            required,
            provided,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let err = Error::insufficient("kurt", 4, 2);
        assert_eq!(
            err.to_string(),
            "Metric 'kurt' requires at least 4 bids, got 2"
        );
    }

    #[test]
    fn test_no_valid_bids_is_distinct_from_empty_input() {
        assert_ne!(Error::NoValidBids.to_string(), Error::EmptyInput.to_string());
    }
}
