//! Error types for container population.

use crate::data::Count;
use thiserror::Error;

/// Main error type for value generators and the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PopulateError {
    /// A value generator was configured with unusable parameters.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// The key generator cannot produce enough distinct values.
    #[error(
        "Range exhausted: {requested} unique keys requested but the key generator reports a range of {range}"
    )]
    RangeExhausted { requested: Count, range: Count },

    /// Too many colliding draws under a configured retry limit.
    #[error(
        "Retry limit exceeded: produced {produced} of {requested} unique keys after {attempts} collisions"
    )]
    RetryLimitExceeded {
        requested: Count,
        produced: Count,
        attempts: usize,
    },
}

impl PopulateError {
    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        PopulateError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Result type for population operations.
pub type Result<T> = std::result::Result<T, PopulateError>;
