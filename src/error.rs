//! Error types for maximin clustering.

use thiserror::Error;

/// Errors that can occur when loading patterns or running the algorithm.
///
/// There are exactly two categories: the pattern set itself is unusable, or
/// a configuration parameter is outside its legal range. Everything else the
/// algorithm encounters (an empty cluster while computing maxima, a zero
/// maximum separation) is handled internally and never surfaces as an error.
#[derive(Debug, Error)]
pub enum MaximinError {
    /// The pattern set cannot be clustered as given (empty, fewer than two
    /// patterns, mismatched parallel arrays, ragged or non-finite features).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of what is wrong with the pattern set
        message: String,
    },

    /// A configuration parameter is outside its legal range.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of what is wrong with the parameter
        message: String,
    },
}

impl MaximinError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}
