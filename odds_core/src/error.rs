//! Calculation errors

use thiserror::Error;

/// Error raised by any calculation in this crate
///
/// Every variant is user-correctable: the caller shows the message in place
/// of the result and lets the user try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OddsError {
    /// Malformed numeric text, missing die separator, out-of-range value
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Statistics requested on a sample with no trials
    #[error("No trials to summarize (no hits)")]
    EmptySample,
    /// Density estimation on a constant sample
    #[error("Need at least two distinct damage values to estimate a density")]
    InsufficientSamples,
}

impl OddsError {
    /// Shorthand for building an `InvalidInput` error
    pub fn invalid(message: impl Into<String>) -> Self {
        OddsError::InvalidInput(message.into())
    }
}
