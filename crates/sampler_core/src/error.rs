//! Error types for trial construction.

use thiserror::Error;

/// Errors raised while validating a trial request.
///
/// Sampling itself cannot fail once a request is valid, so the only kind is
/// an invalid argument. No partial table is ever produced alongside an error.
///
/// # Examples
/// ```
/// use sampler_core::TrialError;
///
/// let err = TrialError::invalid_argument("sample_count must be at least 1, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid argument: sample_count must be at least 1, got 0"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrialError {
    /// Sample count or seed violates its constraints.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TrialError {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
