//! Error types for studies.

use sampler_core::TrialError;
use thiserror::Error;

/// Study error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StudyError {
    /// A trial request was rejected
    #[error(transparent)]
    Trial(#[from] TrialError),

    /// Study parameters are unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StudyError {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// True for every invalid-argument condition, whether raised by the study
    /// or by an underlying trial.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::Trial(TrialError::InvalidArgument(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_error_is_transparent() {
        let err: StudyError = TrialError::invalid_argument("sample_count must be at least 1").into();
        assert_eq!(
            err.to_string(),
            "Invalid argument: sample_count must be at least 1"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_study_error_display() {
        let err = StudyError::invalid_argument("no sample sizes");
        assert!(err.to_string().contains("no sample sizes"));
        assert!(err.is_invalid_argument());
    }
}
