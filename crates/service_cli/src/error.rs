//! Error types for the report driver.

use thiserror::Error;

/// Report error type
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// A trial request was rejected
    #[error("Trial error: {0}")]
    Trial(#[from] sampler_core::TrialError),

    /// A study rejected its parameters
    #[error("Study error: {0}")]
    Study(#[from] sampler_study::StudyError),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text rendering failed
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use sampler_study::StudyError;

    #[test]
    fn test_error_display() {
        let err: ReportError = StudyError::invalid_argument("no sample sizes").into();
        assert!(err.to_string().contains("no sample sizes"));
        assert!(err.to_string().starts_with("Study error"));
    }
}
