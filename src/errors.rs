// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for property checking

use thiserror::Error;

/// Errors that can occur while checking a proposition
#[derive(Debug, Error)]
pub enum PropCheckError {
    /// A counterexample was found; carries the formatted report
    #[error("{0}")]
    Counterexample(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Writing the structured observation log failed
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for property checking operations
pub type PropCheckResult<T> = Result<T, PropCheckError>;

impl PropCheckError {
    /// Whether this error reports a refuted proposition rather than an
    /// operational problem
    pub fn is_counterexample(&self) -> bool {
        matches!(self, PropCheckError::Counterexample(_))
    }
}

impl From<std::io::Error> for PropCheckError {
    fn from(err: std::io::Error) -> Self {
        PropCheckError::Export(err.to_string())
    }
}

impl From<serde_json::Error> for PropCheckError {
    fn from(err: serde_json::Error) -> Self {
        PropCheckError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counterexample_displays_report_verbatim() {
        let err = PropCheckError::Counterexample("x := 5".to_string());
        assert_eq!(err.to_string(), "x := 5");
        assert!(err.is_counterexample());
    }

    #[test]
    fn test_io_error_maps_to_export() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PropCheckError = io.into();
        assert!(matches!(err, PropCheckError::Export(_)));
        assert!(!err.is_counterexample());
    }
}
