//! Error types and result aliases for operations that need no transport.

use thiserror::Error;

/// Errors raised while escaping paths or checking artifact digests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid percent-escape in '{path}' at byte {position}")]
    InvalidEscape { path: String, position: usize },

    #[error("Path '{path}' has a segment made only of dots")]
    DotSegment { path: String },

    #[error("Integrity check failed for {file}: expected {expected}, got {actual}")]
    IntegrityFailure {
        file: String,
        expected: String,
        actual: String,
    },

    #[error("No sha256 digest published for {file}")]
    MissingDigest { file: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            CoreError::InvalidEscape { .. } => {
                Some("Escape path segments with escape_segment before building requests")
            },
            CoreError::DotSegment { .. } => {
                Some("'.' and '..' are not valid project names or versions")
            },
            CoreError::IntegrityFailure { .. } => {
                Some("The download may be truncated or tampered with; fetch it again")
            },
            CoreError::MissingDigest { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidEscape {
            path: "pypi/%zz/json".to_string(),
            position: 5,
        };
        assert_eq!(err.to_string(), "Invalid percent-escape in 'pypi/%zz/json' at byte 5");

        let err = CoreError::IntegrityFailure {
            file: "demo-1.0.tar.gz".to_string(),
            expected: "aa".to_string(),
            actual: "bb".to_string(),
        };
        assert!(err.to_string().contains("demo-1.0.tar.gz"));
        assert!(err.suggestion().is_some());
    }
}
