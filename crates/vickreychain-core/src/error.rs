//! Error types for VickreyChain

use thiserror::Error;

/// Main error type for landing page operations
#[derive(Error, Debug)]
pub enum LandingError {
    /// The email field was submitted empty
    #[error("Please fill out this field.")]
    EmailRequired,

    /// The email field does not hold a valid address
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Site configuration holds an unusable value
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LandingError {
    /// Whether this error comes from validating form input
    pub fn is_validation(&self) -> bool {
        matches!(self, LandingError::EmailRequired | LandingError::InvalidEmail(_))
    }
}

/// Result type alias using LandingError
pub type LandingResult<T> = Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LandingError::InvalidEmail("missing '@'".to_string());
        assert_eq!(format!("{}", err), "Invalid email: missing '@'");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LandingError = io_err.into();
        assert!(matches!(err, LandingError::Io(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_errors() {
        assert!(LandingError::EmailRequired.is_validation());
        assert!(LandingError::InvalidEmail("x".into()).is_validation());
        assert!(!LandingError::Config("x".into()).is_validation());
    }
}
