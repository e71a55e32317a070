use thiserror::Error;

/// Error types for machine translation backends
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MtError {
    /// The backend could not be reached: connection refused, DNS failure,
    /// timeout, or the request could not be sent
    #[error("Translation backend unreachable: {0}")]
    Unreachable(String),
    /// The backend answered with a non-success HTTP status
    #[error("Translation backend returned {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    NonSuccessStatus {
        status: u16,
        /// Error message reported by the backend itself, if it sent one
        message: Option<String>,
    },
    /// The backend answered successfully but the translation was empty or absent
    #[error("Translation backend returned no translated text")]
    EmptyResult,
    /// The backend body could not be parsed into the expected structure
    #[error("Malformed response from translation backend: {0}")]
    MalformedResponse(String),
    /// The provider was configured with unusable settings
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            MtError::MalformedResponse(err.to_string())
        } else {
            MtError::Unreachable(err.to_string())
        }
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_success_display_with_message() {
        let err = MtError::NonSuccessStatus {
            status: 400,
            message: Some("Invalid request".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Translation backend returned 400: Invalid request"
        );
    }

    #[test]
    fn test_non_success_display_without_message() {
        let err = MtError::NonSuccessStatus {
            status: 500,
            message: None,
        };
        assert_eq!(
            err.to_string(),
            "Translation backend returned 500: no error message"
        );
    }
}
