//! Error types for Bearboard

use thiserror::Error;

/// Main error type for Bearboard operations
#[derive(Error, Debug)]
pub enum BoardError {
    /// Configuration file could not be parsed or is inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// Transport-level HTTP failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote endpoint answered with an unexpected status code
    #[error("Unexpected status {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    /// Response body did not match the expected envelope
    #[error("Malformed payload: {0}")]
    Payload(String),

    /// The API answered without any data
    #[error("No data returned from API.")]
    NoData,

    /// All attempts completed but neither HTML nor a URL came back
    #[error("Dashboard generation failed. Please try again.")]
    EmptyDashboard,

    /// The query failed local screening and was never sent
    #[error("Please enter a meaningful user query.")]
    QueryRejected,

    /// An operation needed a validated API key but none is set
    #[error("No API key in session")]
    MissingKey,

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BoardError {
    /// Whether a dashboard request that failed with this error may be retried.
    ///
    /// Local rejections and a response without a body are final.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BoardError::Http(_)
                | BoardError::Status { .. }
                | BoardError::Payload(_)
                | BoardError::EmptyDashboard
        )
    }
}

/// Result type alias using BoardError
pub type BoardResult<T> = Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::Status {
            status: 502,
            endpoint: "https://api.example.com/dashboard".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Unexpected status 502 from https://api.example.com/dashboard"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let board_err: BoardError = io_err.into();
        assert!(matches!(board_err, BoardError::Io(_)));
    }

    #[test]
    fn test_local_rejections_are_final() {
        assert!(!BoardError::QueryRejected.is_retryable());
        assert!(!BoardError::MissingKey.is_retryable());
        assert!(!BoardError::NoData.is_retryable());
        assert!(BoardError::EmptyDashboard.is_retryable());
    }
}
