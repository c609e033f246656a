use thiserror::Error;

/// Crate-wide error type. Every failure a caller can observe maps to one
/// of these variants; callers match on the variant, never on message text.
#[derive(Debug, Error)]
pub enum ModelScopeError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The configured deadline elapsed before the endpoint answered.
    #[error("Request timed out after {seconds}s. Check your network connection and try again")]
    Timeout { seconds: u64 },

    /// The endpoint could not be reached at all.
    #[error("Cannot reach the generation endpoint ({0}). Make sure the relay server is running and the base URL points at the right port")]
    Connection(String),

    /// The provider answered with a non-success status. `message` holds the
    /// best-effort text extracted from the response body.
    #[error("Image generation failed (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Request error: {0}")]
    Request(String),

    #[error("Response error: {0}")]
    Response(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ModelScopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_is_distinct_from_connection() {
        let timeout = ModelScopeError::Timeout { seconds: 60 };
        let connection = ModelScopeError::Connection("connection refused".into());
        assert!(timeout.to_string().contains("timed out"));
        assert!(connection.to_string().contains("relay server"));
        assert_ne!(timeout.to_string(), connection.to_string());
    }

    #[test]
    fn test_upstream_display_keeps_extracted_message() {
        let err = ModelScopeError::Upstream {
            status: 429,
            message: "rate limited".into(),
        };
        assert_eq!(
            err.to_string(),
            "Image generation failed (HTTP 429): rate limited"
        );
    }
}
