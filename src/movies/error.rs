//! MovieBuffs API-specific error types.

/// Errors that can occur while talking to the MovieBuffs service.
#[derive(Debug, thiserror::Error)]
pub enum MoviesError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Generic API error
    #[error("MovieBuffs API error: {0}")]
    Other(String),
}
