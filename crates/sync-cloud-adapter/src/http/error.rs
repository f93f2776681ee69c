/*
[INPUT]:  Error sources (HTTP transport, API envelope, serialization, configuration)
[OUTPUT]: Structured error types with user-facing messages
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the sync cloud adapter
#[derive(Error, Debug)]
pub enum SyncCloudError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server reported a failure, either in the envelope or by status code
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SyncCloudError {
    /// True when the request never got a well-formed answer from the server
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SyncCloudError::Http(_) | SyncCloudError::InvalidResponse(_)
        )
    }

    /// Text shown to the user. Business failures carry the server's own message.
    pub fn user_message(&self) -> String {
        match self {
            SyncCloudError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        SyncCloudError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for sync cloud operations
pub type Result<T> = std::result::Result<T, SyncCloudError>;
