//! Error types for the homework clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review service or the bot API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not complete (DNS, connection, timeout)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with something other than 200 OK
    #[error("Endpoint unavailable (status {status}): {message}")]
    EndpointUnavailable {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// The body is not valid JSON
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// The bot API accepted the request but refused to deliver the message
    #[error("Message rejected: {0}")]
    Rejected(String),
}

impl ClientError {
    /// Create an endpoint error from status code and body
    pub fn endpoint_unavailable(status: u16, message: impl Into<String>) -> Self {
        Self::EndpointUnavailable {
            status,
            message: message.into(),
        }
    }
}
