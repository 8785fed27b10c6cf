//! Feed error types.

use thiserror::Error;

/// Errors raised while fetching or decoding the feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Connection, TLS, timeout or body transfer failure.
    #[error("connection error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The feed answered with a non-success status code.
    #[error("connection error: HTTP {status}")]
    Status {
        /// HTTP status code returned by the feed.
        status: u16,
        /// Response body, trimmed. Logged, not displayed.
        message: String,
    },

    /// The body is not the GeoJSON shape the feed documents.
    #[error("malformed feed response: {0}")]
    Malformed(String),
}
