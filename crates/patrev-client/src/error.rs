//! Client error types.

use thiserror::Error;

/// Errors from the request layer and the typed API client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The server could not be reached (connection refused, DNS failure,
    /// dropped connection).
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// `detail` from the error body, or `API error: <status text>`.
        message: String,
    },

    /// A response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The request could not be built (bad URL or header value).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A local file could not be read for upload.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ClientError {
    /// True for a `404 Not Found` response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::RequestFailed { status: 404, .. })
    }
}
