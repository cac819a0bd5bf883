//! Client error types.
//!
//! Provides error types for HTTP client operations.

use crate::session::StoreError;

/// Message used when a failed response carries no usable `detail` field.
pub const GENERIC_API_ERROR: &str = "API error";

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP round trip failed (unreachable host, refused connection, broken body).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a success status but the body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-supplied `detail`, or [`GENERIC_API_ERROR`].
        message: String,
    },

    /// Request payload could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Header name or value is not valid HTTP.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Token store failure.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ClientError {
    /// Returns true for failures of the round trip itself rather than a
    /// server verdict.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::MalformedResponse(_))
    }

    /// Returns true if the server rejected the request.
    #[must_use]
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns the HTTP status of an API error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server answered 401.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}
