//! API client error types.

use desk_core::errors::ValidationError;
use thiserror::Error;

/// Errors that can occur when talking to the contracts/meetings API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered 401: the credential is missing, expired or revoked.
    #[error("unauthorized — sign in again")]
    Unauthorized,

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Server-provided message, or the raw response body.
        message: String,
    },

    /// The API answered 2xx with `"success": false`.
    #[error("{message}")]
    Rejected { message: String },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// The request payload failed form validation and was not sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl ApiError {
    /// Whether this error should send the user back to the login view.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
