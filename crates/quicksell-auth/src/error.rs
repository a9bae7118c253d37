//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Failed to send the request.
    #[error("request failed: {0}")]
    Request(String),

    /// The auth endpoint answered with an error status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AuthError::Parse(e.to_string())
        } else {
            AuthError::Request(e.to_string())
        }
    }
}
