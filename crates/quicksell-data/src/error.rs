//! Remote request error types.

use thiserror::Error;

/// Errors that can occur when talking to the remote data service.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request at all (network, DNS, TLS).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with an error status. The message is the
    /// response body when one was readable, and is shown to the user
    /// verbatim.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Parse(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
