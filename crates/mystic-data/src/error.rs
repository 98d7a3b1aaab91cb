//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur while fetching from the backend.
///
/// Callers in the storefront treat every variant the same way (a failed
/// load); the variants exist for the diagnostic log line.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("Request failed: {0}")]
    Request(String),

    /// The URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body was not what the endpoint promises.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request timed out.
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else if is_timeout(&e) {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::ParseError(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::ParseError(e.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_timeout(e: &reqwest::Error) -> bool {
    e.is_timeout()
}

// The browser fetch API has no client-side timeout.
#[cfg(target_arch = "wasm32")]
fn is_timeout(_e: &reqwest::Error) -> bool {
    false
}
