//! Client error taxonomy.

use thiserror::Error;

/// Fallback message for failures that carry no detail of their own.
pub const GENERIC_FAILURE: &str = "Unknown error";

/// Errors from the fact-check backend client.
///
/// All variants render to a human-readable, non-empty message via `Display`,
/// suitable for surfacing directly in the UI.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: connection refused, timeout, TLS.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the claim with a non-success status.
    #[error("{message}")]
    Backend {
        /// HTTP status code of the response.
        status: u16,
        /// Detail from the response body, or [`GENERIC_FAILURE`].
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
}
