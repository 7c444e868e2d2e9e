//! Errors raised by the backend meme fetch

use http::StatusCode;
use thiserror::Error;

/// Result type for meme fetch operations
pub type MemeClientResult<T> = Result<T, MemeClientError>;

/// Failure modes of the single backend GET
#[derive(Debug, Error)]
pub enum MemeClientError {
    /// The backend answered with a non-success status
    #[error("backend responded with {status_text}")]
    Upstream {
        /// Status code returned by the backend
        status: StatusCode,
        /// Status text returned by the backend
        status_text: String,
    },
    /// The backend could not be reached
    #[error("failed to reach backend: {0}")]
    Transport(#[source] reqwest::Error),
    /// The backend answered 2xx but the body was not valid JSON
    #[error("backend returned an invalid JSON body: {0}")]
    Decode(#[source] reqwest::Error),
}
