//! Universal error handling for the page routes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::meme_client::MemeClientError;

/// Error envelope returned to the rendering layer
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Human-readable error message
    error: String,
}

/// Per-request error raised to the framework's error boundary
#[derive(Debug, Error)]
pub enum AppError {
    /// The supplied meme id is not an integer
    #[error("The meme id needs to be an integer. Received '{0}'.")]
    InvalidMemeId(String),
    /// The backend answered with a non-success status
    #[error("failed to fetch meme: {status_text}")]
    Upstream {
        /// Status code passed through from the backend
        status: StatusCode,
        /// Status text passed through from the backend
        status_text: String,
    },
    /// The backend was unreachable or returned a malformed body; the cause
    /// is logged server-side and never surfaced to the caller
    #[error("Failed to load meme data")]
    LoadFailed,
}

impl AppError {
    /// HTTP status carried by this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidMemeId(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => *status,
            Self::LoadFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        match status.as_u16() {
            400..=499 => tracing::warn!("client error: {message}"),
            500..=599 => tracing::error!("server error: {message}"),
            _ => {}
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<MemeClientError> for AppError {
    fn from(err: MemeClientError) -> Self {
        match err {
            MemeClientError::Upstream {
                status,
                status_text,
            } => Self::Upstream {
                status,
                status_text,
            },
            MemeClientError::Transport(cause) => {
                tracing::error!("backend request failed: {cause}");
                Self::LoadFailed
            }
            MemeClientError::Decode(cause) => {
                tracing::error!("backend returned a malformed payload: {cause}");
                Self::LoadFailed
            }
        }
    }
}
