//! Single-endpoint client for the meme backend
//!
//! Every page load is exactly one GET against the backend. There is no
//! caching, no retry and no timeout beyond the platform default; a failed
//! fetch is surfaced to the caller as-is.

mod error;

pub use error::{MemeClientError, MemeClientResult};

use serde_json::Value;
use tracing::debug;

/// HTTP client for the meme backend
pub struct MemeClient {
    http: reqwest::Client,
    base_url: String,
}

impl MemeClient {
    /// Creates a client for the given backend base URL
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetches the most recent meme
    ///
    /// # Errors
    ///
    /// See [`MemeClientError`]; non-2xx statuses, unreachable backends and
    /// non-JSON bodies are all surfaced as errors.
    pub async fn latest_meme(&self) -> MemeClientResult<Value> {
        self.fetch("/latest_meme").await
    }

    /// Fetches the meme with the given id
    ///
    /// # Errors
    ///
    /// See [`MemeClientError`].
    pub async fn meme_by_id(&self, meme_id: i64) -> MemeClientResult<Value> {
        self.fetch(&format!("/meme/{meme_id}")).await
    }

    // The payload is forwarded verbatim: the backend owns the schema, so the
    // body is parsed as plain JSON with no field validation or renaming.
    async fn fetch(&self, path: &str) -> MemeClientResult<Value> {
        let url = format!("{}{path}", self.base_url);
        debug!("fetching meme payload from {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(MemeClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MemeClientError::Upstream {
                status,
                status_text: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        response.json().await.map_err(MemeClientError::Decode)
    }
}
