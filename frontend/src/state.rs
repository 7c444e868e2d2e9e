//! Application state management

use std::sync::Arc;

use crate::{bucket::BucketClient, config::Config, meme_client::MemeClient};

/// Application state shared across handlers
///
/// Every field is constructed once in `main` and threaded through here; the
/// handlers never touch the environment or build clients of their own.
#[derive(Clone)]
pub struct AppState {
    /// Validated environment configuration
    pub config: Arc<Config>,
    /// Client for the meme backend
    pub meme_client: Arc<MemeClient>,
    /// Object storage client handle
    pub bucket_client: Arc<BucketClient>,
}
