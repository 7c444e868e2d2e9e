mod health;
mod memes;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Creates the router with all page routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::handler))
        .route("/memes", get(memes::latest_meme))
        .route("/memes/{meme_id}", get(memes::meme_by_id))
}
