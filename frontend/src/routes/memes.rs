use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::instrument;

use crate::{state::AppState, types::AppError};

/// Loads the most recent meme
///
/// The backend payload is forwarded to the page template verbatim.
#[instrument(skip(state))]
pub async fn latest_meme(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let payload = state.meme_client.latest_meme().await?;
    Ok(Json(payload))
}

/// Loads the meme with the given id
///
/// The id must be a decimal integer; anything else is rejected with a 400
/// before any backend call is made.
#[instrument(skip(state))]
pub async fn meme_by_id(
    State(state): State<AppState>,
    Path(meme_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id: i64 = meme_id
        .parse()
        .map_err(|_| AppError::InvalidMemeId(meme_id.clone()))?;

    let payload = state.meme_client.meme_by_id(id).await?;
    Ok(Json(payload))
}
