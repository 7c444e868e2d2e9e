//! Canonical wire types for the meme backend contract
//!
//! The backend serializes with Go-style field names (`currentMeme`,
//! `previousMemeID`, `nextMemeID`); these types mirror that schema exactly.

#![deny(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]

use serde::{Deserialize, Serialize};

/// A stored meme record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meme {
    /// Database id of the meme
    pub id: i64,
    /// Directly embeddable image URL
    pub url: String,
}

/// Payload returned by `/latest_meme` and `/meme/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemePayload {
    /// The meme to display
    #[serde(rename = "currentMeme")]
    pub current_meme: Meme,
    /// Id of the chronologically previous meme, absent at the boundary
    #[serde(rename = "previousMemeID", skip_serializing_if = "Option::is_none")]
    pub previous_meme_id: Option<i64>,
    /// Id of the chronologically next meme, absent at the boundary
    #[serde(rename = "nextMemeID", skip_serializing_if = "Option::is_none")]
    pub next_meme_id: Option<i64>,
}
