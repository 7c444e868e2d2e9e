//! Memes frontend service
//!
//! Server-side page loaders for the memes web application. Each page request
//! turns into a single GET against the meme backend; the JSON payload flows
//! back to the rendering layer untouched.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Object storage client handle
pub mod bucket;

/// Environment-derived configuration
pub mod config;

/// Backend meme fetch client
pub mod meme_client;

/// Page routes
pub mod routes;

/// Server startup
pub mod server;

/// Application state
pub mod state;

/// Shared request/response types
pub mod types;
