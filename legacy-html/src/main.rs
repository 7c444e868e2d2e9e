//! Legacy HTML front end for the memes application
//!
//! Independent thin client kept separate from the JSON page loader: one
//! route with an optional numeric `id` query parameter that fetches the
//! backend payload and emits an `<img>` tag plus previous/next links.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use meme_types::MemePayload;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
struct AppState {
    http: reqwest::Client,
    base_url: Arc<String>,
}

#[derive(Debug, Deserialize)]
struct MemeQuery {
    id: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let base_url = match std::env::var("DB_CLIENT_ENDPOINT") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            eprintln!(
                "ERROR the following environment variables are required but not set: DB_CLIENT_ENDPOINT"
            );
            std::process::exit(1);
        }
    };

    let state = AppState {
        http: reqwest::Client::new(),
        base_url: Arc::new(base_url),
    };

    let router = Router::new()
        .route("/memes", get(render_memes))
        .with_state(state);

    let addr = std::net::SocketAddr::from((
        [0, 0, 0, 0],
        std::env::var("PORT").map_or(Ok(8090), |p| p.parse())?,
    ));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("legacy memes page started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .await
        .map_err(anyhow::Error::from)
}

async fn render_memes(
    State(state): State<AppState>,
    Query(query): Query<MemeQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let url = match query.id {
        Some(raw) => {
            let id: i64 = raw.parse().map_err(|_| {
                (
                    StatusCode::BAD_REQUEST,
                    format!("The meme id needs to be an integer. Received '{raw}'."),
                )
            })?;
            format!("{}/meme/{id}", state.base_url)
        }
        None => format!("{}/latest_meme", state.base_url),
    };

    let response = state.http.get(&url).send().await.map_err(|err| {
        tracing::error!("backend request failed: {err}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to load meme data".to_string(),
        )
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err((
            status,
            format!(
                "failed to fetch meme: {}",
                status.canonical_reason().unwrap_or("unknown status")
            ),
        ));
    }

    let payload: MemePayload = response.json().await.map_err(|err| {
        tracing::error!("backend returned a malformed payload: {err}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to load meme data".to_string(),
        )
    })?;

    Ok(Html(render_page(&payload)))
}

fn render_page(payload: &MemePayload) -> String {
    let mut page = String::new();

    if let Some(prev) = payload.previous_meme_id {
        page.push_str(&format!("<a href='/memes/{prev}'>Previous Meme</a>"));
    }
    if payload.previous_meme_id.is_some() && payload.next_meme_id.is_some() {
        page.push_str(" | ");
    }
    if let Some(next) = payload.next_meme_id {
        page.push_str(&format!("<a href='/memes/{next}'>Next Meme</a>"));
    }
    page.push_str("<br><br>");

    page.push_str(&format!(
        "<img src='{}' alt='Meme Image' width='600'><br><br>",
        escape_html(&payload.current_meme.url)
    ));

    page
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
