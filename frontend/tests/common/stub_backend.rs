//! Minimal in-process stand-in for the meme backend
//!
//! Serves canned responses on an ephemeral port and records how each
//! endpoint was hit, so tests can assert on the exact outbound traffic.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

#[derive(Clone)]
struct StubState {
    latest: Arc<CannedResponse>,
    meme: Arc<CannedResponse>,
    latest_hits: Arc<AtomicUsize>,
    meme_hits: Arc<AtomicUsize>,
    last_meme_id: Arc<Mutex<Option<String>>>,
}

struct CannedResponse {
    status: u16,
    body: String,
}

/// Handle to a running stub backend
pub struct StubBackend {
    /// Base URL the loader should be pointed at
    pub base_url: String,
    latest_hits: Arc<AtomicUsize>,
    meme_hits: Arc<AtomicUsize>,
    last_meme_id: Arc<Mutex<Option<String>>>,
}

impl StubBackend {
    pub fn latest_hits(&self) -> usize {
        self.latest_hits.load(Ordering::SeqCst)
    }

    pub fn meme_hits(&self) -> usize {
        self.meme_hits.load(Ordering::SeqCst)
    }

    pub fn last_meme_id(&self) -> Option<String> {
        self.last_meme_id.lock().unwrap().clone()
    }
}

/// Starts a stub backend serving the given canned responses for
/// `/latest_meme` and `/meme/{meme_id}`
pub async fn start(latest: (u16, &str), meme: (u16, &str)) -> StubBackend {
    let state = StubState {
        latest: Arc::new(CannedResponse {
            status: latest.0,
            body: latest.1.to_string(),
        }),
        meme: Arc::new(CannedResponse {
            status: meme.0,
            body: meme.1.to_string(),
        }),
        latest_hits: Arc::new(AtomicUsize::new(0)),
        meme_hits: Arc::new(AtomicUsize::new(0)),
        last_meme_id: Arc::new(Mutex::new(None)),
    };

    let handle = StubBackend {
        base_url: String::new(),
        latest_hits: state.latest_hits.clone(),
        meme_hits: state.meme_hits.clone(),
        last_meme_id: state.last_meme_id.clone(),
    };

    let router = Router::new()
        .route("/latest_meme", get(serve_latest))
        .route("/meme/{meme_id}", get(serve_meme))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap();
    });

    StubBackend {
        base_url: format!("http://{addr}"),
        ..handle
    }
}

async fn serve_latest(State(state): State<StubState>) -> impl IntoResponse {
    state.latest_hits.fetch_add(1, Ordering::SeqCst);
    canned(&state.latest)
}

async fn serve_meme(
    State(state): State<StubState>,
    Path(meme_id): Path<String>,
) -> impl IntoResponse {
    state.meme_hits.fetch_add(1, Ordering::SeqCst);
    *state.last_meme_id.lock().unwrap() = Some(meme_id);
    canned(&state.meme)
}

fn canned(response: &CannedResponse) -> (StatusCode, String) {
    (
        StatusCode::from_u16(response.status).unwrap(),
        response.body.clone(),
    )
}
