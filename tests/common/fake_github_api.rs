//! Fake GitHub Events API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /users/{username}/events` from per-user canned
//! bodies, or answers every request with a forced status code to exercise
//! the error taxonomy. The client under test takes its base URL from
//! `ApiConfig`, so tests just point it here.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeGitHubApi::start().await.unwrap();
//! api.set_feed("octocat", r#"[{"type":"WatchEvent","repo":{"name":"o/r"}}]"#).await;
//! // Build a Client with base_url = api.base_url()
//! ```

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
#[derive(Default)]
struct ApiState {
    /// Canned response bodies per username.
    feeds: HashMap<String, String>,
    /// When set, every request answers with this status and an empty body.
    forced_status: Option<u16>,
}

/// Handle to the running fake GitHub API server.
pub struct FakeGitHubApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeGitHubApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/users/{username}/events", get(user_events))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Set the response body for one username. Unknown usernames get a 404,
    /// like the real API.
    pub async fn set_feed(&self, username: &str, body: &str) {
        let mut state = self.state.lock().await;
        state.feeds.insert(username.to_string(), body.to_string());
    }

    /// Force every request to answer with `status` and an empty body.
    pub async fn force_status(&self, status: u16) {
        let mut state = self.state.lock().await;
        state.forced_status = Some(status);
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn user_events(
    Path(username): Path<String>,
    State(state): State<Arc<Mutex<ApiState>>>,
) -> impl IntoResponse {
    let state = state.lock().await;

    if let Some(status) = state.forced_status {
        let code = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (code, String::new());
    }

    match state.feeds.get(&username) {
        Some(body) => (StatusCode::OK, body.clone()),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}
