//! HTTP client for the GitHub user-events endpoint.

use gha_core::config::ApiConfig;
use std::time::Duration;

/// Failure modes of a user-events fetch.
///
/// The statuses GitHub actually answers with get their own variants so the
/// presentation layer can word them; anything else is carried as the raw
/// status code.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// 404 — the username does not exist.
    #[error("user not found")]
    NotFound,
    /// 403 or 429 — the unauthenticated rate limit was exhausted.
    #[error("API rate limit exceeded")]
    RateLimited,
    /// Any other non-200 status.
    #[error("API returned status {0}")]
    Status(u16),
    /// Transport failure: DNS, TLS, timeout, connection refused.
    #[error("could not reach the API: {0}")]
    Connection(#[from] reqwest::Error),
}

/// Client over the GitHub Events API.
///
/// The base URL comes from config so the integration harnesses can point it
/// at a local fake server.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .user_agent(&api.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: api.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the raw body of `GET /users/{username}/events`.
    ///
    /// A 200 yields the body text verbatim; every other outcome is a
    /// [`FetchError`]. The body is never inspected here.
    pub async fn user_events(&self, username: &str) -> Result<String, FetchError> {
        let url = format!("{}/users/{}/events", self.base_url, username);
        tracing::debug!(%url, "fetching user events");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!(status, "user events response");

        match status {
            200 => Ok(response.text().await?),
            404 => Err(FetchError::NotFound),
            403 | 429 => Err(FetchError::RateLimited),
            code => Err(FetchError::Status(code)),
        }
    }
}
