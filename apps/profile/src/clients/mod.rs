//! HTTP clients for the two read-only collaborators behind the profile page.
//!
//! Each collaborator is reached through a trait so the page renderer can be
//! driven by in-process fakes. `AppState` carries them as `Arc<dyn …>`.

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::models::algorand::{AccountSummary, TransactionRecord};
use crate::models::github::{EventRecord, RepositoryRecord};

pub mod algorand;
pub mod github;

pub use algorand::AlgorandClient;
pub use github::GithubClient;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Every way a collaborator fetch can fail. All variants are absorbed into a
/// section fallback by the page renderer.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Repository and event source (GitHub REST API).
#[async_trait]
pub trait GithubSource: Send + Sync {
    async fn repos(&self) -> Result<Vec<RepositoryRecord>, SourceError>;
    async fn events(&self) -> Result<Vec<EventRecord>, SourceError>;
}

/// Chain data source (Algorand algod node + indexer).
#[async_trait]
pub trait ChainSource: Send + Sync {
    async fn account(&self) -> Result<AccountSummary, SourceError>;
    async fn transactions(&self) -> Result<Vec<TransactionRecord>, SourceError>;
}

/// Sends a prepared request and decodes a JSON body.
/// Non-2xx statuses and undecodable bodies are reported as distinct errors.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, SourceError> {
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().clone();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SourceError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    debug!("GET {url} -> {status} ({} bytes)", body.len());
    Ok(serde_json::from_str(&body)?)
}

pub(crate) fn build_http_client(timeout_secs: u64) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::Router;
    use tokio::net::TcpListener;

    /// Serves `router` on an ephemeral local port and returns its base URL.
    pub async fn spawn_mock(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock server");
        });
        format!("http://{addr}")
    }
}
