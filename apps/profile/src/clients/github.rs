use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use super::{build_http_client, fetch_json, GithubSource, SourceError};
use crate::config::Config;
use crate::models::github::{EventRecord, RepositoryRecord};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const PAGE_SIZE: u32 = 100;

/// Read-only client for the GitHub REST API, scoped to one user handle.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
    handle: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(
        base_url: impl Into<String>,
        handle: impl Into<String>,
        token: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            base_url: base_url.into(),
            handle: handle.into(),
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.github_api_url.clone(),
            config.github_handle.clone(),
            config.github_token.clone(),
            config.http_timeout_secs,
        )
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header("accept", GITHUB_ACCEPT);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl GithubSource for GithubClient {
    async fn repos(&self) -> Result<Vec<RepositoryRecord>, SourceError> {
        let path = format!(
            "/users/{}/repos?per_page={PAGE_SIZE}&sort=pushed",
            self.handle
        );
        fetch_json(self.get(&path)).await
    }

    async fn events(&self) -> Result<Vec<EventRecord>, SourceError> {
        let path = format!("/users/{}/events/public?per_page={PAGE_SIZE}", self.handle);
        fetch_json(self.get(&path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::test_support::spawn_mock;
    use axum::{http::HeaderMap, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    fn client(base: String) -> GithubClient {
        GithubClient::new(base, "corvid-agent", None, 5).unwrap()
    }

    #[tokio::test]
    async fn test_repos_decodes_array() {
        let router = Router::new().route(
            "/users/corvid-agent/repos",
            get(|| async {
                Json(json!([
                    {
                        "name": "agent-profile",
                        "html_url": "https://github.com/corvid-agent/agent-profile",
                        "description": "Public agent profile page",
                        "language": "HTML",
                        "stargazers_count": 2,
                        "fork": false,
                        "pushed_at": "2025-01-15T00:00:00Z"
                    }
                ]))
            }),
        );
        let repos = client(spawn_mock(router).await).repos().await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "agent-profile");
    }

    #[tokio::test]
    async fn test_events_hits_public_events_path() {
        let router = Router::new().route(
            "/users/corvid-agent/events/public",
            get(|| async {
                Json(json!([{
                    "type": "CreateEvent",
                    "repo": { "name": "corvid-agent/corvid-agent-chat" },
                    "payload": { "ref_type": "branch" },
                    "created_at": "2025-01-15T00:00:00Z"
                }]))
            }),
        );
        let events = client(spawn_mock(router).await).events().await.unwrap();
        assert_eq!(events[0].event_type, "CreateEvent");
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let router = Router::new().route(
            "/users/corvid-agent/repos",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
        );
        let err = client(spawn_mock(router).await).repos().await.unwrap_err();
        assert!(matches!(err, SourceError::Status { status: 500, .. }), "{err}");
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let router = Router::new().route(
            "/users/corvid-agent/repos",
            get(|| async { "not json" }),
        );
        let err = client(spawn_mock(router).await).repos().await.unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)), "{err}");
    }

    #[tokio::test]
    async fn test_token_is_sent_as_bearer() {
        let router = Router::new().route(
            "/users/corvid-agent/repos",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                if auth == "Bearer secret" {
                    (StatusCode::OK, Json(json!([])))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({ "message": auth })))
                }
            }),
        );
        let base = spawn_mock(router).await;
        let authed = GithubClient::new(base, "corvid-agent", Some("secret".into()), 5).unwrap();
        assert!(authed.repos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        // Port 9 (discard) is not served locally.
        let err = client("http://127.0.0.1:9".to_string())
            .repos()
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Http(_)), "{err}");
    }
}
