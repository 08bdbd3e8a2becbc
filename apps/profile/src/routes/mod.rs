pub mod health;
pub mod page;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/profile", get(page::handle_profile))
        // GitHub-backed sections
        .route("/api/v1/github/repos", get(page::handle_repos))
        .route("/api/v1/github/activity", get(page::handle_activity))
        .route(
            "/api/v1/github/contributions",
            get(page::handle_contributions),
        )
        // Algorand-backed sections
        .route("/api/v1/chain/account", get(page::handle_account))
        .route(
            "/api/v1/chain/transactions",
            get(page::handle_transactions),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::render::fakes::{FakeChain, FakeGithub};

    fn router(github_fails: bool, chain_fails: bool) -> Router {
        let now = Utc::now();
        let state = AppState::new(
            Config::default(),
            Arc::new(FakeGithub {
                fail: github_fails,
                now,
            }),
            Arc::new(FakeChain {
                fail: chain_fails,
                now,
            }),
        );
        build_router(state)
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = get_body(router, uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(router(false, false), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_serves_html() {
        let (status, body) = get_body(router(false, false), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("id=\"stat-repos\">4<"));
    }

    #[tokio::test]
    async fn test_index_survives_both_collaborators_failing() {
        let (status, body) = get_body(router(true, true), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("id=\"stat-repos\">49+<"));
        assert!(body.contains("id=\"algo-balance\">--<"));
    }

    #[tokio::test]
    async fn test_profile_json() {
        let (status, body) = get_json(router(false, true), "/api/v1/profile").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["stars"], "7");
        assert_eq!(body["stats"]["balance"], "--");
        assert_eq!(body["repos"]["state"], "populated");
        assert_eq!(body["account"]["state"], "fallback");
        assert_eq!(body["contributions"]["weeks"].as_array().unwrap().len(), 52);
    }

    #[tokio::test]
    async fn test_section_endpoints() {
        let (_, repos) = get_json(router(false, false), "/api/v1/github/repos").await;
        assert_eq!(repos["data"]["owned"], 3);

        let (_, activity) = get_json(router(false, false), "/api/v1/github/activity").await;
        assert_eq!(activity["data"].as_array().unwrap().len(), 3);

        let (_, grid) = get_json(router(true, false), "/api/v1/github/contributions").await;
        assert_eq!(grid["weeks"].as_array().unwrap().len(), 52);

        let (_, account) = get_json(router(false, false), "/api/v1/chain/account").await;
        assert_eq!(account["data"]["balance"], "12.3457");

        let (_, txns) = get_json(router(false, false), "/api/v1/chain/transactions").await;
        assert_eq!(txns["data"][0]["kind"], "Sent");
        assert_eq!(txns["data"][2]["amount"], "app");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_json() {
        let (status, body) = get_json(router(false, false), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
