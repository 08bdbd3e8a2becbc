mod clients;
mod config;
mod errors;
mod format;
mod models;
mod profile;
mod render;
mod routes;
mod sections;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clients::{AlgorandClient, GithubClient};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting agent profile v{}", env!("CARGO_PKG_VERSION"));

    let github = GithubClient::from_config(&config)?;
    info!(
        "GitHub source: {} (user {}, token: {})",
        config.github_api_url,
        config.github_handle,
        if config.github_token.is_some() { "yes" } else { "no" }
    );

    let chain = AlgorandClient::from_config(&config)?;
    info!(
        "Algorand source: algod {} / indexer {} (wallet {})",
        config.algod_api_url, config.indexer_api_url, config.wallet_address
    );

    let state = AppState::new(config.clone(), Arc::new(github), Arc::new(chain));

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
