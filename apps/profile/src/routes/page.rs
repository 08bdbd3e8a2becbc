//! Handlers for the rendered page and its per-section JSON views.
//! None of these fail on collaborator errors; sections degrade to fallbacks.

use axum::{extract::State, response::Html, Json};
use chrono::Utc;

use crate::render::{self, build_page, render_page, ProfilePage};
use crate::sections::account::AccountHoldings;
use crate::sections::activity::ActivityItem;
use crate::sections::contributions::ContributionGrid;
use crate::sections::repos::RepoSummary;
use crate::sections::transactions::TxnItem;
use crate::sections::Section;
use crate::state::AppState;

async fn compose(state: &AppState) -> ProfilePage {
    build_page(
        state.github.as_ref(),
        state.chain.as_ref(),
        &state.config,
        Utc::now(),
    )
    .await
}

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Html<String> {
    let page = compose(&state).await;
    Html(render_page(&page, &state.profile))
}

/// GET /api/v1/profile
pub async fn handle_profile(State(state): State<AppState>) -> Json<ProfilePage> {
    Json(compose(&state).await)
}

/// GET /api/v1/github/repos
pub async fn handle_repos(State(state): State<AppState>) -> Json<Section<RepoSummary>> {
    Json(render::load_repos(state.github.as_ref(), Utc::now()).await)
}

/// GET /api/v1/github/activity
pub async fn handle_activity(
    State(state): State<AppState>,
) -> Json<Section<Vec<ActivityItem>>> {
    Json(render::load_activity(state.github.as_ref(), Utc::now()).await.feed)
}

/// GET /api/v1/github/contributions
pub async fn handle_contributions(State(state): State<AppState>) -> Json<ContributionGrid> {
    Json(render::load_activity(state.github.as_ref(), Utc::now()).await.grid)
}

/// GET /api/v1/chain/account
pub async fn handle_account(State(state): State<AppState>) -> Json<Section<AccountHoldings>> {
    Json(render::load_account(state.chain.as_ref()).await)
}

/// GET /api/v1/chain/transactions
pub async fn handle_transactions(
    State(state): State<AppState>,
) -> Json<Section<Vec<TxnItem>>> {
    Json(render::load_transactions(state.chain.as_ref(), &state.config, Utc::now()).await)
}
