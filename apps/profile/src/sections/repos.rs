use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::format::relative_time;
use crate::models::github::RepositoryRecord;

pub const NO_DESCRIPTION: &str = "No description provided";

#[derive(Debug, Clone, Serialize)]
pub struct RepoItem {
    pub name: String,
    pub url: String,
    pub description: String,
    pub language: Option<String>,
    pub stars: u64,
    pub updated: Option<String>,
}

/// Counts derived from one repository listing.
///
/// `total` and `stars` cover every fetched record, forks included; `items`
/// holds only owned repositories, in fetch order.
#[derive(Debug, Clone, Serialize)]
pub struct RepoSummary {
    pub total: usize,
    pub owned: usize,
    pub stars: u64,
    pub items: Vec<RepoItem>,
}

impl RepoSummary {
    pub fn owned_label(&self) -> String {
        format!("{} owned", self.owned)
    }
}

pub fn summarize_repos(records: &[RepositoryRecord], now: DateTime<Utc>) -> RepoSummary {
    let stars = records.iter().map(|r| r.stargazers_count).sum();

    let items: Vec<RepoItem> = records
        .iter()
        .filter(|r| !r.fork)
        .map(|r| RepoItem {
            name: r.name.clone(),
            url: r.html_url.clone(),
            description: r
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            language: r.language.clone().filter(|l| !l.is_empty()),
            stars: r.stargazers_count,
            updated: r.pushed_at.map(|t| relative_time(t, now)),
        })
        .collect();

    RepoSummary {
        total: records.len(),
        owned: items.len(),
        stars,
        items,
    }
}
