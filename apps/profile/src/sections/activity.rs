use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::format::{plural, relative_time};
use crate::models::github::EventRecord;

pub const MAX_ACTIVITY_ITEMS: usize = 12;

#[derive(Debug, Clone, Serialize)]
pub struct ActivityItem {
    pub event_type: String,
    /// Verb phrase preceding the repository name, e.g. "Pushed 2 commits to".
    pub action: String,
    pub repo: String,
    pub time: String,
}

/// Formats the newest events, in delivered order, capped at [`MAX_ACTIVITY_ITEMS`].
pub fn format_activity(events: &[EventRecord], now: DateTime<Utc>) -> Vec<ActivityItem> {
    events
        .iter()
        .take(MAX_ACTIVITY_ITEMS)
        .map(|event| ActivityItem {
            event_type: event.event_type.clone(),
            action: describe(event),
            repo: short_repo_name(&event.repo.name).to_string(),
            time: relative_time(event.created_at, now),
        })
        .collect()
}

fn describe(event: &EventRecord) -> String {
    match event.event_type.as_str() {
        "PushEvent" => format!("Pushed {} to", plural(event.commit_count(), "commit")),
        "CreateEvent" => format!(
            "Created {} in",
            event.payload_str("ref_type").unwrap_or("repository")
        ),
        "DeleteEvent" => format!("Deleted {} in", event.payload_str("ref_type").unwrap_or("ref")),
        "PullRequestEvent" => format!(
            "{} pull request in",
            capitalize(event.payload_str("action").unwrap_or("updated"))
        ),
        "IssuesEvent" => format!(
            "{} issue in",
            capitalize(event.payload_str("action").unwrap_or("updated"))
        ),
        "IssueCommentEvent" => "Commented on issue in".to_string(),
        "PullRequestReviewEvent" => "Reviewed pull request in".to_string(),
        "WatchEvent" => "Starred".to_string(),
        "ForkEvent" => "Forked".to_string(),
        "ReleaseEvent" => "Published release in".to_string(),
        other => other.strip_suffix("Event").unwrap_or(other).to_string(),
    }
}

/// "owner/name" -> "name"
fn short_repo_name(full: &str) -> &str {
    full.rsplit_once('/').map(|(_, name)| name).unwrap_or(full)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
