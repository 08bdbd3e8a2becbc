use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry from `GET /users/{handle}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

/// One entry from `GET /users/{handle}/events/public`.
/// The payload shape depends on `event_type`, so it stays as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub event_type: String,
    pub repo: EventRepo,
    #[serde(default)]
    pub payload: Value,
    pub created_at: DateTime<Utc>,
}

impl EventRecord {
    /// Number of commits carried by a push event. Falls back to the payload's
    /// `size` field, then to 1, since GitHub trims the commit list on large pushes.
    pub fn commit_count(&self) -> u64 {
        if let Some(commits) = self.payload.get("commits").and_then(Value::as_array) {
            if !commits.is_empty() {
                return commits.len() as u64;
            }
        }
        self.payload
            .get("size")
            .and_then(Value::as_u64)
            .unwrap_or(1)
    }

    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str)
    }
}
