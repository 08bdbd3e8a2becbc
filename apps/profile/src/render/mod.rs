//! Page renderer: resolves every data section concurrently and composes the
//! profile page view model.
//!
//! Each fetch owns its own section. A failing collaborator only flips its own
//! sections to `Fallback`; nothing here returns an error.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::clients::{ChainSource, GithubSource};
use crate::config::Config;
use crate::format::PLACEHOLDER;
use crate::sections::account::{summarize_account, AccountHoldings};
use crate::sections::activity::{format_activity, ActivityItem};
use crate::sections::contributions::{build_grid, ContributionGrid};
use crate::sections::repos::{summarize_repos, RepoSummary};
use crate::sections::transactions::{format_transactions, TxnItem};
use crate::sections::Section;

pub mod html;

pub use html::render_page;

/// Values for the four stat boxes, already reduced to display text.
#[derive(Debug, Clone, Serialize)]
pub struct StatsRow {
    pub repos: String,
    pub stars: String,
    pub packages: String,
    pub balance: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfilePage {
    pub generated_at: DateTime<Utc>,
    pub stats: StatsRow,
    pub repos: Section<RepoSummary>,
    pub activity: Section<Vec<ActivityItem>>,
    pub contributions: ContributionGrid,
    pub account: Section<AccountHoldings>,
    pub transactions: Section<Vec<TxnItem>>,
}

/// The activity feed and the contribution grid share one event fetch.
pub struct ActivityData {
    pub feed: Section<Vec<ActivityItem>>,
    pub grid: ContributionGrid,
}

pub async fn load_repos(github: &dyn GithubSource, now: DateTime<Utc>) -> Section<RepoSummary> {
    Section::resolve("repositories", github.repos().await, |records| {
        summarize_repos(&records, now)
    })
}

pub async fn load_activity(github: &dyn GithubSource, now: DateTime<Utc>) -> ActivityData {
    let events = github.events().await;
    let grid = build_grid(events.as_deref().unwrap_or_default(), now.date_naive());
    let feed = Section::resolve("activity", events, |events| format_activity(&events, now));
    ActivityData { feed, grid }
}

pub async fn load_account(chain: &dyn ChainSource) -> Section<AccountHoldings> {
    Section::resolve("account", chain.account().await, |account| {
        summarize_account(&account)
    })
}

pub async fn load_transactions(
    chain: &dyn ChainSource,
    config: &Config,
    now: DateTime<Utc>,
) -> Section<Vec<TxnItem>> {
    Section::resolve("transactions", chain.transactions().await, |txns| {
        format_transactions(&txns, &config.wallet_address, &config.explorer_url, now)
    })
}

/// Issues all four collaborator fetches at once and waits for every one of
/// them to settle.
pub async fn build_page(
    github: &dyn GithubSource,
    chain: &dyn ChainSource,
    config: &Config,
    now: DateTime<Utc>,
) -> ProfilePage {
    let (repos, activity, account, transactions) = tokio::join!(
        load_repos(github, now),
        load_activity(github, now),
        load_account(chain),
        load_transactions(chain, config, now),
    );

    if repos.is_fallback() && account.is_fallback() {
        warn!("Both collaborators unavailable; page rendered from fallbacks only");
    }
    debug!(
        "Page composed: {} owned repos, {} commits in grid",
        repos.populated().map(|r| r.owned).unwrap_or(0),
        activity.grid.total_commits
    );

    let stats = stats_row(&repos, &account, config);

    ProfilePage {
        generated_at: now,
        stats,
        repos,
        activity: activity.feed,
        contributions: activity.grid,
        account,
        transactions,
    }
}

fn stats_row(
    repos: &Section<RepoSummary>,
    account: &Section<AccountHoldings>,
    config: &Config,
) -> StatsRow {
    let (repos_text, stars_text) = match repos.populated() {
        Some(summary) => (summary.total.to_string(), summary.stars.to_string()),
        None => (config.repos_fallback.clone(), PLACEHOLDER.to_string()),
    };
    StatsRow {
        repos: repos_text,
        stars: stars_text,
        packages: config.packages_count.to_string(),
        balance: account
            .populated()
            .map(|a| a.balance.clone())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};
    use serde_json::json;

    use crate::clients::{ChainSource, GithubSource, SourceError};
    use crate::config::DEFAULT_WALLET_ADDRESS;
    use crate::models::algorand::{AccountSummary, TransactionPage, TransactionRecord};
    use crate::models::github::{EventRecord, RepositoryRecord};

    pub struct FakeGithub {
        pub fail: bool,
        pub now: DateTime<Utc>,
    }

    pub struct FakeChain {
        pub fail: bool,
        pub now: DateTime<Utc>,
    }

    fn server_error() -> SourceError {
        SourceError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        }
    }

    #[async_trait]
    impl GithubSource for FakeGithub {
        async fn repos(&self) -> Result<Vec<RepositoryRecord>, SourceError> {
            if self.fail {
                return Err(server_error());
            }
            Ok(serde_json::from_value(json!([
                { "name": "agent-profile", "html_url": "https://github.com/corvid-agent/agent-profile",
                  "description": "Public agent profile page", "language": "HTML",
                  "stargazers_count": 2, "fork": false, "pushed_at": "2025-01-15T00:00:00Z" },
                { "name": "corvid-agent-chat", "html_url": "https://github.com/corvid-agent/corvid-agent-chat",
                  "description": "Encrypted on-chain messaging", "language": "TypeScript",
                  "stargazers_count": 5, "fork": false, "pushed_at": "2025-01-14T00:00:00Z" },
                { "name": "algo-explorer", "html_url": "https://github.com/corvid-agent/algo-explorer",
                  "description": "Algorand block explorer", "language": "JavaScript",
                  "stargazers_count": 0, "fork": false, "pushed_at": "2025-01-13T00:00:00Z" },
                { "name": "forked-repo", "html_url": "https://github.com/corvid-agent/forked-repo",
                  "description": "A forked repo", "language": "Python",
                  "stargazers_count": 0, "fork": true, "pushed_at": "2025-01-10T00:00:00Z" }
            ]))?)
        }

        async fn events(&self) -> Result<Vec<EventRecord>, SourceError> {
            if self.fail {
                return Err(server_error());
            }
            Ok(serde_json::from_value(json!([
                { "type": "PushEvent", "repo": { "name": "corvid-agent/agent-profile" },
                  "payload": { "commits": [{ "sha": "abc123" }, { "sha": "def456" }] },
                  "created_at": self.now.to_rfc3339() },
                { "type": "CreateEvent", "repo": { "name": "corvid-agent/corvid-agent-chat" },
                  "payload": { "ref_type": "branch" },
                  "created_at": (self.now - Duration::hours(1)).to_rfc3339() },
                { "type": "PullRequestEvent", "repo": { "name": "corvid-agent/algo-explorer" },
                  "payload": { "action": "opened" },
                  "created_at": (self.now - Duration::hours(2)).to_rfc3339() }
            ]))?)
        }
    }

    #[async_trait]
    impl ChainSource for FakeChain {
        async fn account(&self) -> Result<AccountSummary, SourceError> {
            if self.fail {
                return Err(server_error());
            }
            Ok(serde_json::from_value(json!({
                "amount": 12345678,
                "min-balance": 100000,
                "assets": [{ "asset-id": 1 }, { "asset-id": 2 }],
                "apps-local-state": [{ "id": 1 }],
                "created-apps": [{ "id": 100 }, { "id": 101 }]
            }))?)
        }

        async fn transactions(&self) -> Result<Vec<TransactionRecord>, SourceError> {
            if self.fail {
                return Err(server_error());
            }
            let t = self.now.timestamp();
            let page: TransactionPage = serde_json::from_value(json!({
                "transactions": [
                    { "id": "TXID_SEND_1", "sender": DEFAULT_WALLET_ADDRESS,
                      "payment-transaction": { "amount": 500000,
                        "receiver": "ABCDEF1234567890ABCDEF1234567890ABCDEF1234567890ABCDEF12" },
                      "round-time": t - 3600 },
                    { "id": "TXID_RECV_1",
                      "sender": "XYZABC1234567890XYZABC1234567890XYZABC1234567890XYZABC12",
                      "payment-transaction": { "amount": 1000000, "receiver": DEFAULT_WALLET_ADDRESS },
                      "round-time": t - 7200 },
                    { "id": "TXID_APP_1", "sender": DEFAULT_WALLET_ADDRESS,
                      "application-transaction": { "application-id": 123 },
                      "round-time": t - 10800 }
                ]
            }))?;
            Ok(page.transactions)
        }
    }
}
