use std::sync::Arc;

use crate::clients::{ChainSource, GithubSource};
use crate::config::Config;
use crate::profile::ProfileContent;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Repository/event source. Default: `GithubClient` against the public API.
    pub github: Arc<dyn GithubSource>,
    /// Account/transaction source. Default: `AlgorandClient` against nodely mainnet.
    pub chain: Arc<dyn ChainSource>,
    /// Built once at startup; never depends on network state.
    pub profile: Arc<ProfileContent>,
}

impl AppState {
    pub fn new(
        config: Config,
        github: Arc<dyn GithubSource>,
        chain: Arc<dyn ChainSource>,
    ) -> Self {
        let profile = Arc::new(ProfileContent::from_config(&config));
        Self {
            config,
            github,
            chain,
            profile,
        }
    }
}
