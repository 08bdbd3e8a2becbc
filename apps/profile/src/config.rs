use anyhow::{Context, Result};

pub const DEFAULT_GITHUB_HANDLE: &str = "corvid-agent";
pub const DEFAULT_WALLET_ADDRESS: &str =
    "WGSHC4TYKYBS6EX5V5E377BQDLKWIIPBCFOLZQZIXCKHFIEKRPBFOMW25A";

/// Service configuration loaded from environment variables.
/// Every variable has a default; only malformed numeric values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_handle: String,
    pub wallet_address: String,
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub algod_api_url: String,
    pub indexer_api_url: String,
    pub explorer_url: String,
    /// Root of the sibling sites linked from the nav bar and footer.
    pub site_url: String,
    /// Shown in the Packages stat box; there is no live source for it.
    pub packages_count: u32,
    /// Shown in the Repositories stat box when GitHub cannot be reached.
    pub repos_fallback: String,
    pub txn_limit: u32,
    pub http_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_handle: DEFAULT_GITHUB_HANDLE.to_string(),
            wallet_address: DEFAULT_WALLET_ADDRESS.to_string(),
            github_api_url: "https://api.github.com".to_string(),
            github_token: None,
            algod_api_url: "https://mainnet-api.4160.nodely.dev".to_string(),
            indexer_api_url: "https://mainnet-idx.4160.nodely.dev".to_string(),
            explorer_url: "https://corvid-agent.github.io/algo-explorer".to_string(),
            site_url: "https://corvid-agent.github.io".to_string(),
            packages_count: 5,
            repos_fallback: "49+".to_string(),
            txn_limit: 10,
            http_timeout_secs: 10,
            port: 4003,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            github_handle: env_or("PROFILE_GITHUB_HANDLE", defaults.github_handle),
            wallet_address: env_or("PROFILE_WALLET_ADDRESS", defaults.wallet_address),
            github_api_url: trim_url(env_or("GITHUB_API_URL", defaults.github_api_url)),
            github_token: std::env::var("GITHUB_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            algod_api_url: trim_url(env_or("ALGOD_API_URL", defaults.algod_api_url)),
            indexer_api_url: trim_url(env_or("INDEXER_API_URL", defaults.indexer_api_url)),
            explorer_url: trim_url(env_or("EXPLORER_URL", defaults.explorer_url)),
            site_url: trim_url(env_or("PROFILE_SITE_URL", defaults.site_url)),
            packages_count: parse_env("PROFILE_PACKAGES_COUNT", defaults.packages_count)?,
            repos_fallback: env_or("PROFILE_REPOS_FALLBACK", defaults.repos_fallback),
            txn_limit: parse_env("PROFILE_TXN_LIMIT", defaults.txn_limit)?,
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            port: parse_env("PORT", defaults.port)?,
            rust_log: env_or("RUST_LOG", defaults.rust_log),
        })
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_public_endpoints() {
        let config = Config::default();
        assert_eq!(config.github_handle, "corvid-agent");
        assert_eq!(config.repos_fallback, "49+");
        assert_eq!(config.packages_count, 5);
        assert!(config.algod_api_url.contains("mainnet-api"));
        assert!(config.indexer_api_url.contains("mainnet-idx"));
    }

    #[test]
    fn test_trim_url_strips_trailing_slashes() {
        assert_eq!(
            trim_url("https://api.github.com//".to_string()),
            "https://api.github.com"
        );
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("PROFILE_TEST_PARSE_GARBAGE", "abc");
        let parsed = parse_env::<u16>("PROFILE_TEST_PARSE_GARBAGE", 1);
        assert!(parsed.is_err());
        std::env::remove_var("PROFILE_TEST_PARSE_GARBAGE");
    }

    #[test]
    fn test_parse_env_missing_uses_default() {
        let parsed = parse_env::<u32>("PROFILE_TEST_PARSE_MISSING", 7).unwrap();
        assert_eq!(parsed, 7);
    }
}
