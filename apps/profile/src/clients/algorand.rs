use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use super::{build_http_client, fetch_json, ChainSource, SourceError};
use crate::config::Config;
use crate::models::algorand::{AccountSummary, TransactionPage, TransactionRecord};

/// Read-only client for one Algorand account. Account state comes from an algod
/// node; transaction history comes from an indexer.
#[derive(Clone)]
pub struct AlgorandClient {
    client: Client,
    algod_url: String,
    indexer_url: String,
    address: String,
    txn_limit: u32,
}

impl AlgorandClient {
    pub fn new(
        algod_url: impl Into<String>,
        indexer_url: impl Into<String>,
        address: impl Into<String>,
        txn_limit: u32,
        timeout_secs: u64,
    ) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            algod_url: algod_url.into(),
            indexer_url: indexer_url.into(),
            address: address.into(),
            txn_limit,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.algod_api_url.clone(),
            config.indexer_api_url.clone(),
            config.wallet_address.clone(),
            config.txn_limit,
            config.http_timeout_secs,
        )
    }
}

#[async_trait]
impl ChainSource for AlgorandClient {
    async fn account(&self) -> Result<AccountSummary, SourceError> {
        let url = format!("{}/v2/accounts/{}", self.algod_url, self.address);
        fetch_json(self.client.get(url)).await
    }

    async fn transactions(&self) -> Result<Vec<TransactionRecord>, SourceError> {
        let url = format!(
            "{}/v2/accounts/{}/transactions?limit={}",
            self.indexer_url, self.address, self.txn_limit
        );
        let page: TransactionPage = fetch_json(self.client.get(url)).await?;
        Ok(page.transactions)
    }
}
