use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Subset of the algod `GET /v2/accounts/{address}` response.
/// Holdings are only counted, so their element shape is left untyped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AccountSummary {
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub min_balance: u64,
    #[serde(default)]
    pub assets: Vec<Value>,
    #[serde(default)]
    pub apps_local_state: Vec<Value>,
    #[serde(default)]
    pub created_apps: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentTransaction {
    #[serde(default)]
    pub amount: u64,
    pub receiver: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApplicationTransaction {
    #[serde(default)]
    pub application_id: u64,
}

/// One entry of the indexer's `GET /v2/accounts/{address}/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransactionRecord {
    pub id: String,
    pub sender: String,
    #[serde(default)]
    pub payment_transaction: Option<PaymentTransaction>,
    #[serde(default)]
    pub application_transaction: Option<ApplicationTransaction>,
    #[serde(default)]
    pub round_time: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPage {
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}
