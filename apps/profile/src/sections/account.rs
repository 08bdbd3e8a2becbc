use serde::Serialize;

use crate::format::format_micro_algos;
use crate::models::algorand::AccountSummary;

/// Display-ready holdings for the configured wallet.
#[derive(Debug, Clone, Serialize)]
pub struct AccountHoldings {
    pub balance_micro: u64,
    pub balance: String,
    pub min_balance: String,
    pub assets: usize,
    pub apps_opted_in: usize,
    pub apps_created: usize,
}

pub fn summarize_account(account: &AccountSummary) -> AccountHoldings {
    AccountHoldings {
        balance_micro: account.amount,
        balance: format_micro_algos(account.amount),
        min_balance: format_micro_algos(account.min_balance),
        assets: account.assets.len(),
        apps_opted_in: account.apps_local_state.len(),
        apps_created: account.created_apps.len(),
    }
}
