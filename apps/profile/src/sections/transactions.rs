use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::format::{format_micro_algos, relative_time_from_unix, truncate_address, PLACEHOLDER};
use crate::models::algorand::TransactionRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TxnKind {
    #[serde(rename = "Sent")]
    Sent,
    #[serde(rename = "Received")]
    Received,
    #[serde(rename = "App Call")]
    AppCall,
    #[serde(rename = "Other")]
    Other,
}

impl TxnKind {
    pub fn label(self) -> &'static str {
        match self {
            TxnKind::Sent => "Sent",
            TxnKind::Received => "Received",
            TxnKind::AppCall => "App Call",
            TxnKind::Other => "Other",
        }
    }

    /// CSS class carried by the amount element.
    pub fn amount_class(self) -> &'static str {
        match self {
            TxnKind::Sent => "negative",
            TxnKind::Received => "positive",
            TxnKind::AppCall | TxnKind::Other => "neutral",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TxnItem {
    pub id: String,
    pub kind: TxnKind,
    pub amount: String,
    pub peer: String,
    pub time: String,
    pub explorer_url: String,
}

/// First match wins: an outgoing payment, an incoming payment, then an
/// application call.
pub fn classify(txn: &TransactionRecord, wallet: &str) -> TxnKind {
    if let Some(payment) = &txn.payment_transaction {
        if txn.sender == wallet {
            return TxnKind::Sent;
        }
        if payment.receiver == wallet {
            return TxnKind::Received;
        }
    }
    if txn.application_transaction.is_some() {
        return TxnKind::AppCall;
    }
    TxnKind::Other
}

pub fn format_transactions(
    txns: &[TransactionRecord],
    wallet: &str,
    explorer_url: &str,
    now: DateTime<Utc>,
) -> Vec<TxnItem> {
    txns.iter()
        .map(|txn| {
            let kind = classify(txn, wallet);
            let payment_amount = txn.payment_transaction.as_ref().map(|p| p.amount);
            let (amount, peer) = match kind {
                TxnKind::Sent => (
                    format!("-{} ALGO", format_micro_algos(payment_amount.unwrap_or(0))),
                    txn.payment_transaction
                        .as_ref()
                        .map(|p| truncate_address(&p.receiver))
                        .unwrap_or_default(),
                ),
                TxnKind::Received => (
                    format!("+{} ALGO", format_micro_algos(payment_amount.unwrap_or(0))),
                    truncate_address(&txn.sender),
                ),
                TxnKind::AppCall => (
                    "app".to_string(),
                    txn.application_transaction
                        .as_ref()
                        .map(|a| format!("App #{}", a.application_id))
                        .unwrap_or_default(),
                ),
                TxnKind::Other => (PLACEHOLDER.to_string(), truncate_address(&txn.sender)),
            };
            TxnItem {
                id: txn.id.clone(),
                kind,
                amount,
                peer,
                time: relative_time_from_unix(txn.round_time, now),
                explorer_url: format!("{explorer_url}/?tx={}", txn.id),
            }
        })
        .collect()
}
