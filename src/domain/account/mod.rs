//! Account domain — account metadata, cash balances and the combined summary.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

/// Account metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub currency_code: String,
    pub id: i64,
}

/// Cash balances, in the account currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCash {
    #[serde(default)]
    pub blocked: Option<f64>,
    pub free: f64,
    pub invested: f64,
    #[serde(default)]
    pub pie_cash: Option<f64>,
    #[serde(default)]
    pub ppl: Option<f64>,
    pub result: f64,
    pub total: f64,
}

/// Account snapshot: metadata plus cash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    #[serde(flatten)]
    pub info: AccountInfo,
    pub cash: AccountCash,
}

impl AccountSummary {
    pub fn id(&self) -> i64 {
        self.info.id
    }

    pub fn currency_code(&self) -> &str {
        &self.info.currency_code
    }
}
