//! History domain — filled orders, dividends and cash transactions.
//!
//! All three endpoints are cursor-paginated and return a [`Page`](crate::shared::Page).

#[cfg(feature = "http")]
pub mod client;

use crate::domain::instrument::Instrument;
use crate::domain::order::Order;
use crate::http::QueryParams;
use crate::shared::Ticker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Orders ──────────────────────────────────────────────────────────────────

/// A historical order together with its fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalOrder {
    pub order: Order,
    #[serde(default)]
    pub fill: Option<Fill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub id: i64,
    pub filled_at: DateTime<Utc>,
    pub price: f64,
    pub quantity: f64,
    #[serde(default)]
    pub trading_method: Option<String>,
    #[serde(rename = "type", default)]
    pub fill_type: Option<String>,
    #[serde(default)]
    pub wallet_impact: Option<FillWalletImpact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillWalletImpact {
    pub currency: String,
    #[serde(default)]
    pub fx_rate: Option<f64>,
    pub net_value: f64,
    #[serde(default)]
    pub realised_profit_loss: Option<f64>,
    #[serde(default)]
    pub taxes: Vec<Tax>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tax {
    #[serde(default)]
    pub charged_at: Option<DateTime<Utc>>,
    pub currency: String,
    pub name: String,
    pub quantity: f64,
}

// ─── Dividends ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryDividendItem {
    pub ticker: Ticker,
    pub amount: f64,
    #[serde(default)]
    pub amount_in_euro: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub gross_amount_per_share: Option<f64>,
    #[serde(default)]
    pub instrument: Option<Instrument>,
    pub paid_on: DateTime<Utc>,
    pub quantity: f64,
    pub reference: String,
    #[serde(default)]
    pub ticker_currency: Option<String>,
    #[serde(rename = "type", default)]
    pub dividend_type: Option<String>,
}

// ─── Transactions ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryTransactionItem {
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
    pub date_time: DateTime<Utc>,
    pub reference: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
}

// ─── Options ─────────────────────────────────────────────────────────────────

/// Query options for historical orders. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryOrdersOptions {
    pub cursor: Option<i64>,
    pub ticker: Option<Ticker>,
    pub limit: Option<i32>,
}

/// Query options for dividends. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryDividendsOptions {
    pub cursor: Option<i64>,
    pub ticker: Option<Ticker>,
    pub limit: Option<i32>,
}

/// Query options for transactions. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryTransactionsOptions {
    pub cursor: Option<String>,
    pub time: Option<DateTime<Utc>>,
    pub limit: Option<i32>,
}

impl HistoryOrdersOptions {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("cursor", self.cursor)
            .with("ticker", self.ticker.clone())
            .with("limit", self.limit)
    }
}

impl HistoryDividendsOptions {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("cursor", self.cursor)
            .with("ticker", self.ticker.clone())
            .with("limit", self.limit)
    }
}

impl HistoryTransactionsOptions {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("cursor", self.cursor.clone())
            .with("time", self.time)
            .with("limit", self.limit)
    }
}
