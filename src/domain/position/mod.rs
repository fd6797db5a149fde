//! Position domain — open positions in the portfolio.

#[cfg(feature = "http")]
pub mod client;

use crate::http::QueryParams;
use crate::shared::Ticker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub ticker: Ticker,
    pub quantity: f64,
    pub average_price: f64,
    pub current_price: f64,
    pub ppl: f64,
    #[serde(default)]
    pub fx_ppl: Option<f64>,
    #[serde(default)]
    pub initial_fill_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub frontend: Option<String>,
    #[serde(default)]
    pub max_buy: Option<f64>,
    #[serde(default)]
    pub max_sell: Option<f64>,
    #[serde(default)]
    pub pie_quantity: Option<f64>,
}

impl Position {
    /// Market value at the current price.
    pub fn market_value(&self) -> f64 {
        self.quantity * self.current_price
    }
}

/// Valuation of a position in the account currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionWalletImpact {
    pub currency: String,
    pub current_value: f64,
    pub fx_impact: Option<f64>,
    pub total_cost: f64,
    pub unrealized_profit_loss: f64,
}

/// Filters for the positions endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionsOptions {
    pub ticker: Option<Ticker>,
}

impl PositionsOptions {
    pub fn ticker(ticker: impl Into<Ticker>) -> Self {
        Self {
            ticker: Some(ticker.into()),
        }
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new().with("ticker", self.ticker.clone())
    }
}
