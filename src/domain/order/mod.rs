//! Order domain — pending orders and order placement requests.
//!
//! Quantities are signed on requests: positive buys, negative sells.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::instrument::Instrument;
use crate::shared::serde_util::finite_f64;
use crate::shared::Ticker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Enums ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    Buy,
    Sell,
    /// A value this client does not recognise.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Local,
    Unconfirmed,
    Confirmed,
    New,
    Cancelling,
    Cancelled,
    PartiallyFilled,
    Filled,
    Rejected,
    Replacing,
    Replaced,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Whether the order can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Cancelled | Self::Filled | Self::Rejected | Self::Replaced
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStrategy {
    Quantity,
    Value,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Stop,
    Market,
    StopLimit,
    #[serde(other)]
    Unknown,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "LIMIT",
            Self::Stop => "STOP",
            Self::Market => "MARKET",
            Self::StopLimit => "STOP_LIMIT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order lifetime policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeValidity {
    /// Expires at the end of the trading day.
    #[default]
    Day,
    GoodTillCancel,
    #[serde(other)]
    Unknown,
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// An order as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub ticker: Ticker,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    #[serde(default)]
    pub side: Option<OrderSide>,
    #[serde(default)]
    pub strategy: Option<OrderStrategy>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub filled_quantity: Option<f64>,
    #[serde(default)]
    pub filled_value: Option<f64>,
    #[serde(default)]
    pub limit_price: Option<f64>,
    #[serde(default)]
    pub stop_price: Option<f64>,
    #[serde(default)]
    pub time_in_force: Option<TimeValidity>,
    #[serde(default)]
    pub extended_hours: bool,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub initiated_from: Option<String>,
    #[serde(default)]
    pub instrument: Option<Instrument>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// Body for `POST /equity/orders/market`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRequest {
    pub extended_hours: bool,
    #[serde(serialize_with = "finite_f64::serialize")]
    pub quantity: f64,
    pub ticker: Ticker,
}

impl MarketOrderRequest {
    pub fn new(ticker: impl Into<Ticker>, quantity: f64) -> Self {
        Self {
            extended_hours: false,
            quantity,
            ticker: ticker.into(),
        }
    }

    /// Allow execution outside regular trading hours.
    pub fn extended_hours(mut self, extended_hours: bool) -> Self {
        self.extended_hours = extended_hours;
        self
    }
}

/// Body for `POST /equity/orders/limit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRequest {
    #[serde(serialize_with = "finite_f64::serialize")]
    pub limit_price: f64,
    #[serde(serialize_with = "finite_f64::serialize")]
    pub quantity: f64,
    pub ticker: Ticker,
    pub time_validity: TimeValidity,
}

impl LimitOrderRequest {
    pub fn new(
        ticker: impl Into<Ticker>,
        quantity: f64,
        limit_price: f64,
        time_validity: TimeValidity,
    ) -> Self {
        Self {
            limit_price,
            quantity,
            ticker: ticker.into(),
            time_validity,
        }
    }
}

/// Body for `POST /equity/orders/stop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderRequest {
    #[serde(serialize_with = "finite_f64::serialize")]
    pub quantity: f64,
    #[serde(serialize_with = "finite_f64::serialize")]
    pub stop_price: f64,
    pub ticker: Ticker,
    pub time_validity: TimeValidity,
}

impl StopOrderRequest {
    pub fn new(
        ticker: impl Into<Ticker>,
        quantity: f64,
        stop_price: f64,
        time_validity: TimeValidity,
    ) -> Self {
        Self {
            quantity,
            stop_price,
            ticker: ticker.into(),
            time_validity,
        }
    }
}

/// Body for `POST /equity/orders/stop_limit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLimitOrderRequest {
    #[serde(serialize_with = "finite_f64::serialize")]
    pub limit_price: f64,
    #[serde(serialize_with = "finite_f64::serialize")]
    pub quantity: f64,
    #[serde(serialize_with = "finite_f64::serialize")]
    pub stop_price: f64,
    pub ticker: Ticker,
    pub time_validity: TimeValidity,
}

impl StopLimitOrderRequest {
    pub fn new(
        ticker: impl Into<Ticker>,
        quantity: f64,
        stop_price: f64,
        limit_price: f64,
        time_validity: TimeValidity,
    ) -> Self {
        Self {
            limit_price,
            quantity,
            stop_price,
            ticker: ticker.into(),
            time_validity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_market_order_request_wire_shape() {
        let req = MarketOrderRequest::new("AAPL_US_EQ", 0.5).extended_hours(true);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"extendedHours": true, "quantity": 0.5, "ticker": "AAPL_US_EQ"})
        );
    }

    #[test]
    fn test_limit_sell_has_negative_quantity() {
        let req = LimitOrderRequest::new("TSLA_US_EQ", -2.0, 250.5, TimeValidity::GoodTillCancel);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "limitPrice": 250.5,
                "quantity": -2.0,
                "ticker": "TSLA_US_EQ",
                "timeValidity": "GOOD_TILL_CANCEL"
            })
        );
    }

    #[test]
    fn test_stop_limit_request_wire_shape() {
        let req = StopLimitOrderRequest::new("VOD_LN_EQ", 10.0, 0.9, 0.85, TimeValidity::Day);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["stopPrice"], json!(0.9));
        assert_eq!(value["limitPrice"], json!(0.85));
        assert_eq!(value["timeValidity"], json!("DAY"));
    }

    #[test]
    fn test_non_finite_price_fails_to_encode() {
        let req = LimitOrderRequest::new("AAPL_US_EQ", 1.0, f64::NAN, TimeValidity::Day);
        assert!(serde_json::to_vec(&req).is_err());

        let req = MarketOrderRequest::new("AAPL_US_EQ", f64::INFINITY);
        assert!(serde_json::to_vec(&req).is_err());

        let req = StopLimitOrderRequest::new("AAPL_US_EQ", 1.0, 10.0, f64::NEG_INFINITY, TimeValidity::Day);
        assert!(serde_json::to_vec(&req).is_err());
    }

    #[test]
    fn test_order_status_terminal() {
        assert!(OrderStatus::Filled.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::New.is_terminal());
        assert!(!OrderStatus::PartiallyFilled.is_terminal());
    }

    #[test]
    fn test_order_type_wire_names() {
        let parsed: OrderType = serde_json::from_str(r#""STOP_LIMIT""#).unwrap();
        assert_eq!(parsed, OrderType::StopLimit);
        assert_eq!(OrderType::StopLimit.to_string(), "STOP_LIMIT");
    }
}
