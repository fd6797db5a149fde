//! Instrument domain — tradable instrument catalog, exchanges and trading schedules.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::Ticker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Short instrument reference embedded in orders and dividends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub ticker: Ticker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentType {
    Cryptocurrency,
    #[serde(rename = "ETF")]
    Etf,
    Forex,
    Futures,
    Index,
    Stock,
    Warrant,
    Crypto,
    #[serde(rename = "CVR")]
    Cvr,
    Corpact,
    /// A value this client does not recognise.
    #[serde(other)]
    Unknown,
}

/// An instrument available for trading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradableInstrument {
    pub ticker: Ticker,
    #[serde(rename = "type")]
    pub instrument_type: InstrumentType,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub isin: Option<String>,
    pub currency_code: String,
    #[serde(default)]
    pub max_open_quantity: Option<f64>,
    #[serde(default)]
    pub extended_hours: bool,
    #[serde(default)]
    pub working_schedule_id: Option<i64>,
    #[serde(default)]
    pub added_on: Option<DateTime<Utc>>,
}

/// An exchange and its trading schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub working_schedules: Vec<WorkingSchedule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingSchedule {
    pub id: i64,
    #[serde(default)]
    pub time_events: Vec<TimeEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEvent {
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: TimeEventType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeEventType {
    Open,
    Close,
    BreakStart,
    BreakEnd,
    PreMarketOpen,
    AfterHoursOpen,
    AfterHoursClose,
    OvernightOpen,
    #[serde(other)]
    Unknown,
}

impl WorkingSchedule {
    /// Time events of `event_type`, in schedule order.
    pub fn events_of(&self, event_type: TimeEventType) -> impl Iterator<Item = &TimeEvent> {
        self.time_events
            .iter()
            .filter(move |e| e.event_type == event_type)
    }
}

impl Exchange {
    pub fn schedule(&self, id: i64) -> Option<&WorkingSchedule> {
        self.working_schedules.iter().find(|s| s.id == id)
    }
}
