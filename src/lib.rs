//! # Trading 212 SDK
//!
//! A typed Rust client for the Trading 212 public REST API: account inquiry,
//! order placement and cancellation, positions, instrument metadata, history
//! and CSV reports.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain records, errors, network constants, credentials
//! 2. **HTTP** — `Trading212Http` request pipeline and the query string encoder
//! 3. **High-Level Client** — `Trading212Client` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trading212_sdk::prelude::*;
//!
//! let client = Trading212Client::new(Environment::Demo, "api-key", "api-secret")?;
//!
//! let cash = client.account().cash().await?;
//! let positions = client.positions().all().await?;
//! let order = client
//!     .orders()
//!     .place_limit(&LimitOrderRequest::new("AAPL_US_EQ", 1.0, 150.0, TimeValidity::Day))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and the pagination envelope.
pub mod shared;

/// Domain modules (vertical slices): records, request/option types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Base URLs and environment selection.
pub mod network;

/// API key credentials and Basic authorization.
pub mod auth;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Request pipeline and query encoder.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `Trading212Client` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Page, Ticker};

    // Domain types — account
    pub use crate::domain::account::{AccountCash, AccountInfo, AccountSummary};

    // Domain types — orders
    pub use crate::domain::order::{
        LimitOrderRequest, MarketOrderRequest, Order, OrderSide, OrderStatus, OrderStrategy,
        OrderType, StopLimitOrderRequest, StopOrderRequest, TimeValidity,
    };

    // Domain types — positions
    pub use crate::domain::position::{Position, PositionsOptions};

    // Domain types — instruments
    pub use crate::domain::instrument::{
        Exchange, Instrument, InstrumentType, TimeEvent, TimeEventType, TradableInstrument,
        WorkingSchedule,
    };

    // Domain types — history
    pub use crate::domain::history::{
        Fill, HistoricalOrder, HistoryDividendItem, HistoryDividendsOptions,
        HistoryOrdersOptions, HistoryTransactionItem, HistoryTransactionsOptions,
    };

    // Domain types — reports
    pub use crate::domain::report::{
        EnqueuedReport, Report, ReportDataIncluded, ReportRequest, ReportStatus,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{Environment, DEMO_API_URL, LIVE_API_URL};

    // Auth
    pub use crate::auth::Credentials;

    // Query encoding
    pub use crate::http::{QueryParams, QueryValue};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AccountClient, HistoryClient, InstrumentsClient, OrdersClient, PositionsClient,
        ReportsClient, Trading212Client, Trading212ClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::Trading212Http;
}
