//! Report domain — CSV export requests and their status.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which record kinds an export contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDataIncluded {
    pub include_dividends: bool,
    pub include_interest: bool,
    pub include_orders: bool,
    pub include_transactions: bool,
}

impl Default for ReportDataIncluded {
    fn default() -> Self {
        Self::all()
    }
}

impl ReportDataIncluded {
    pub fn all() -> Self {
        Self {
            include_dividends: true,
            include_interest: true,
            include_orders: true,
            include_transactions: true,
        }
    }
}

/// Body for `POST /equity/history/exports`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub data_included: ReportDataIncluded,
    pub time_from: DateTime<Utc>,
    pub time_to: DateTime<Utc>,
}

impl ReportRequest {
    pub fn new(time_from: DateTime<Utc>, time_to: DateTime<Utc>) -> Self {
        Self {
            data_included: ReportDataIncluded::all(),
            time_from,
            time_to,
        }
    }

    pub fn data_included(mut self, data_included: ReportDataIncluded) -> Self {
        self.data_included = data_included;
        self
    }
}

/// Acknowledgement of a queued export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnqueuedReport {
    pub report_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    Queued,
    Processing,
    Running,
    Canceled,
    Failed,
    Finished,
    /// A value this client does not recognise.
    #[serde(other)]
    Unknown,
}

impl ReportStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Canceled | Self::Failed | Self::Finished)
    }
}

/// An export and its processing status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub report_id: i64,
    pub status: ReportStatus,
    pub data_included: ReportDataIncluded,
    /// Present once the export has finished.
    #[serde(default)]
    pub download_link: Option<String>,
    pub time_from: DateTime<Utc>,
    pub time_to: DateTime<Utc>,
}
