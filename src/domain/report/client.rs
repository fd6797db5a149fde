//! Reports sub-client — request and list CSV exports.

use crate::client::Trading212Client;
use crate::domain::report::{EnqueuedReport, Report, ReportRequest};
use crate::error::SdkError;
use crate::network::API_PREFIX;

pub struct Reports<'a> {
    pub(crate) client: &'a Trading212Client,
}

impl<'a> Reports<'a> {
    /// Queue a CSV export for the requested period.
    pub async fn request(&self, request: &ReportRequest) -> Result<EnqueuedReport, SdkError> {
        let path = format!("{API_PREFIX}/equity/history/exports");
        Ok(self.client.http.post(&path, request).await?)
    }

    /// All requested exports and their status.
    pub async fn list(&self) -> Result<Vec<Report>, SdkError> {
        let path = format!("{API_PREFIX}/equity/history/exports");
        Ok(self.client.http.get(&path).await?)
    }
}
