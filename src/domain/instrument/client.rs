//! Instruments sub-client — instrument and exchange metadata.

use crate::client::Trading212Client;
use crate::domain::instrument::{Exchange, TradableInstrument};
use crate::error::SdkError;
use crate::network::API_PREFIX;

pub struct Instruments<'a> {
    pub(crate) client: &'a Trading212Client,
}

impl<'a> Instruments<'a> {
    /// Every instrument the account can trade.
    pub async fn list(&self) -> Result<Vec<TradableInstrument>, SdkError> {
        let path = format!("{API_PREFIX}/equity/metadata/instruments");
        Ok(self.client.http.get(&path).await?)
    }

    /// Exchanges with their working schedules.
    pub async fn exchanges(&self) -> Result<Vec<Exchange>, SdkError> {
        let path = format!("{API_PREFIX}/equity/metadata/exchanges");
        Ok(self.client.http.get(&path).await?)
    }
}
