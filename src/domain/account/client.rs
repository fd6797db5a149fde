//! Account sub-client — metadata, cash and summary.

use crate::client::Trading212Client;
use crate::domain::account::{AccountCash, AccountInfo, AccountSummary};
use crate::error::SdkError;
use crate::network::API_PREFIX;

pub struct Account<'a> {
    pub(crate) client: &'a Trading212Client,
}

impl<'a> Account<'a> {
    /// Account id and currency.
    pub async fn info(&self) -> Result<AccountInfo, SdkError> {
        let path = format!("{API_PREFIX}/equity/account/info");
        Ok(self.client.http.get(&path).await?)
    }

    /// Cash balances.
    pub async fn cash(&self) -> Result<AccountCash, SdkError> {
        let path = format!("{API_PREFIX}/equity/account/cash");
        Ok(self.client.http.get(&path).await?)
    }

    /// Combined account snapshot.
    pub async fn summary(&self) -> Result<AccountSummary, SdkError> {
        let path = format!("{API_PREFIX}/equity/account/summary");
        Ok(self.client.http.get(&path).await?)
    }
}
