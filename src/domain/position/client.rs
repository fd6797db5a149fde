//! Positions sub-client — open portfolio positions.

use crate::client::Trading212Client;
use crate::domain::position::{Position, PositionsOptions};
use crate::error::SdkError;
use crate::network::API_PREFIX;

pub struct Positions<'a> {
    pub(crate) client: &'a Trading212Client,
}

impl<'a> Positions<'a> {
    /// Open positions, optionally filtered by ticker.
    pub async fn list(&self, options: &PositionsOptions) -> Result<Vec<Position>, SdkError> {
        let path = format!("{API_PREFIX}/equity/portfolio{}", options.to_query().encode());
        Ok(self.client.http.get(&path).await?)
    }

    /// All open positions.
    pub async fn all(&self) -> Result<Vec<Position>, SdkError> {
        self.list(&PositionsOptions::default()).await
    }
}
