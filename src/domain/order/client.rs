//! Orders sub-client — list, get, place, cancel.

use crate::client::Trading212Client;
use crate::domain::order::{
    LimitOrderRequest, MarketOrderRequest, Order, StopLimitOrderRequest, StopOrderRequest,
};
use crate::error::SdkError;
use crate::network::API_PREFIX;

pub struct Orders<'a> {
    pub(crate) client: &'a Trading212Client,
}

impl<'a> Orders<'a> {
    /// All pending orders.
    pub async fn list(&self) -> Result<Vec<Order>, SdkError> {
        let path = format!("{API_PREFIX}/equity/orders");
        Ok(self.client.http.get(&path).await?)
    }

    pub async fn get(&self, order_id: i64) -> Result<Order, SdkError> {
        let path = format!("{API_PREFIX}/equity/orders/{order_id}");
        Ok(self.client.http.get(&path).await?)
    }

    pub async fn place_market(&self, request: &MarketOrderRequest) -> Result<Order, SdkError> {
        self.place("market", request).await
    }

    pub async fn place_limit(&self, request: &LimitOrderRequest) -> Result<Order, SdkError> {
        self.place("limit", request).await
    }

    pub async fn place_stop(&self, request: &StopOrderRequest) -> Result<Order, SdkError> {
        self.place("stop", request).await
    }

    pub async fn place_stop_limit(
        &self,
        request: &StopLimitOrderRequest,
    ) -> Result<Order, SdkError> {
        self.place("stop_limit", request).await
    }

    /// Cancel a pending order. The response body is not parsed.
    pub async fn cancel(&self, order_id: i64) -> Result<(), SdkError> {
        let path = format!("{API_PREFIX}/equity/orders/{order_id}");
        Ok(self.client.http.delete(&path).await?)
    }

    async fn place(
        &self,
        kind: &str,
        request: &impl serde::Serialize,
    ) -> Result<Order, SdkError> {
        let path = format!("{API_PREFIX}/equity/orders/{kind}");
        Ok(self.client.http.post(&path, request).await?)
    }
}
