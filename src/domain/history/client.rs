//! History sub-client — paginated orders, dividends and transactions.
//!
//! Each list method returns one [`Page`]. Use [`History::next_page`] to follow
//! `nextPagePath` manually, or the `*_stream` methods to iterate items lazily
//! across pages. Streams only fetch when polled and stop at the first error.

use async_stream::try_stream;
use futures_util::Stream;
use serde::de::DeserializeOwned;

use crate::client::Trading212Client;
use crate::domain::history::{
    HistoricalOrder, HistoryDividendItem, HistoryDividendsOptions, HistoryOrdersOptions,
    HistoryTransactionItem, HistoryTransactionsOptions,
};
use crate::error::SdkError;
use crate::network::API_PREFIX;
use crate::shared::Page;

pub struct History<'a> {
    pub(crate) client: &'a Trading212Client,
}

impl<'a> History<'a> {
    pub async fn orders(
        &self,
        options: &HistoryOrdersOptions,
    ) -> Result<Page<HistoricalOrder>, SdkError> {
        Ok(self.client.http.get(&orders_path(options)).await?)
    }

    pub async fn dividends(
        &self,
        options: &HistoryDividendsOptions,
    ) -> Result<Page<HistoryDividendItem>, SdkError> {
        Ok(self.client.http.get(&dividends_path(options)).await?)
    }

    pub async fn transactions(
        &self,
        options: &HistoryTransactionsOptions,
    ) -> Result<Page<HistoryTransactionItem>, SdkError> {
        Ok(self.client.http.get(&transactions_path(options)).await?)
    }

    /// Fetch the page after `page`, or `None` if it was the last one.
    pub async fn next_page<T: DeserializeOwned>(
        &self,
        page: &Page<T>,
    ) -> Result<Option<Page<T>>, SdkError> {
        if !page.has_next() {
            return Ok(None);
        }
        match page.next_page_path.as_deref() {
            Some(path) => Ok(Some(self.client.http.get(path).await?)),
            None => Ok(None),
        }
    }

    // ── Streams ──────────────────────────────────────────────────────────

    pub fn orders_stream(
        &self,
        options: &HistoryOrdersOptions,
    ) -> impl Stream<Item = Result<HistoricalOrder, SdkError>> + 'a {
        paginate(self.client, orders_path(options))
    }

    pub fn dividends_stream(
        &self,
        options: &HistoryDividendsOptions,
    ) -> impl Stream<Item = Result<HistoryDividendItem, SdkError>> + 'a {
        paginate(self.client, dividends_path(options))
    }

    pub fn transactions_stream(
        &self,
        options: &HistoryTransactionsOptions,
    ) -> impl Stream<Item = Result<HistoryTransactionItem, SdkError>> + 'a {
        paginate(self.client, transactions_path(options))
    }
}

fn orders_path(options: &HistoryOrdersOptions) -> String {
    format!("{API_PREFIX}/equity/history/orders{}", options.to_query().encode())
}

fn dividends_path(options: &HistoryDividendsOptions) -> String {
    format!("{API_PREFIX}/equity/history/dividends{}", options.to_query().encode())
}

fn transactions_path(options: &HistoryTransactionsOptions) -> String {
    format!(
        "{API_PREFIX}/equity/history/transactions{}",
        options.to_query().encode()
    )
}

fn paginate<'a, T>(
    client: &'a Trading212Client,
    first_path: String,
) -> impl Stream<Item = Result<T, SdkError>> + 'a
where
    T: DeserializeOwned + 'a,
{
    try_stream! {
        let mut next = Some(first_path);
        while let Some(path) = next.take() {
            let page: Page<T> = client.http.get(&path).await?;
            next = page.next_page_path.filter(|p| !p.is_empty());
            if next.as_deref() == Some(path.as_str()) {
                tracing::warn!(path = %path, "Next page path repeats current page, stopping");
                next = None;
            }
            for item in page.items {
                yield item;
            }
        }
    }
}
