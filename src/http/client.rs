//! Low-level HTTP client — `Trading212Http`.
//!
//! Every endpoint goes through the same pipeline: [`Trading212Http::execute`]
//! builds and sends an authenticated request, then [`Trading212Http::handle_response`]
//! (or [`Trading212Http::handle_empty_response`] when there is no payload to decode)
//! classifies the status and decodes the body. Sub-clients in `domain/<area>/client.rs`
//! only supply a path and an optional typed body.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::Credentials;
use crate::error::HttpError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("trading212-sdk/", env!("CARGO_PKG_VERSION"));

/// Low-level HTTP client for the Trading 212 REST API.
///
/// Holds only immutable configuration; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Trading212Http {
    base_url: String,
    credentials: Credentials,
    client: Client,
}

impl Trading212Http {
    /// Create a client with the default transport (30s timeout).
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self::with_client(base_url, credentials, client))
    }

    /// Create a client on top of a caller-configured transport.
    pub fn with_client(base_url: &str, credentials: Credentials, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Pipeline ─────────────────────────────────────────────────────────

    /// Build, authenticate and send a request to `base_url + path`.
    ///
    /// `path` is appended verbatim and must already carry any query suffix.
    /// A JSON body (and `Content-Type: application/json`) is attached only when
    /// `body` is `Some`.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, HttpError> {
        let payload = match body {
            Some(b) => Some(serde_json::to_vec(b).map_err(HttpError::Serialization)?),
            None => None,
        };

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, path, has_body = payload.is_some(), "Sending request");

        let mut req = self
            .client
            .request(method.clone(), url)
            .header(AUTHORIZATION, self.credentials.authorization_header());

        if let Some(bytes) = payload {
            req = req.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let resp = req.send().await?;
        tracing::debug!(%method, path, status = resp.status().as_u16(), "Received response");
        Ok(resp)
    }

    /// Classify `resp` and decode a success body into `T`.
    ///
    /// Status >= 400 yields [`HttpError::Api`] with the raw body text. The body is
    /// consumed on every path, which releases the connection.
    pub async fn handle_response<T: DeserializeOwned>(resp: Response) -> Result<T, HttpError> {
        let resp = Self::check_status(resp).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(HttpError::Decode)
    }

    /// Classify `resp` and discard a success body without parsing it.
    pub async fn handle_empty_response(resp: Response) -> Result<(), HttpError> {
        let resp = Self::check_status(resp).await?;
        resp.bytes().await?;
        Ok(())
    }

    async fn check_status(resp: Response) -> Result<Response, HttpError> {
        let status = resp.status().as_u16();
        if status < 400 {
            return Ok(resp);
        }

        let path = resp.url().path().to_string();
        let body = resp.text().await?;
        tracing::warn!(status, path = %path, "API error response");
        tracing::debug!(status, body = %body, "API error body");
        Err(HttpError::Api { status, body })
    }

    // ── Convenience wrappers ─────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let resp = self.execute(Method::GET, path, None::<&()>).await?;
        Self::handle_response(resp).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let resp = self.execute(Method::POST, path, Some(body)).await?;
        Self::handle_response(resp).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), HttpError> {
        let resp = self.execute(Method::DELETE, path, None::<&()>).await?;
        Self::handle_empty_response(resp).await
    }
}
