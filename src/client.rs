//! High-level client — `Trading212Client` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, environment configuration and accessor methods.

use std::time::Duration;

use crate::auth::Credentials;
use crate::domain::account::client::Account;
use crate::domain::history::client::History;
use crate::domain::instrument::client::Instruments;
use crate::domain::order::client::Orders;
use crate::domain::position::client::Positions;
use crate::domain::report::client::Reports;
use crate::error::SdkError;
use crate::http::{Trading212Http, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::network::Environment;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::instrument::client::Instruments as InstrumentsClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::position::client::Positions as PositionsClient;
pub use crate::domain::report::client::Reports as ReportsClient;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "TRADING212_API_KEY";
/// Environment variable holding the API secret.
pub const ENV_API_SECRET: &str = "TRADING212_API_SECRET";
/// Environment variable selecting `demo` or `live`.
pub const ENV_ENVIRONMENT: &str = "TRADING212_ENV";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "TRADING212_BASE_URL";

/// The primary entry point for the Trading 212 SDK.
///
/// Provides nested sub-client accessors for each API area:
/// `client.account()`, `client.orders()`, etc.
///
/// The client holds only immutable configuration and is safe to share between
/// tasks; every call has its own request/response lifecycle. Dropping a call's
/// future cancels the request.
#[derive(Debug, Clone)]
pub struct Trading212Client {
    pub(crate) http: Trading212Http,
}

impl Trading212Client {
    /// Client for the given environment with default settings.
    pub fn new(
        environment: Environment,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, SdkError> {
        Trading212ClientBuilder::new(api_key, api_secret)
            .environment(environment)
            .build()
    }

    pub fn builder(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Trading212ClientBuilder {
        Trading212ClientBuilder::new(api_key, api_secret)
    }

    /// Build a client from `TRADING212_*` environment variables.
    pub fn from_env() -> Result<Self, SdkError> {
        Trading212ClientBuilder::from_env()?.build()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// The underlying request pipeline, for endpoints without a typed wrapper.
    pub fn http(&self) -> &Trading212Http {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn positions(&self) -> Positions<'_> {
        Positions { client: self }
    }

    pub fn instruments(&self) -> Instruments<'_> {
        Instruments { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn reports(&self) -> Reports<'_> {
        Reports { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct Trading212ClientBuilder {
    credentials: Credentials,
    environment: Environment,
    base_url: Option<String>,
    timeout: Duration,
    user_agent: String,
    http_client: Option<reqwest::Client>,
}

impl Trading212ClientBuilder {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
            environment: Environment::default(),
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_client: None,
        }
    }

    /// Builder seeded from `TRADING212_API_KEY`, `TRADING212_API_SECRET` and the
    /// optional `TRADING212_ENV` / `TRADING212_BASE_URL`.
    pub fn from_env() -> Result<Self, SdkError> {
        let api_key = required_var(ENV_API_KEY)?;
        let api_secret = required_var(ENV_API_SECRET)?;

        let mut builder = Self::new(api_key, api_secret);
        if let Some(env) = optional_var(ENV_ENVIRONMENT) {
            builder = builder.environment(env.parse()?);
        }
        if let Some(url) = optional_var(ENV_BASE_URL) {
            builder = builder.base_url(&url);
        }
        Ok(builder)
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the base URL (takes precedence over the environment).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Overall per-request timeout. Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Use a caller-configured transport instead of building one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    pub fn build(self) -> Result<Trading212Client, SdkError> {
        let base_url = self.resolved_base_url().to_string();

        let client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .user_agent(self.user_agent)
                .build()
                .map_err(|e| SdkError::Config(format!("failed to build HTTP client: {e}")))?,
        };

        tracing::debug!(
            base_url = %base_url,
            environment = %self.environment,
            "Building Trading 212 client"
        );

        Ok(Trading212Client {
            http: Trading212Http::with_client(&base_url, self.credentials, client),
        })
    }
}

fn required_var(name: &str) -> Result<String, SdkError> {
    optional_var(name).ok_or_else(|| SdkError::Config(format!("{name} is not set")))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
