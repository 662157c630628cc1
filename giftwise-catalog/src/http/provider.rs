//! HTTP-based `CatalogProvider` for Fake Store style endpoints.
//!
//! The endpoint must answer `GET` with a JSON array of product records.

use std::time::Duration;

use giftwise_core::Catalog;
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use crate::{CatalogError, CatalogProvider, RawProduct, normalise_all};

/// Public Fake Store API product listing.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Default user agent for catalog requests.
pub const DEFAULT_USER_AGENT: &str = "giftwise-catalog/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error type for [`HttpCatalogProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`HttpCatalogProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCatalogProviderConfig {
    /// Endpoint returning the product array.
    pub url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpCatalogProviderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpCatalogProviderConfig {
    /// Create a configuration for the given endpoint.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP catalog provider.
///
/// The provider owns a `current_thread` Tokio runtime that is reused across
/// calls. When called from inside a multi-threaded Tokio runtime it blocks
/// on that runtime's handle via [`tokio::task::block_in_place`] instead.
/// Calls from inside a `current_thread` runtime fall back to the owned
/// runtime, which blocks the caller's runtime for the duration of the
/// request.
pub struct HttpCatalogProvider {
    client: Client,
    config: HttpCatalogProviderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpCatalogProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalogProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpCatalogProvider {
    /// Create a provider for `url` with default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpCatalogProviderConfig::new(url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpCatalogProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &HttpCatalogProviderConfig {
        &self.config
    }

    async fn fetch_async(&self) -> Result<Catalog, CatalogError> {
        let url = self.config.url.as_str();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err))?;

        let records: Vec<RawProduct> =
            response.json().await.map_err(|err| CatalogError::Parse {
                origin: url.to_owned(),
                message: err.to_string(),
            })?;
        let catalog = normalise_all(records);
        log::debug!("fetched {} products from {url}", catalog.len());
        Ok(catalog)
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error) -> CatalogError {
        let url = self.config.url.clone();
        if error.is_timeout() {
            return CatalogError::Timeout {
                url,
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return CatalogError::Http {
                url,
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        CatalogError::Network {
            url,
            message: error.to_string(),
        }
    }
}

impl CatalogProvider for HttpCatalogProvider {
    fn fetch(&self) -> Result<Catalog, CatalogError> {
        let future = self.fetch_async();
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}
