//! Catalogs served over HTTP.
//!
//! [`HttpCatalogProvider`] implements the synchronous
//! [`CatalogProvider`](crate::CatalogProvider) trait by blocking on an async
//! `reqwest` call, so engines can be primed from synchronous code.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use giftwise_catalog::CatalogProvider;
//! use giftwise_catalog::http::{HttpCatalogProvider, HttpCatalogProviderConfig};
//!
//! let config = HttpCatalogProviderConfig::default()
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("gift-desk/2.0");
//! let provider = HttpCatalogProvider::with_config(config)?;
//! let catalog = provider.fetch()?;
//! println!("{} products", catalog.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;

pub use provider::{
    DEFAULT_CATALOG_URL, DEFAULT_USER_AGENT, HttpCatalogProvider, HttpCatalogProviderConfig,
    ProviderBuildError,
};
