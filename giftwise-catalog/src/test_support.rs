//! Test utilities for catalog providers.
//!
//! [`StubCatalogProvider`] returns a pre-configured catalog or error without
//! touching the filesystem or the network.

use std::sync::atomic::{AtomicUsize, Ordering};

use giftwise_core::Catalog;

use crate::{CatalogError, CatalogProvider};

/// Stub `CatalogProvider` for testing.
///
/// # Example
///
/// ```
/// use giftwise_catalog::CatalogProvider;
/// use giftwise_catalog::test_support::StubCatalogProvider;
/// use giftwise_core::{Catalog, Product};
///
/// let provider = StubCatalogProvider::with_catalog(Catalog::new(vec![Product::new("1", "Mug")]));
/// assert_eq!(provider.fetch().expect("stub catalog").len(), 1);
/// assert_eq!(provider.fetch_count(), 1);
/// ```
#[derive(Debug)]
pub struct StubCatalogProvider {
    response: Result<Catalog, CatalogError>,
    fetches: AtomicUsize,
}

impl StubCatalogProvider {
    /// Create a provider that returns `catalog`.
    #[must_use]
    pub const fn with_catalog(catalog: Catalog) -> Self {
        Self {
            response: Ok(catalog),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Create a provider that fails with `error`.
    #[must_use]
    pub const fn with_error(error: CatalogError) -> Self {
        Self {
            response: Err(error),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of times [`fetch`](CatalogProvider::fetch) has been called.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl CatalogProvider for StubCatalogProvider {
    fn fetch(&self) -> Result<Catalog, CatalogError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.response.clone()
    }
}
