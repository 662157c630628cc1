//! Catalogs stored as JSON files.

use camino::{Utf8Path, Utf8PathBuf};
use giftwise_core::Catalog;

use crate::{CatalogError, CatalogProvider, RawProduct, normalise_all};

/// Read a catalog from a JSON array of raw product records.
///
/// # Examples
///
/// ```no_run
/// use giftwise_catalog::{CatalogProvider, JsonFileCatalog};
///
/// let catalog = JsonFileCatalog::new("fixtures/products.json").fetch()?;
/// println!("{} products", catalog.len());
/// # Ok::<(), giftwise_catalog::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileCatalog {
    path: Utf8PathBuf,
}

impl JsonFileCatalog {
    /// Build a provider for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalog file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl CatalogProvider for JsonFileCatalog {
    fn fetch(&self) -> Result<Catalog, CatalogError> {
        let contents =
            giftwise_fs::read_utf8_to_string(&self.path).map_err(|err| CatalogError::Read {
                path: self.path.clone(),
                message: err.to_string(),
            })?;
        let records: Vec<RawProduct> =
            serde_json::from_str(&contents).map_err(|err| CatalogError::Parse {
                origin: self.path.to_string(),
                message: err.to_string(),
            })?;
        let catalog = normalise_all(records);
        log::debug!("read {} products from {}", catalog.len(), self.path);
        Ok(catalog)
    }
}
