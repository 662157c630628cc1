//! The catalog provider seam.

use giftwise_core::Catalog;

use crate::CatalogError;

/// Obtain a catalog snapshot from an external source.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a provider can
/// be shared by the components that prime an engine. Returned products are
/// already normalised.
///
/// # Examples
///
/// ```
/// use giftwise_catalog::{CatalogError, CatalogProvider};
/// use giftwise_core::{Catalog, Product};
///
/// struct Fixed;
///
/// impl CatalogProvider for Fixed {
///     fn fetch(&self) -> Result<Catalog, CatalogError> {
///         Ok(Catalog::new(vec![Product::new("1", "Mug")]))
///     }
/// }
///
/// let catalog = Fixed.fetch()?;
/// assert_eq!(catalog.len(), 1);
/// # Ok::<(), CatalogError>(())
/// ```
pub trait CatalogProvider: Send + Sync {
    /// Fetch the current catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the source cannot be read or decoded.
    fn fetch(&self) -> Result<Catalog, CatalogError>;
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for Box<P> {
    fn fetch(&self) -> Result<Catalog, CatalogError> {
        (**self).fetch()
    }
}
