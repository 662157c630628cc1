//! Catalog providers for the Giftwise engine.
//!
//! A catalog is fetched once, normalised into
//! [`Product`](giftwise_core::Product)s and then handed to the engine as a
//! read-only snapshot. This crate supplies:
//! - [`RawProduct`], the tolerant wire record, and its normalisation rules;
//! - the [`CatalogProvider`] trait;
//! - [`JsonFileCatalog`] for catalogs stored on disk;
//! - [`http::HttpCatalogProvider`] for Fake Store style HTTP endpoints.

#![forbid(unsafe_code)]

mod error;
mod file;
pub mod http;
mod provider;
mod raw;

#[doc(hidden)]
pub mod test_support;

pub use error::CatalogError;
pub use file::JsonFileCatalog;
pub use provider::CatalogProvider;
pub use raw::{RawId, RawPrice, RawProduct, normalise_all};
