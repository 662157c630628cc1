//! Facade crate for the Giftwise recommendation engine.
//!
//! This crate re-exports the core domain types and the scoring engine, and
//! exposes the catalog providers behind the `catalog` feature.
//!
//! ```
//! use giftwise_engine::{Catalog, Preferences, Product, RecommendError, Recommender};
//!
//! let recommender = Recommender::default();
//! assert_eq!(
//!     recommender.recommend(&Preferences::new()),
//!     Err(RecommendError::CatalogNotPrimed)
//! );
//! recommender.prime(Catalog::new(vec![
//!     Product::new("wallet", "Men's Leather Wallet").with_category("accessories"),
//!     Product::new("scarf", "Women's Pink Scarf").with_category("accessories"),
//! ]));
//! let preferences = Preferences::new()
//!     .with_interests("pink scarf")
//!     .with_gender("Female");
//! let page = recommender.recommend(&preferences).expect("primed catalog");
//! assert_eq!(page.first().map(|item| item.id.as_str()), Some("scarf"));
//! ```

#![forbid(unsafe_code)]

pub use giftwise_core::{
    Catalog, GenderMatch, GenderScore, PageRequest, PreferenceProfile, Preferences, Product,
    Recommendation, RecommendError, ScoredProduct, sanitise_score,
};
pub use giftwise_scorer::{Recommender, Vocabulary, VocabularyError};

#[cfg(feature = "catalog")]
pub use giftwise_catalog::{
    CatalogError, CatalogProvider, JsonFileCatalog,
    http::{HttpCatalogProvider, HttpCatalogProviderConfig},
};
