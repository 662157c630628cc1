//! Core domain types for the Giftwise recommendation engine.
//!
//! The crate models the catalog ([`Product`], [`Catalog`]), the shopper's raw
//! [`Preferences`], the derived [`PreferenceProfile`], and the output
//! [`Recommendation`] records. Scoring policy lives in `giftwise-scorer`; the
//! types here only guard their own ranges (scores are clamped, pagination is
//! clamped) so downstream components never see out-of-range values.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod gender;
pub mod pagination;
pub mod preferences;
pub mod product;
pub mod profile;
pub mod recommendation;
pub mod score;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use error::RecommendError;
pub use gender::{GenderLeaning, GenderMatch, GenderScore};
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
pub use preferences::Preferences;
pub use product::{Catalog, Product, ProductText};
pub use profile::PreferenceProfile;
pub use recommendation::{Recommendation, ScoredProduct};
pub use score::sanitise_score;
