//! Scoring and ranking for Giftwise recommendations.
//!
//! The crate turns raw [`Preferences`](giftwise_core::Preferences) and a
//! [`Catalog`](giftwise_core::Catalog) into a ranked, labelled page of
//! [`Recommendation`](giftwise_core::Recommendation)s:
//! - [`ProfileAnalyzer`] derives the shopper's profile;
//! - [`GenderAffinity`] estimates the shopper's leaning and judges each
//!   product against it, using one [`Vocabulary`] for both;
//! - [`RelevanceScorer`] measures interest and category overlap;
//! - [`combine`] blends the sub-scores and orders the results;
//! - [`CategoryLabeler`] picks a display category.
//!
//! [`Recommender`] wires these together over shared, reloadable snapshots.
//!
//! # Examples
//!
//! ```no_run
//! use giftwise_core::Preferences;
//! use giftwise_scorer::Recommender;
//!
//! let recommender = Recommender::from_vocabulary_path("config/vocabulary.json");
//! # let catalog = giftwise_core::Catalog::default();
//! recommender.prime(catalog);
//! let page = recommender
//!     .recommend(&Preferences::new().with_interests("tea"))
//!     .expect("catalog primed");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod combine;
mod engine;
mod error;
mod gender;
mod label;
mod profile;
mod relevance;
pub mod vocabulary;

pub use combine::{Blend, DEMOTED_SCORE};
pub use engine::Recommender;
pub use error::VocabularyError;
pub use gender::{Affinity, AffinitySubject, GenderAffinity};
pub use label::{CategoryLabeler, GENERAL_CATEGORY};
pub use profile::ProfileAnalyzer;
pub use relevance::RelevanceScorer;
pub use vocabulary::Vocabulary;
