//! The recommendation engine.
//!
//! [`Recommender`] owns two shared snapshots: the keyword [`Vocabulary`] and
//! the primed [`Catalog`]. Each request clones the `Arc`s it needs under a
//! short read lock and then works without holding any lock, so
//! [`Recommender::reload`] and [`Recommender::prime`] never disturb requests
//! already in flight.

use std::sync::{Arc, PoisonError, RwLock};

use camino::{Utf8Path, Utf8PathBuf};
use giftwise_core::{
    Catalog, DEFAULT_PAGE_SIZE, PageRequest, PreferenceProfile, Preferences, ProductText,
    RecommendError, Recommendation, ScoredProduct,
};

use crate::{
    CategoryLabeler, GenderAffinity, ProfileAnalyzer, RelevanceScorer, Vocabulary,
    VocabularyError,
    combine::{final_score, sort_ranked},
};

/// Score, rank and paginate a catalog for a shopper.
///
/// # Examples
/// ```
/// use giftwise_core::{Catalog, Preferences, Product};
/// use giftwise_scorer::Recommender;
///
/// let recommender = Recommender::default();
/// recommender.prime(Catalog::new(vec![
///     Product::new("1", "Men's Leather Wallet").with_category("accessories"),
///     Product::new("2", "Women's Pink Scarf").with_category("accessories"),
/// ]));
///
/// let preferences = Preferences::new()
///     .with_gender("female")
///     .with_interests("pink scarf");
/// let page = recommender.recommend(&preferences).expect("catalog is primed");
/// assert_eq!(page[0].name, "Women's Pink Scarf");
/// assert_eq!(page[1].match_score, 10);
/// ```
#[derive(Debug)]
pub struct Recommender {
    vocabulary: RwLock<Arc<Vocabulary>>,
    vocabulary_path: Option<Utf8PathBuf>,
    catalog: RwLock<Option<Arc<Catalog>>>,
    default_page_size: u32,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

impl Recommender {
    /// Build an engine over an in-memory vocabulary.
    ///
    /// Engines built this way cannot [`reload`](Self::reload).
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary: RwLock::new(Arc::new(vocabulary)),
            vocabulary_path: None,
            catalog: RwLock::new(None),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Build an engine whose vocabulary is read from `path`.
    ///
    /// Unreadable or invalid files fall back to the built-in tables with a
    /// warning; the path is remembered for later reloads.
    #[must_use]
    pub fn from_vocabulary_path(path: impl Into<Utf8PathBuf>) -> Self {
        let path = path.into();
        let vocabulary = Vocabulary::load_or_default(&path);
        Self {
            vocabulary_path: Some(path),
            ..Self::new(vocabulary)
        }
    }

    /// Use `page_size` when a request does not choose one.
    ///
    /// The value is clamped into the accepted page size range.
    #[must_use]
    pub fn with_default_page_size(mut self, page_size: u32) -> Self {
        self.default_page_size = PageRequest::new(1, i64::from(page_size)).page_size();
        self
    }

    /// Page size used when a request does not choose one.
    #[must_use]
    pub const fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    /// Path the vocabulary is reloaded from, if any.
    #[must_use]
    pub fn vocabulary_path(&self) -> Option<&Utf8Path> {
        self.vocabulary_path.as_deref()
    }

    /// Current vocabulary snapshot.
    #[must_use]
    pub fn vocabulary(&self) -> Arc<Vocabulary> {
        let guard = self.vocabulary.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Re-read the vocabulary file and swap it in.
    ///
    /// On failure the previous tables stay in place.
    ///
    /// # Errors
    /// Returns [`VocabularyError::NoSource`] when the engine was not built
    /// from a file, and propagates load failures from
    /// [`Vocabulary::load`].
    pub fn reload(&self) -> Result<(), VocabularyError> {
        let path = self
            .vocabulary_path
            .as_deref()
            .ok_or(VocabularyError::NoSource)?;
        let fresh = Vocabulary::load(path).inspect_err(|err| {
            log::warn!("keeping previous vocabulary: {err}");
        })?;
        let mut guard = self
            .vocabulary
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(fresh);
        log::info!("reloaded vocabulary from {path}");
        Ok(())
    }

    /// Install `catalog` as the snapshot used by [`recommend`](Self::recommend).
    pub fn prime(&self, catalog: Catalog) {
        log::info!("primed catalog with {} products", catalog.len());
        let mut guard = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::new(catalog));
    }

    /// Current catalog snapshot, if primed.
    #[must_use]
    pub fn catalog(&self) -> Option<Arc<Catalog>> {
        let guard = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map(Arc::clone)
    }

    /// Derive the profile for `preferences`.
    #[must_use]
    pub fn analyse(&self, preferences: &Preferences) -> PreferenceProfile {
        ProfileAnalyzer::new(&self.vocabulary()).analyse(preferences)
    }

    /// Score every product in `catalog` for `profile` and sort the result,
    /// best first. Ties keep catalog order.
    #[must_use]
    pub fn rank<'c>(
        &self,
        catalog: &'c Catalog,
        profile: &PreferenceProfile,
    ) -> Vec<ScoredProduct<'c>> {
        rank_with(&self.vocabulary(), catalog, profile)
    }

    /// Recommend a page of products from the primed catalog.
    ///
    /// # Errors
    /// Returns [`RecommendError::CatalogNotPrimed`] before
    /// [`prime`](Self::prime) has been called and
    /// [`RecommendError::EmptyCatalog`] when the primed catalog is empty.
    pub fn recommend(
        &self,
        preferences: &Preferences,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let catalog = self.catalog().ok_or(RecommendError::CatalogNotPrimed)?;
        self.recommend_from(&catalog, preferences)
    }

    /// Recommend a page of products from an explicit catalog.
    ///
    /// # Errors
    /// Returns [`RecommendError::EmptyCatalog`] when `catalog` is empty.
    pub fn recommend_from(
        &self,
        catalog: &Catalog,
        preferences: &Preferences,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        if catalog.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }
        let vocabulary = self.vocabulary();
        let profile = ProfileAnalyzer::new(&vocabulary).analyse(preferences);
        let ranked = rank_with(&vocabulary, catalog, &profile);
        let request = PageRequest::from_preferences(preferences, self.default_page_size);
        log::debug!(
            "ranking {} products; page {} of size {}",
            catalog.len(),
            request.page(),
            request.page_size()
        );

        let labeler = CategoryLabeler::new(&vocabulary);
        Ok(request
            .window(&ranked)
            .iter()
            .map(|scored| {
                let label = labeler.label(&scored.product.category, &profile);
                Recommendation::from_scored(scored, label)
            })
            .collect())
    }
}

fn rank_with<'c>(
    vocabulary: &Vocabulary,
    catalog: &'c Catalog,
    profile: &PreferenceProfile,
) -> Vec<ScoredProduct<'c>> {
    let affinity = GenderAffinity::new(vocabulary);
    let preference = profile.gender_score();
    let mut scored: Vec<ScoredProduct<'c>> = catalog
        .iter()
        .map(|product| {
            let text = ProductText::of(product);
            let relevance = RelevanceScorer.relevance(&text, profile);
            let gender_match = affinity.product_match(&text, preference);
            ScoredProduct {
                product,
                relevance,
                gender_match,
                final_score: final_score(preference, relevance, gender_match),
            }
        })
        .collect();
    sort_ranked(&mut scored);
    scored
}
