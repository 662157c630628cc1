//! Preference profiles: the per-request summary derived from raw preferences.
//!
//! Profiles are rebuilt for every request and never persisted. Interest lists
//! behave as sets that remember first-occurrence order, so label selection is
//! deterministic.

use std::collections::BTreeSet;

use crate::GenderScore;

/// Derived shopper profile.
///
/// # Examples
/// ```
/// use giftwise_core::{GenderScore, PreferenceProfile};
///
/// let profile = PreferenceProfile::new()
///     .with_gender_score(GenderScore::FEMININE)
///     .with_primary_interest("scarf")
///     .with_primary_interest("scarf")
///     .with_suggested_category("jewelry");
/// assert_eq!(profile.primary_interests(), ["scarf"]);
/// assert!(profile.suggested_categories().contains("jewelry"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreferenceProfile {
    gender_score: GenderScore,
    primary_interests: Vec<String>,
    secondary_interests: Vec<String>,
    suggested_categories: BTreeSet<String>,
}

impl PreferenceProfile {
    /// Construct an empty, neutral profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shopper gender leaning.
    #[must_use]
    pub const fn gender_score(&self) -> GenderScore {
        self.gender_score
    }

    /// Tokens drawn from the shopper's interests, in first-seen order.
    #[must_use]
    pub fn primary_interests(&self) -> &[String] {
        &self.primary_interests
    }

    /// Tokens drawn from the shopper's hobbies, in first-seen order.
    #[must_use]
    pub fn secondary_interests(&self) -> &[String] {
        &self.secondary_interests
    }

    /// Category keywords to look for in product text.
    #[must_use]
    pub const fn suggested_categories(&self) -> &BTreeSet<String> {
        &self.suggested_categories
    }

    /// Replace the gender leaning.
    pub fn set_gender_score(&mut self, score: GenderScore) {
        self.gender_score = score;
    }

    /// Add a primary interest unless already present.
    pub fn add_primary_interest(&mut self, token: impl Into<String>) {
        push_unique(&mut self.primary_interests, token.into());
    }

    /// Add a secondary interest unless already present.
    pub fn add_secondary_interest(&mut self, token: impl Into<String>) {
        push_unique(&mut self.secondary_interests, token.into());
    }

    /// Add a suggested category keyword.
    pub fn suggest_category(&mut self, keyword: impl Into<String>) {
        self.suggested_categories.insert(keyword.into());
    }

    /// Chaining form of [`Self::set_gender_score`].
    #[must_use]
    pub fn with_gender_score(mut self, score: GenderScore) -> Self {
        self.set_gender_score(score);
        self
    }

    /// Chaining form of [`Self::add_primary_interest`].
    #[must_use]
    pub fn with_primary_interest(mut self, token: impl Into<String>) -> Self {
        self.add_primary_interest(token);
        self
    }

    /// Chaining form of [`Self::add_secondary_interest`].
    #[must_use]
    pub fn with_secondary_interest(mut self, token: impl Into<String>) -> Self {
        self.add_secondary_interest(token);
        self
    }

    /// Chaining form of [`Self::suggest_category`].
    #[must_use]
    pub fn with_suggested_category(mut self, keyword: impl Into<String>) -> Self {
        self.suggest_category(keyword);
        self
    }
}

fn push_unique(tokens: &mut Vec<String>, token: String) {
    if !tokens.contains(&token) {
        tokens.push(token);
    }
}
