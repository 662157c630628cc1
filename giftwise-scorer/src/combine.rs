//! Blend sub-scores into a final score and order the results.
//!
//! Shoppers with a strong leaning (`|gender score| > 0.5`) weigh relevance
//! and gender match equally, and products that mismatch the leaning are
//! demoted to [`DEMOTED_SCORE`]. Demoted products stay in the ranking. Every
//! other shopper is ranked mostly on relevance.

use giftwise_core::{GenderMatch, GenderScore, ScoredProduct};

/// Final score given to products that mismatch a strong leaning.
pub const DEMOTED_SCORE: f32 = 0.1;

/// Relative weighting between relevance and gender match.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Blend {
    /// Multiplier applied to the relevance sub-score.
    pub relevance: f32,
    /// Multiplier applied to the gender match sub-score.
    pub gender: f32,
}

impl Blend {
    /// Weights used for shoppers with a strong leaning.
    pub const STRONG: Self = Self {
        relevance: 0.4,
        gender: 0.4,
    };
    /// Weights used for everyone else.
    pub const WEAK: Self = Self {
        relevance: 0.6,
        gender: 0.2,
    };

    /// Select the weights for a shopper's leaning.
    #[must_use]
    pub fn for_preference(preference: GenderScore) -> Self {
        if preference.is_strong() {
            Self::STRONG
        } else {
            Self::WEAK
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "final scores are a weighted sum of sub-scores"
    )]
    fn apply(self, relevance: f32, gender: f32) -> f32 {
        relevance * self.relevance + gender * self.gender
    }
}

/// Combine sub-scores into a final score in `0.0..=1.0`.
///
/// # Examples
/// ```
/// use giftwise_core::{GenderMatch, GenderScore};
/// use giftwise_scorer::combine::final_score;
///
/// // Strong leaning, mismatching product: demoted.
/// assert_eq!(final_score(GenderScore::FEMININE, 0.9, GenderMatch::Opposed), 0.1);
/// // No leaning: mostly relevance.
/// let score = final_score(GenderScore::NEUTRAL, 0.0, GenderMatch::NoPreference);
/// assert!((score - 0.2).abs() < 1e-6);
/// ```
#[must_use]
pub fn final_score(preference: GenderScore, relevance: f32, verdict: GenderMatch) -> f32 {
    if preference.is_strong() && verdict.is_mismatch() {
        return DEMOTED_SCORE;
    }
    let blended = Blend::for_preference(preference).apply(relevance, verdict.value());
    if blended.is_finite() {
        blended.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Sort scored products by final score, highest first.
///
/// The sort is stable, so ties keep catalog order.
pub fn sort_ranked(scored: &mut [ScoredProduct<'_>]) {
    scored.sort_by(|left, right| right.final_score.total_cmp(&left.final_score));
}
