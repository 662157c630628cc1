//! Textual relevance between a profile and a product.
//!
//! Primary interests contribute up to `0.6` and suggested categories up to
//! `0.4`, each in proportion to the share of terms found in the product
//! text. Matching is by substring, so `"women"` also finds `"women's"`.

use giftwise_core::{PreferenceProfile, ProductText, sanitise_score};

const INTEREST_WEIGHT: f32 = 0.6;
const CATEGORY_WEIGHT: f32 = 0.4;

/// Score products by interest and category overlap.
///
/// # Examples
/// ```
/// use giftwise_core::{PreferenceProfile, Product, ProductText};
/// use giftwise_scorer::RelevanceScorer;
///
/// let profile = PreferenceProfile::new().with_primary_interest("tea");
/// let mug = ProductText::of(&Product::new("1", "Ceramic Tea Mug"));
/// assert_eq!(RelevanceScorer.relevance(&mug, &profile), 0.6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceScorer;

impl RelevanceScorer {
    /// Score pre-built product text against `profile`.
    #[must_use]
    pub fn relevance(self, text: &ProductText, profile: &PreferenceProfile) -> f32 {
        let interests = share(profile.primary_interests().iter(), text);
        let categories = share(profile.suggested_categories().iter(), text);
        sanitise_score(weighted(interests, categories))
    }
}

/// Fraction of `terms` found in `text`, or zero when there are no terms.
#[expect(
    clippy::float_arithmetic,
    reason = "match counts are normalised into a share of the term list"
)]
fn share<'a>(terms: impl ExactSizeIterator<Item = &'a String>, text: &ProductText) -> f32 {
    let total = terms.len();
    if total == 0 {
        return 0.0;
    }
    let matches = terms.filter(|term| text.contains(term.as_str())).count();
    (as_f32(matches) / as_f32(total)).min(1.0)
}

fn as_f32(count: usize) -> f32 {
    f32::from(u16::try_from(count).unwrap_or(u16::MAX))
}

#[expect(
    clippy::float_arithmetic,
    reason = "relevance is a weighted sum of two shares"
)]
fn weighted(interests: f32, categories: f32) -> f32 {
    (interests * INTEREST_WEIGHT + categories * CATEGORY_WEIGHT).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftwise_core::test_support::product;
    use giftwise_core::Product;
    use rstest::rstest;

    fn score(product: &Product, profile: &PreferenceProfile) -> f32 {
        RelevanceScorer.relevance(&ProductText::of(product), profile)
    }

    fn scarf_profile() -> PreferenceProfile {
        ["women", "womens", "jewelry", "accessories", "beauty", "pink", "scarf"]
            .into_iter()
            .fold(
                PreferenceProfile::new()
                    .with_primary_interest("pink")
                    .with_primary_interest("scarf"),
                PreferenceProfile::with_suggested_category,
            )
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn full_interest_and_partial_category_overlap() {
        let scarf = product("scarf", "Women's Pink Scarf", "accessories");
        let score = score(&scarf, &scarf_profile());
        let expected = 0.6 + 0.4 * 4.0 / 7.0;
        assert!((score - expected).abs() < 1e-6, "{score}");
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn unrelated_product_only_matches_shared_categories() {
        let wallet = product("wallet", "Men's Leather Wallet", "accessories");
        let score = score(&wallet, &scarf_profile());
        let expected = 0.4 / 7.0;
        assert!((score - expected).abs() < 1e-6, "{score}");
    }

    #[rstest]
    fn empty_profile_scores_zero() {
        let mug = product("mug", "Ceramic Tea Mug", "kitchen");
        assert_eq!(score(&mug, &PreferenceProfile::new()), 0.0);
    }

    #[rstest]
    fn scores_never_exceed_one() {
        let profile = PreferenceProfile::new()
            .with_primary_interest("tea")
            .with_suggested_category("tea");
        let mug = product("mug", "Ceramic Tea Mug", "kitchen");
        assert_eq!(score(&mug, &profile), 1.0);
    }
}
