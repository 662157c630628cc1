//! Personalised display categories.

use std::collections::BTreeSet;

use giftwise_core::PreferenceProfile;

use crate::Vocabulary;
use crate::vocabulary::Keywords;

/// Label used for products without a category.
pub const GENERAL_CATEGORY: &str = "General";

/// Choose a human-readable category label for a product.
///
/// Rules, first match wins:
/// 1. empty category gives [`GENERAL_CATEGORY`];
/// 2. a strongly feminine profile and a category word starting with a
///    feminine label term gives `Women's {Category}`;
/// 3. a strongly masculine profile and a masculine label term gives
///    `Men's {Category}`;
/// 4. the first primary interest contained in the category gives
///    `{Interest} {Category}`;
/// 5. otherwise the title-cased category.
///
/// # Examples
/// ```
/// use giftwise_core::{GenderScore, PreferenceProfile};
/// use giftwise_scorer::{CategoryLabeler, Vocabulary};
///
/// let vocabulary = Vocabulary::default();
/// let labeler = CategoryLabeler::new(&vocabulary);
/// let profile = PreferenceProfile::new().with_gender_score(GenderScore::FEMININE);
/// assert_eq!(labeler.label("women's clothing", &profile), "Women's Women's Clothing");
/// assert_eq!(labeler.label("", &profile), "General");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CategoryLabeler<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> CategoryLabeler<'v> {
    /// Build a labeler over `vocabulary`.
    #[must_use]
    pub const fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Label `category` for `profile`.
    #[must_use]
    pub fn label(&self, category: &str, profile: &PreferenceProfile) -> String {
        let category = category.trim().to_lowercase();
        if category.is_empty() {
            return GENERAL_CATEGORY.to_owned();
        }

        let words: BTreeSet<&str> = category
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect();
        let score = profile.gender_score();
        let terms = &self.vocabulary.label_terms;
        if score.is_strongly_feminine() && mentions(&words, &terms.feminine) {
            return format!("Women's {}", title_case(&category));
        }
        if score.is_strongly_masculine() && mentions(&words, &terms.masculine) {
            return format!("Men's {}", title_case(&category));
        }

        profile
            .primary_interests()
            .iter()
            .find(|interest| category.contains(interest.as_str()))
            .map_or_else(
                || title_case(&category),
                |interest| format!("{} {}", title_case(interest), title_case(&category)),
            )
    }
}

/// A term matches any word it prefixes, so "men" fires on "menswear" but not
/// on "women".
fn mentions(words: &BTreeSet<&str>, terms: &Keywords) -> bool {
    terms
        .iter()
        .any(|term| words.iter().any(|word| word.starts_with(term.as_str())))
}

/// Upper-case the first letter of each whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftwise_core::GenderScore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn vocabulary() -> Vocabulary {
        Vocabulary::default()
    }

    #[rstest]
    #[case("jewelry", 1.0, "Women's Jewelry")]
    #[case("women's clothing", 0.4, "Women's Clothing")]
    #[case("men's clothing", -1.0, "Men's Men's Clothing")]
    #[case("men's clothing", 1.0, "Men's Clothing")]
    #[case("women's clothing", -1.0, "Women's Clothing")]
    #[case("  ", 1.0, "General")]
    #[case("ELECTRONICS", 0.0, "Electronics")]
    #[case("mens grooming", -1.0, "Men's Mens Grooming")]
    #[case("menswear", -1.0, "Men's Menswear")]
    #[case("womenswear", 1.0, "Women's Womenswear")]
    #[case("womens accessories", 1.0, "Women's Womens Accessories")]
    #[case("womenswear", -1.0, "Womenswear")]
    fn gendered_labels(
        vocabulary: Vocabulary,
        #[case] category: &str,
        #[case] score: f32,
        #[case] expected: &str,
    ) {
        let profile = PreferenceProfile::new().with_gender_score(GenderScore::new(score));
        let label = CategoryLabeler::new(&vocabulary).label(category, &profile);
        assert_eq!(label, expected);
    }

    #[rstest]
    fn first_contained_interest_prefixes_label(vocabulary: Vocabulary) {
        let profile = PreferenceProfile::new()
            .with_primary_interest("jewel")
            .with_primary_interest("ring");
        let label = CategoryLabeler::new(&vocabulary).label("jewelery", &profile);
        assert_eq!(label, "Jewel Jewelery");
    }

    #[rstest]
    fn gender_label_wins_over_interest(vocabulary: Vocabulary) {
        let profile = PreferenceProfile::new()
            .with_gender_score(GenderScore::FEMININE)
            .with_primary_interest("jewelry");
        let label = CategoryLabeler::new(&vocabulary).label("jewelry", &profile);
        assert_eq!(label, "Women's Jewelry");
    }

    #[rstest]
    fn title_case_handles_punctuation() {
        assert_eq!(title_case("men's  clothing"), "Men's Clothing");
        assert_eq!(title_case(""), "");
    }
}
