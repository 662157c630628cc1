//! Scored products and the recommendation records returned to callers.

use serde::{Deserialize, Serialize};

use crate::{GenderMatch, Product};

/// A product with its sub-scores and final score.
///
/// Scored products borrow from the catalog snapshot and are dropped once the
/// page of [`Recommendation`]s has been built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredProduct<'a> {
    /// Product being ranked.
    pub product: &'a Product,
    /// Textual relevance in `0.0..=1.0`.
    pub relevance: f32,
    /// Gender suitability verdict.
    pub gender_match: GenderMatch,
    /// Policy-weighted final score in `0.0..=1.0`.
    pub final_score: f32,
}

impl ScoredProduct<'_> {
    /// Final score as an integer percentage in `0..=100`.
    ///
    /// # Examples
    /// ```
    /// use giftwise_core::{GenderMatch, Product, ScoredProduct};
    ///
    /// let product = Product::new("1", "Mug");
    /// let scored = ScoredProduct {
    ///     product: &product,
    ///     relevance: 0.0,
    ///     gender_match: GenderMatch::NoPreference,
    ///     final_score: 0.2,
    /// };
    /// assert_eq!(scored.match_score(), 20);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "percentage is rounded and clamped into 0..=100 before the cast"
    )]
    pub fn match_score(&self) -> u8 {
        if !self.final_score.is_finite() {
            return 0;
        }
        (self.final_score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// A recommendation as returned to the caller.
///
/// Serialised in camelCase to match the gateway's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Product identifier.
    pub id: String,
    /// Product title.
    pub name: String,
    /// Raw product category.
    pub category: String,
    /// Personalised display category.
    pub matched_category: String,
    /// Product price.
    pub price: f64,
    /// Product image location.
    pub image_url: String,
    /// Final score as an integer percentage.
    pub match_score: u8,
    /// Product description.
    pub description: String,
}

impl Recommendation {
    /// Build the output record for a scored product and its display label.
    #[must_use]
    pub fn from_scored(scored: &ScoredProduct<'_>, matched_category: String) -> Self {
        let product = scored.product;
        Self {
            id: product.id.clone(),
            name: product.title.clone(),
            category: product.category.clone(),
            matched_category,
            price: product.price,
            image_url: product.image_url.clone(),
            match_score: scored.match_score(),
            description: product.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scored(product: &Product, final_score: f32) -> ScoredProduct<'_> {
        ScoredProduct {
            product,
            relevance: 0.0,
            gender_match: GenderMatch::Unclear,
            final_score,
        }
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.1, 10)]
    #[case(0.731, 73)]
    #[case(0.735, 74)]
    #[case(1.0, 100)]
    #[case(1.7, 100)]
    #[case(-0.2, 0)]
    #[case(f32::NAN, 0)]
    fn match_score_is_rounded_percentage(#[case] final_score: f32, #[case] expected: u8) {
        let product = Product::new("1", "Mug");
        assert_eq!(scored(&product, final_score).match_score(), expected);
    }

    #[test]
    fn recommendation_copies_product_fields() {
        let product = Product::new("9", "Tea Set")
            .with_category("kitchen")
            .with_description("Porcelain")
            .with_price(30.0)
            .with_image_url("https://img/9.png");
        let record = Recommendation::from_scored(&scored(&product, 0.5), "Kitchen".to_owned());
        assert_eq!(record.id, "9");
        assert_eq!(record.name, "Tea Set");
        assert_eq!(record.category, "kitchen");
        assert_eq!(record.matched_category, "Kitchen");
        assert_eq!(record.image_url, "https://img/9.png");
        assert_eq!(record.match_score, 50);
        assert_eq!(record.description, "Porcelain");
    }

    #[test]
    fn recommendation_serialises_camel_case() {
        let product = Product::new("9", "Tea Set");
        let record = Recommendation::from_scored(&scored(&product, 0.5), "General".to_owned());
        let json = serde_json::to_value(&record).expect("serialise recommendation");
        assert_eq!(json["matchedCategory"], "General");
        assert_eq!(json["matchScore"], 50);
        assert!(json.get("imageUrl").is_some());
    }
}
