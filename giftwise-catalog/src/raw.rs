//! Raw catalog records and their normalisation into [`Product`]s.
//!
//! Catalog services are loosely typed: identifiers may be numbers or strings,
//! prices sometimes arrive as strings, and any field may be missing or
//! `null`. [`RawProduct`] accepts all of these and
//! [`RawProduct::normalise`] settles them into the engine's invariants.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use giftwise_core::{Catalog, Product};
use serde::Deserialize;

/// A product identifier as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    /// Numeric identifier, e.g. `1`.
    Number(serde_json::Number),
    /// Textual identifier, e.g. `"sku-12"`.
    Text(String),
}

/// A price as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// Numeric price.
    Number(f64),
    /// Price rendered as text, e.g. `"19.99"`.
    Text(String),
}

/// A catalog record in the Fake Store API shape.
///
/// # Examples
/// ```
/// use giftwise_catalog::RawProduct;
///
/// let raw: RawProduct = serde_json::from_str(
///     r#"{"id": 3, "title": "Tea Mug", "category": " Kitchen ", "price": "9.50"}"#,
/// )
/// .expect("valid record");
/// let product = raw.normalise();
/// assert_eq!(product.id, "3");
/// assert_eq!(product.category, "kitchen");
/// assert_eq!(product.price, 9.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawProduct {
    /// Identifier, when the service provides one.
    pub id: Option<RawId>,
    /// Product title.
    pub title: Option<String>,
    /// Product description.
    pub description: Option<String>,
    /// Category, in any case.
    pub category: Option<String>,
    /// Price, numeric or textual.
    pub price: Option<RawPrice>,
    /// Image location.
    #[serde(alias = "imageUrl")]
    pub image: Option<String>,
}

impl RawProduct {
    /// Settle the record into a [`Product`].
    ///
    /// - A missing identifier is replaced by a decimal hash of the title.
    ///   The hash is only stable within one build of the program, so such
    ///   identifiers must not be stored across catalog refreshes.
    /// - The category is trimmed and lowercased.
    /// - A missing, unparseable, negative or non-finite price becomes `0.0`;
    ///   anything other than a missing price is logged.
    #[must_use]
    pub fn normalise(self) -> Product {
        let title = self.title.unwrap_or_default();
        let id = match self.id {
            Some(RawId::Number(number)) => number.to_string(),
            Some(RawId::Text(text)) => text,
            None => fallback_id(&title),
        };
        let price = self.price.map_or(0.0, |raw| normalise_price(&id, raw));
        Product::new(id, title)
            .with_description(self.description.unwrap_or_default())
            .with_category(self.category.as_deref().unwrap_or_default())
            .with_price(price)
            .with_image_url(self.image.unwrap_or_default())
    }
}

/// Normalise a batch of raw records, keeping their order.
#[must_use]
pub fn normalise_all(records: Vec<RawProduct>) -> Catalog {
    records.into_iter().map(RawProduct::normalise).collect()
}

fn fallback_id(title: &str) -> String {
    let mut hasher = DefaultHasher::new();
    title.hash(&mut hasher);
    hasher.finish().to_string()
}

fn normalise_price(id: &str, raw: RawPrice) -> f64 {
    let parsed = match raw {
        RawPrice::Number(value) => Some(value),
        RawPrice::Text(text) => text.trim().parse::<f64>().ok(),
    };
    match parsed {
        Some(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            log::warn!("product {id} has an unusable price; using 0.0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(json: &str) -> Product {
        serde_json::from_str::<RawProduct>(json)
            .expect("valid record")
            .normalise()
    }

    #[rstest]
    #[case(r#"{"id": 7, "title": "Mug"}"#, "7")]
    #[case(r#"{"id": "sku-7", "title": "Mug"}"#, "sku-7")]
    #[case(r#"{"id": 7.5, "title": "Mug"}"#, "7.5")]
    fn identifiers_are_rendered_as_text(#[case] json: &str, #[case] expected: &str) {
        assert_eq!(parse(json).id, expected);
    }

    #[rstest]
    fn missing_identifier_hashes_the_title() {
        let first = parse(r#"{"title": "Tea Mug"}"#);
        let second = parse(r#"{"title": "Tea Mug", "id": null}"#);
        assert!(!first.id.is_empty());
        assert!(first.id.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(first.id, second.id);
    }

    #[rstest]
    #[case(r#"{"price": 12.5}"#, 12.5)]
    #[case(r#"{"price": " 3.25 "}"#, 3.25)]
    #[case(r#"{"price": "free"}"#, 0.0)]
    #[case(r#"{"price": -4}"#, 0.0)]
    #[case(r#"{"price": null}"#, 0.0)]
    #[case(r#"{}"#, 0.0)]
    fn prices_are_normalised(#[case] json: &str, #[case] expected: f64) {
        assert_eq!(parse(json).price.to_bits(), expected.to_bits());
    }

    #[rstest]
    fn text_fields_default_and_category_is_lowercased() {
        let product = parse(r#"{"id": 1, "category": "  Men's Clothing ", "imageUrl": "x.png"}"#);
        assert_eq!(product.title, "");
        assert_eq!(product.description, "");
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.image_url, "x.png");
    }

    #[rstest]
    fn fake_store_record_is_understood() {
        let product = parse(
            r#"{
                "id": 1,
                "title": "Fjallraven - Foldsack No. 1 Backpack",
                "price": 109.95,
                "description": "Your perfect pack for everyday use",
                "category": "men's clothing",
                "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
                "rating": {"rate": 3.9, "count": 120}
            }"#,
        );
        assert_eq!(product.id, "1");
        assert_eq!(product.title, "Fjallraven - Foldsack No. 1 Backpack");
        assert!(product.image_url.ends_with(".jpg"));
    }

    #[rstest]
    fn batches_keep_order() {
        let records: Vec<RawProduct> =
            serde_json::from_str(r#"[{"id": 2}, {"id": 1}, {"id": 3}]"#).expect("valid batch");
        let catalog = normalise_all(records);
        let ids: Vec<&str> = catalog.iter().map(|product| product.id.as_str()).collect();
        assert_eq!(ids, ["2", "1", "3"]);
    }
}
