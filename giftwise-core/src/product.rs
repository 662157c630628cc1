//! Catalog products and the read-only catalog snapshot.

use serde::{Deserialize, Serialize};

/// A product that may be recommended as a gift.
///
/// Categories are stored lowercase; prices are non-negative.
///
/// # Examples
/// ```
/// use giftwise_core::Product;
///
/// let product = Product::new("7", "Women's Pink Scarf")
///     .with_category("Accessories")
///     .with_price(19.5);
/// assert_eq!(product.category, "accessories");
/// assert_eq!(product.price, 19.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier supplied by the catalog provider.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Normalised lowercase category; empty when unknown.
    #[serde(default)]
    pub category: String,
    /// Price in the catalog's currency.
    #[serde(default)]
    pub price: f64,
    /// Product image location.
    #[serde(default)]
    pub image_url: String,
}

impl Product {
    /// Construct a product with an identifier and title; other fields start
    /// empty.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            price: 0.0,
            image_url: String::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category, trimming and lowercasing it.
    #[must_use]
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.trim().to_lowercase();
        self
    }

    /// Set the price. Negative and non-finite values become `0.0`.
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = if price.is_finite() && price > 0.0 {
            price
        } else {
            0.0
        };
        self
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}

/// Lowercase searchable text of a product: `title description category`.
///
/// Relevance uses substring checks over the whole text; indicator checks use
/// its word set, split on anything that is not alphanumeric.
///
/// # Examples
/// ```
/// use giftwise_core::{Product, ProductText};
///
/// let product = Product::new("1", "Men's Leather Wallet").with_category("accessories");
/// let text = ProductText::of(&product);
/// assert!(text.contains("leather wallet"));
/// assert!(text.words().any(|word| word == "men"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductText(String);

impl ProductText {
    /// Build the searchable text for a product.
    #[must_use]
    pub fn of(product: &Product) -> Self {
        Self::from_raw(&format!(
            "{} {} {}",
            product.title, product.description, product.category
        ))
    }

    /// Build searchable text from arbitrary input, lowercasing it.
    #[must_use]
    pub fn from_raw(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    /// Borrow the lowercase text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Report whether `needle` occurs anywhere in the text.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// Iterate over the alphanumeric words of the text.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
    }
}

/// Ordered, read-only snapshot of the products available for one request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap an ordered list of products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Borrow the products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over the products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Report whether the snapshot holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
