//! Raw shopper preferences as received from the request gateway.
//!
//! Every field is optional. Absent, `null` or wrongly typed fields decode to
//! their empty value, and `page`/`pageSize` also accept numeric strings, so a
//! partial or malformed document degrades to neutral scoring instead of
//! failing.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Shopper preferences used to derive a
/// [`PreferenceProfile`](crate::PreferenceProfile).
///
/// # Examples
/// ```
/// use giftwise_core::Preferences;
///
/// let preferences = Preferences::new()
///     .with_interests("Pink Scarf")
///     .with_gender("Female");
/// assert_eq!(preferences.interests, "Pink Scarf");
/// assert!(preferences.page.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Primary interests, whitespace separated.
    #[serde(deserialize_with = "lenient")]
    pub interests: String,
    /// Hobbies, whitespace separated.
    #[serde(deserialize_with = "lenient")]
    pub hobbies: String,
    /// Free-text wishlist.
    #[serde(deserialize_with = "lenient")]
    pub wishlist: String,
    /// Declared gender, free text (e.g. "Female", "Prefer not to say").
    #[serde(deserialize_with = "lenient")]
    pub gender: String,
    /// Free-text restrictions. Accepted but not scored.
    #[serde(deserialize_with = "lenient")]
    pub restrictions: String,
    /// Age bracket such as `30-49`. Accepted but not scored.
    #[serde(deserialize_with = "lenient")]
    pub age_group: String,
    /// Garment sizes keyed by kind. Accepted but not scored.
    #[serde(deserialize_with = "lenient")]
    pub sizes: BTreeMap<String, String>,
    /// Requested page, 1-based. Out-of-range values are clamped later.
    #[serde(deserialize_with = "page_number")]
    pub page: Option<i64>,
    /// Requested page size. Out-of-range values are clamped later.
    #[serde(deserialize_with = "page_number")]
    pub page_size: Option<i64>,
}

impl Preferences {
    /// Construct empty preferences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interests text.
    #[must_use]
    pub fn with_interests(mut self, interests: impl Into<String>) -> Self {
        self.interests = interests.into();
        self
    }

    /// Set the hobbies text.
    #[must_use]
    pub fn with_hobbies(mut self, hobbies: impl Into<String>) -> Self {
        self.hobbies = hobbies.into();
        self
    }

    /// Set the wishlist text.
    #[must_use]
    pub fn with_wishlist(mut self, wishlist: impl Into<String>) -> Self {
        self.wishlist = wishlist.into();
        self
    }

    /// Set the declared gender.
    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Set the requested page and page size.
    #[must_use]
    pub fn with_page(mut self, page: i64, page_size: i64) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    /// Lowercase concatenation of interests, hobbies and wishlist.
    #[must_use]
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.interests, self.hobbies, self.wishlist).to_lowercase()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => value,
        Lenient::Other(_) => T::default(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPageNumber {
    Number(i64),
    Text(String),
    Other(IgnoredAny),
}

fn page_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawPageNumber::deserialize(deserializer)? {
        RawPageNumber::Number(number) => Some(number),
        RawPageNumber::Text(text) => text.trim().parse().ok(),
        RawPageNumber::Other(_) => None,
    })
}
