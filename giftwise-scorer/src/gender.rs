//! Gender affinity estimation shared by shoppers and products.
//!
//! One estimator answers two questions over the same [`Vocabulary`]:
//! how strongly a shopper leans one way ([`GenderScore`]), and how well a
//! product suits that leaning ([`GenderMatch`]). Keeping both behind
//! [`GenderAffinity::evaluate`] means the two views cannot drift apart.

use std::collections::BTreeSet;

use giftwise_core::{GenderLeaning, GenderMatch, GenderScore, ProductText};

use crate::vocabulary::{KeywordTiers, Keywords, Vocabulary};

const STRONG_WEIGHT: f32 = 0.4;
const MEDIUM_WEIGHT: f32 = 0.2;
const WEAK_WEIGHT: f32 = 0.1;

/// What is being evaluated.
#[derive(Debug, Clone, Copy)]
pub enum AffinitySubject<'a> {
    /// A shopper, described by a declared gender and their free text.
    Shopper {
        /// Declared gender, free text. Matched case-insensitively.
        declared: &'a str,
        /// Lowercase interests, hobbies and wishlist.
        text: &'a str,
    },
    /// A product, judged against a shopper's leaning.
    Product {
        /// Lowercase product text.
        text: &'a ProductText,
        /// Leaning of the shopper the product is being ranked for.
        preference: GenderScore,
    },
}

/// Result of [`GenderAffinity::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Affinity {
    /// A shopper's leaning.
    Leaning(GenderScore),
    /// A product's suitability.
    Match(GenderMatch),
}

/// Gender affinity estimator over a borrowed vocabulary.
///
/// # Examples
/// ```
/// use giftwise_core::{GenderMatch, GenderScore, ProductText};
/// use giftwise_scorer::{GenderAffinity, Vocabulary};
///
/// let vocabulary = Vocabulary::default();
/// let affinity = GenderAffinity::new(&vocabulary);
/// assert_eq!(affinity.shopper_score("Female", ""), GenderScore::FEMININE);
///
/// let wallet = ProductText::from_raw("Men's Leather Wallet");
/// assert_eq!(
///     affinity.product_match(&wallet, GenderScore::FEMININE),
///     GenderMatch::Opposed
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GenderAffinity<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> GenderAffinity<'v> {
    /// Build an estimator over `vocabulary`.
    #[must_use]
    pub const fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Evaluate a shopper or a product.
    #[must_use]
    pub fn evaluate(&self, subject: AffinitySubject<'_>) -> Affinity {
        match subject {
            AffinitySubject::Shopper { declared, text } => {
                Affinity::Leaning(self.leaning_of(declared, text))
            }
            AffinitySubject::Product { text, preference } => {
                Affinity::Match(self.match_of(text, preference))
            }
        }
    }

    /// Score a shopper's leaning.
    ///
    /// A declared gender mentioning "female" or "woman" yields
    /// [`GenderScore::FEMININE`]; one mentioning "male" or "man" yields
    /// [`GenderScore::MASCULINE`]. Otherwise signal words in `text` are
    /// weighed and the heavier side wins.
    #[must_use]
    pub fn shopper_score(&self, declared: &str, text: &str) -> GenderScore {
        match self.evaluate(AffinitySubject::Shopper { declared, text }) {
            Affinity::Leaning(score) => score,
            Affinity::Match(_) => GenderScore::NEUTRAL,
        }
    }

    /// Judge how well a product suits `preference`.
    #[must_use]
    pub fn product_match(&self, text: &ProductText, preference: GenderScore) -> GenderMatch {
        match self.evaluate(AffinitySubject::Product { text, preference }) {
            Affinity::Match(verdict) => verdict,
            Affinity::Leaning(_) => GenderMatch::NoPreference,
        }
    }

    fn leaning_of(&self, declared: &str, text: &str) -> GenderScore {
        if let Some(score) = declared_score(declared) {
            return score;
        }
        let words: BTreeSet<&str> = text.split_whitespace().collect();
        let signals = &self.vocabulary.signals;
        weigh(
            tier_weight(&words, &signals.feminine),
            tier_weight(&words, &signals.masculine),
        )
    }

    fn match_of(&self, text: &ProductText, preference: GenderScore) -> GenderMatch {
        if !preference.expresses_preference() {
            return GenderMatch::NoPreference;
        }
        let words: BTreeSet<&str> = text.words().collect();
        let indicators = &self.vocabulary.indicators;
        let feminine = mentions(&words, &indicators.feminine);
        let masculine = mentions(&words, &indicators.masculine);
        let neutral = mentions(&words, &indicators.neutral);
        let tech = mentions(&words, &indicators.tech);

        match preference.leaning() {
            GenderLeaning::Feminine => {
                if masculine {
                    GenderMatch::Opposed
                } else if tech {
                    GenderMatch::TechPenalised
                } else if feminine {
                    GenderMatch::Aligned
                } else if neutral {
                    GenderMatch::Neutral
                } else {
                    GenderMatch::Unclear
                }
            }
            GenderLeaning::Masculine => {
                if feminine {
                    GenderMatch::Opposed
                } else if masculine {
                    GenderMatch::Aligned
                } else if tech {
                    GenderMatch::TechTolerated
                } else if neutral {
                    GenderMatch::Neutral
                } else {
                    GenderMatch::Unclear
                }
            }
            GenderLeaning::Neutral => GenderMatch::NoPreference,
        }
    }
}

fn declared_score(declared: &str) -> Option<GenderScore> {
    let declared = declared.to_lowercase();
    if declared.contains("female") || declared.contains("woman") {
        Some(GenderScore::FEMININE)
    } else if declared.contains("male") || declared.contains("man") {
        Some(GenderScore::MASCULINE)
    } else {
        None
    }
}

fn mentions(words: &BTreeSet<&str>, keywords: &Keywords) -> bool {
    keywords.iter().any(|keyword| words.contains(keyword.as_str()))
}

fn hits(words: &BTreeSet<&str>, keywords: &Keywords) -> f32 {
    let count = keywords
        .iter()
        .filter(|keyword| words.contains(keyword.as_str()))
        .count();
    f32::from(u16::try_from(count).unwrap_or(u16::MAX))
}

#[expect(
    clippy::float_arithmetic,
    reason = "signal tiers are combined as a weighted sum"
)]
fn tier_weight(words: &BTreeSet<&str>, tiers: &KeywordTiers) -> f32 {
    hits(words, &tiers.strong) * STRONG_WEIGHT
        + hits(words, &tiers.medium) * MEDIUM_WEIGHT
        + hits(words, &tiers.weak) * WEAK_WEIGHT
}

#[expect(
    clippy::float_arithmetic,
    reason = "masculine weight is negated onto the signed scale"
)]
fn weigh(feminine: f32, masculine: f32) -> GenderScore {
    if feminine > masculine {
        GenderScore::new(feminine.min(1.0))
    } else if masculine > feminine {
        GenderScore::new(-masculine.min(1.0))
    } else {
        GenderScore::NEUTRAL
    }
}
