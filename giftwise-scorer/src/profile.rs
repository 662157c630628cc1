//! Derive a [`PreferenceProfile`] from raw [`Preferences`].

use giftwise_core::{PreferenceProfile, Preferences};

use crate::{GenderAffinity, Vocabulary};

/// Interest tokens must be longer than this many characters.
const MIN_INTEREST_CHARS: usize = 2;
/// Interests longer than this many characters are also suggested as categories.
const MIN_CATEGORY_CHARS: usize = 3;

/// Build shopper profiles over a borrowed vocabulary.
///
/// Analysis never fails: missing or empty fields produce a neutral profile
/// with no interests.
///
/// # Examples
/// ```
/// use giftwise_core::{GenderScore, Preferences};
/// use giftwise_scorer::{ProfileAnalyzer, Vocabulary};
///
/// let vocabulary = Vocabulary::default();
/// let preferences = Preferences::new()
///     .with_interests("Pink scarf")
///     .with_gender("female");
/// let profile = ProfileAnalyzer::new(&vocabulary).analyse(&preferences);
///
/// assert_eq!(profile.gender_score(), GenderScore::FEMININE);
/// assert_eq!(profile.primary_interests(), ["pink", "scarf"]);
/// assert!(profile.suggested_categories().contains("jewelry"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProfileAnalyzer<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> ProfileAnalyzer<'v> {
    /// Build an analyzer over `vocabulary`.
    #[must_use]
    pub const fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Summarise `preferences` as a profile.
    #[must_use]
    pub fn analyse(&self, preferences: &Preferences) -> PreferenceProfile {
        let mut profile = PreferenceProfile::new();

        let affinity = GenderAffinity::new(self.vocabulary);
        profile.set_gender_score(
            affinity.shopper_score(&preferences.gender, &preferences.combined_text()),
        );

        for token in interest_tokens(&preferences.interests) {
            profile.add_primary_interest(token);
        }
        for token in interest_tokens(&preferences.hobbies) {
            profile.add_secondary_interest(token);
        }

        let score = profile.gender_score();
        let seeds = if score.is_strongly_feminine() {
            Some(&self.vocabulary.suggested.feminine)
        } else if score.is_strongly_masculine() {
            Some(&self.vocabulary.suggested.masculine)
        } else {
            None
        };
        for seed in seeds.into_iter().flatten() {
            profile.suggest_category(seed.as_str());
        }

        let from_interests: Vec<String> = profile
            .primary_interests()
            .iter()
            .filter(|interest| interest.chars().count() > MIN_CATEGORY_CHARS)
            .cloned()
            .collect();
        for interest in from_interests {
            profile.suggest_category(interest);
        }

        log::debug!(
            "analysed profile: gender score {:.2}, {} primary interests, {} suggested categories",
            score.value(),
            profile.primary_interests().len(),
            profile.suggested_categories().len()
        );
        profile
    }
}

fn interest_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| token.chars().count() > MIN_INTEREST_CHARS)
}
