//! Gender affinity values shared by the profile and product scoring paths.
//!
//! A [`GenderScore`] is the shopper-side leaning in `-1.0..=1.0` (feminine is
//! positive, masculine negative). A [`GenderMatch`] is the product-side
//! verdict and only ever takes one of six fixed values.
//!
//! # Examples
//! ```
//! use giftwise_core::{GenderLeaning, GenderScore};
//!
//! let score = GenderScore::new(1.7);
//! assert_eq!(score.value(), 1.0);
//! assert_eq!(score.leaning(), GenderLeaning::Feminine);
//! assert!(score.is_strong());
//! ```

/// Below this magnitude a shopper expresses no gender preference.
const PREFERENCE_THRESHOLD: f32 = 0.3;
/// Above this magnitude a shopper's preference is treated as strong.
const STRONG_THRESHOLD: f32 = 0.5;

/// Signed gender leaning of a shopper, clamped to `-1.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct GenderScore(f32);

/// Direction of a [`GenderScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderLeaning {
    /// Positive scores.
    Feminine,
    /// Negative scores.
    Masculine,
    /// Exactly zero.
    Neutral,
}

impl GenderScore {
    /// No leaning at all.
    pub const NEUTRAL: Self = Self(0.0);
    /// Declared or fully feminine leaning.
    pub const FEMININE: Self = Self(1.0);
    /// Declared or fully masculine leaning.
    pub const MASCULINE: Self = Self(-1.0);

    /// Build a score, clamping into range and mapping non-finite input to
    /// neutral.
    ///
    /// # Examples
    /// ```
    /// use giftwise_core::GenderScore;
    ///
    /// assert_eq!(GenderScore::new(-3.0).value(), -1.0);
    /// assert_eq!(GenderScore::new(f32::NAN), GenderScore::NEUTRAL);
    /// ```
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(-1.0, 1.0))
        } else {
            Self::NEUTRAL
        }
    }

    /// Return the raw value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Return the direction of the score.
    #[must_use]
    pub fn leaning(self) -> GenderLeaning {
        if self.0 > 0.0 {
            GenderLeaning::Feminine
        } else if self.0 < 0.0 {
            GenderLeaning::Masculine
        } else {
            GenderLeaning::Neutral
        }
    }

    /// Report whether the score is far enough from zero for product matching
    /// to apply (`|score| >= 0.3`).
    #[must_use]
    pub fn expresses_preference(self) -> bool {
        self.0.abs() >= PREFERENCE_THRESHOLD
    }

    /// Report whether the preference is strong (`|score| > 0.5`).
    #[must_use]
    pub fn is_strong(self) -> bool {
        self.0.abs() > STRONG_THRESHOLD
    }

    /// Strong feminine preference (`score > 0.5`).
    #[must_use]
    pub fn is_strongly_feminine(self) -> bool {
        self.0 > STRONG_THRESHOLD
    }

    /// Strong masculine preference (`score < -0.5`).
    #[must_use]
    pub fn is_strongly_masculine(self) -> bool {
        self.0 < -STRONG_THRESHOLD
    }
}

/// How well a product suits a shopper's gender leaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderMatch {
    /// The shopper has no meaningful preference; nothing is penalised.
    NoPreference,
    /// The product carries indicators of the preferred side.
    Aligned,
    /// Tech product for a masculine-leaning shopper.
    TechTolerated,
    /// The product is explicitly unisex or generic.
    Neutral,
    /// No indicator matched.
    Unclear,
    /// Tech product for a feminine-leaning shopper.
    TechPenalised,
    /// The product carries indicators of the opposite side.
    Opposed,
}

impl GenderMatch {
    /// Every variant, in descending order of value.
    pub const ALL: [Self; 7] = [
        Self::NoPreference,
        Self::Aligned,
        Self::TechTolerated,
        Self::Neutral,
        Self::Unclear,
        Self::TechPenalised,
        Self::Opposed,
    ];

    /// Numeric match score in `{0.1, 0.2, 0.5, 0.7, 0.8, 1.0}`.
    ///
    /// # Examples
    /// ```
    /// use giftwise_core::GenderMatch;
    ///
    /// assert_eq!(GenderMatch::Opposed.value(), 0.1);
    /// assert_eq!(GenderMatch::NoPreference.value(), 1.0);
    /// ```
    #[must_use]
    pub const fn value(self) -> f32 {
        match self {
            Self::NoPreference | Self::Aligned => 1.0,
            Self::TechTolerated => 0.8,
            Self::Neutral => 0.7,
            Self::Unclear => 0.5,
            Self::TechPenalised => 0.2,
            Self::Opposed => 0.1,
        }
    }

    /// Report whether the verdict counts as a mismatch (value below `0.3`).
    #[must_use]
    pub const fn is_mismatch(self) -> bool {
        matches!(self, Self::TechPenalised | Self::Opposed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.29, false)]
    #[case(0.3, true)]
    #[case(-0.3, true)]
    #[case(0.0, false)]
    fn preference_threshold(#[case] raw: f32, #[case] expected: bool) {
        assert_eq!(GenderScore::new(raw).expresses_preference(), expected);
    }

    #[rstest]
    #[case(0.5, false)]
    #[case(0.51, true)]
    #[case(-0.51, true)]
    #[case(-0.5, false)]
    fn strong_threshold_is_exclusive(#[case] raw: f32, #[case] expected: bool) {
        assert_eq!(GenderScore::new(raw).is_strong(), expected);
    }

    #[rstest]
    #[case(f32::INFINITY)]
    #[case(f32::NEG_INFINITY)]
    #[case(f32::NAN)]
    fn non_finite_scores_are_neutral(#[case] raw: f32) {
        assert_eq!(GenderScore::new(raw), GenderScore::NEUTRAL);
        assert_eq!(GenderScore::new(raw).leaning(), GenderLeaning::Neutral);
    }

    #[test]
    fn mismatch_matches_value_threshold() {
        for verdict in GenderMatch::ALL {
            assert_eq!(verdict.is_mismatch(), verdict.value() < 0.3, "{verdict:?}");
        }
    }
}
