//! Keyword tables that drive gender affinity, suggestions and labels.
//!
//! A [`Vocabulary`] is immutable once built. The engine shares it behind an
//! `Arc` and swaps the whole snapshot on reload, so scoring never observes a
//! partially updated table.
//!
//! The JSON form mirrors the struct layout. Omitted top-level sections take
//! their built-in value, as do omitted lists inside `signals` and
//! `indicators`. Omitted tiers of a provided leaning, and omitted lists in
//! `suggested` or `labelTerms`, are empty.
//!
//! ```json
//! {
//!   "signals": { "feminine": { "strong": ["pink"] } },
//!   "indicators": { "tech": ["laptop", "ssd"] }
//! }
//! ```

use std::collections::BTreeSet;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::VocabularyError;

/// A set of lowercase keywords.
pub type Keywords = BTreeSet<String>;

fn keywords(words: &[&str]) -> Keywords {
    words.iter().map(|word| (*word).to_owned()).collect()
}

/// Signal words for one leaning, grouped by weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTiers {
    /// Words counting 0.4 each.
    pub strong: Keywords,
    /// Words counting 0.2 each.
    pub medium: Keywords,
    /// Words counting 0.1 each.
    pub weak: Keywords,
}

/// Feminine and masculine signal tiers used to estimate a shopper's leaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderSignals {
    /// Feminine signal words.
    pub feminine: KeywordTiers,
    /// Masculine signal words.
    pub masculine: KeywordTiers,
}

impl Default for GenderSignals {
    fn default() -> Self {
        Self {
            feminine: KeywordTiers {
                strong: keywords(&["pink", "cute", "kawaii", "princess", "glitter"]),
                medium: keywords(&["flower", "butterfly", "beauty", "fashion", "dress"]),
                weak: keywords(&["purple", "rose", "soft", "gentle"]),
            },
            masculine: KeywordTiers {
                strong: keywords(&["beard", "muscle", "masculine", "tough"]),
                medium: keywords(&["sports", "gaming", "rugged", "tactical"]),
                weak: keywords(&["tech", "gadget", "tools"]),
            },
        }
    }
}

/// Words that classify a product's intended audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Indicators {
    /// Product is aimed at women.
    pub feminine: Keywords,
    /// Product is aimed at men.
    pub masculine: Keywords,
    /// Product is explicitly unisex.
    pub neutral: Keywords,
    /// Product is technical or electronic.
    pub tech: Keywords,
}

impl Default for Indicators {
    fn default() -> Self {
        Self {
            feminine: keywords(&["women", "womens", "female", "ladies", "feminine", "girl"]),
            masculine: keywords(&["men", "mens", "male", "masculine", "guy", "boy"]),
            neutral: keywords(&["unisex", "universal", "generic"]),
            tech: keywords(&[
                "computer",
                "gaming",
                "electronics",
                "digital",
                "drive",
                "ssd",
                "storage",
                "tech",
            ]),
        }
    }
}

/// A pair of keyword sets keyed by leaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaningKeywords {
    /// Keywords applied to a strongly feminine profile.
    #[serde(default)]
    pub feminine: Keywords,
    /// Keywords applied to a strongly masculine profile.
    #[serde(default)]
    pub masculine: Keywords,
}

impl LeaningKeywords {
    fn suggested_defaults() -> Self {
        Self {
            feminine: keywords(&["women", "womens", "jewelry", "accessories", "beauty"]),
            masculine: keywords(&["men", "mens", "masculine"]),
        }
    }

    fn label_defaults() -> Self {
        Self {
            feminine: keywords(&["women", "jewelry", "beauty"]),
            masculine: keywords(&["men", "masculine"]),
        }
    }
}

fn default_suggested() -> LeaningKeywords {
    LeaningKeywords::suggested_defaults()
}

fn default_label_terms() -> LeaningKeywords {
    LeaningKeywords::label_defaults()
}

/// Complete set of keyword tables used by the scoring pipeline.
///
/// # Examples
/// ```
/// use giftwise_scorer::Vocabulary;
///
/// let vocabulary = Vocabulary::default();
/// assert!(vocabulary.indicators.tech.contains("ssd"));
/// assert!(vocabulary.suggested.feminine.contains("jewelry"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    /// Tiers used to estimate the shopper's leaning from free text.
    #[serde(default)]
    pub signals: GenderSignals,
    /// Product audience indicators.
    #[serde(default)]
    pub indicators: Indicators,
    /// Category seeds suggested for strong leanings.
    #[serde(default = "default_suggested")]
    pub suggested: LeaningKeywords,
    /// Category terms that earn a gendered display label.
    #[serde(default = "default_label_terms")]
    pub label_terms: LeaningKeywords,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            signals: GenderSignals::default(),
            indicators: Indicators::default(),
            suggested: default_suggested(),
            label_terms: default_label_terms(),
        }
    }
}

impl Vocabulary {
    /// Read and validate a vocabulary from a JSON file.
    ///
    /// Keywords are trimmed and lowercased.
    ///
    /// # Errors
    /// Returns [`VocabularyError::Read`] when the file cannot be read,
    /// [`VocabularyError::Parse`] when it is not valid JSON of the expected
    /// shape, and [`VocabularyError::Malformed`] when a keyword is blank.
    pub fn load(path: &Utf8Path) -> Result<Self, VocabularyError> {
        let contents =
            giftwise_fs::read_utf8_to_string(path).map_err(|source| VocabularyError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let raw: Self =
            serde_json::from_str(&contents).map_err(|source| VocabularyError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        raw.normalised()
    }

    /// Read a vocabulary, falling back to the built-in tables on any error.
    #[must_use]
    pub fn load_or_default(path: &Utf8Path) -> Self {
        match Self::load(path) {
            Ok(vocabulary) => vocabulary,
            Err(err) => {
                log::warn!("using built-in vocabulary: {err}");
                Self::default()
            }
        }
    }

    /// Trim and lowercase every keyword, rejecting blank entries.
    ///
    /// # Errors
    /// Returns [`VocabularyError::Malformed`] naming the first section that
    /// holds a blank keyword.
    pub fn normalised(self) -> Result<Self, VocabularyError> {
        let Self {
            signals,
            indicators,
            suggested,
            label_terms,
        } = self;
        Ok(Self {
            signals: GenderSignals {
                feminine: normalise_tiers(signals.feminine, TierSections::FEMININE)?,
                masculine: normalise_tiers(signals.masculine, TierSections::MASCULINE)?,
            },
            indicators: Indicators {
                feminine: normalise_set(indicators.feminine, "indicators.feminine")?,
                masculine: normalise_set(indicators.masculine, "indicators.masculine")?,
                neutral: normalise_set(indicators.neutral, "indicators.neutral")?,
                tech: normalise_set(indicators.tech, "indicators.tech")?,
            },
            suggested: LeaningKeywords {
                feminine: normalise_set(suggested.feminine, "suggested.feminine")?,
                masculine: normalise_set(suggested.masculine, "suggested.masculine")?,
            },
            label_terms: LeaningKeywords {
                feminine: normalise_set(label_terms.feminine, "labelTerms.feminine")?,
                masculine: normalise_set(label_terms.masculine, "labelTerms.masculine")?,
            },
        })
    }
}

struct TierSections {
    strong: &'static str,
    medium: &'static str,
    weak: &'static str,
}

impl TierSections {
    const FEMININE: Self = Self {
        strong: "signals.feminine.strong",
        medium: "signals.feminine.medium",
        weak: "signals.feminine.weak",
    };
    const MASCULINE: Self = Self {
        strong: "signals.masculine.strong",
        medium: "signals.masculine.medium",
        weak: "signals.masculine.weak",
    };
}

fn normalise_tiers(
    tiers: KeywordTiers,
    sections: TierSections,
) -> Result<KeywordTiers, VocabularyError> {
    Ok(KeywordTiers {
        strong: normalise_set(tiers.strong, sections.strong)?,
        medium: normalise_set(tiers.medium, sections.medium)?,
        weak: normalise_set(tiers.weak, sections.weak)?,
    })
}

fn normalise_set(words: Keywords, section: &'static str) -> Result<Keywords, VocabularyError> {
    words
        .into_iter()
        .map(|word| {
            let cleaned = word.trim().to_lowercase();
            if cleaned.is_empty() {
                Err(VocabularyError::Malformed { section })
            } else {
                Ok(cleaned)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("tempdir")
    }

    fn write_vocabulary(dir: &TempDir, json: &str) -> Utf8PathBuf {
        let path =
            Utf8PathBuf::from_path_buf(dir.path().join("vocabulary.json")).expect("utf8 path");
        std::fs::write(path.as_std_path(), json).expect("write vocabulary");
        path
    }

    #[rstest]
    fn defaults_carry_builtin_tables() {
        let vocabulary = Vocabulary::default();
        assert!(vocabulary.signals.feminine.strong.contains("pink"));
        assert!(vocabulary.signals.masculine.weak.contains("gadget"));
        assert!(vocabulary.indicators.neutral.contains("unisex"));
        assert!(vocabulary.label_terms.masculine.contains("men"));
        assert_eq!(vocabulary.suggested.feminine.len(), 5);
    }

    #[rstest]
    fn missing_sections_fall_back_to_defaults(temp_dir: TempDir) {
        let path = write_vocabulary(&temp_dir, r#"{"indicators":{"tech":[" Laptop ","SSD"]}}"#);
        let vocabulary = Vocabulary::load(&path).expect("load vocabulary");

        assert_eq!(vocabulary.indicators.tech, keywords(&["laptop", "ssd"]));
        assert_eq!(vocabulary.indicators.feminine, Indicators::default().feminine);
        assert_eq!(vocabulary.signals, GenderSignals::default());
        assert_eq!(vocabulary.label_terms, LeaningKeywords::label_defaults());
    }

    #[rstest]
    fn blank_keyword_is_malformed(temp_dir: TempDir) {
        let path = write_vocabulary(&temp_dir, r#"{"suggested":{"feminine":["  "]}}"#);
        let err = Vocabulary::load(&path).expect_err("blank keyword should fail");
        assert!(matches!(
            err,
            VocabularyError::Malformed {
                section: "suggested.feminine"
            }
        ));
    }

    #[rstest]
    fn invalid_json_is_a_parse_error(temp_dir: TempDir) {
        let path = write_vocabulary(&temp_dir, "{ not json");
        let err = Vocabulary::load(&path).expect_err("invalid json should fail");
        assert!(matches!(err, VocabularyError::Parse { .. }));
    }

    #[rstest]
    fn missing_file_is_a_read_error(temp_dir: TempDir) {
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("absent.json"))
            .expect("utf8 path");
        let err = Vocabulary::load(&path).expect_err("missing file should fail");
        assert!(matches!(err, VocabularyError::Read { .. }));
    }

    #[rstest]
    fn load_or_default_absorbs_errors(temp_dir: TempDir) {
        let path = write_vocabulary(&temp_dir, "42");
        assert_eq!(Vocabulary::load_or_default(&path), Vocabulary::default());
    }

    #[rstest]
    fn partial_tiers_leave_other_tiers_empty(temp_dir: TempDir) {
        let path = write_vocabulary(
            &temp_dir,
            r#"{"signals":{"feminine":{"strong":["Sparkle"]}}}"#,
        );
        let vocabulary = Vocabulary::load(&path).expect("load vocabulary");
        assert_eq!(vocabulary.signals.feminine.strong, keywords(&["sparkle"]));
        assert!(vocabulary.signals.feminine.weak.is_empty());
        assert_eq!(
            vocabulary.signals.masculine,
            GenderSignals::default().masculine
        );
    }
}
