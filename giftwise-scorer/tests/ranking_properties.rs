#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Property-based tests for profile analysis and ranking.
//!
//! # Invariants tested
//!
//! - **Bounded leaning:** gender scores stay within `-1.0..=1.0`.
//! - **Declared override:** a declared "female" always scores `1.0`.
//! - **Closed verdicts:** gender match values come from a fixed set.
//! - **Bounded percentages:** match scores stay within `0..=100`.
//! - **Stable ties:** neutral, interest-free shoppers see catalog order.

use giftwise_core::{Catalog, GenderScore, Preferences, Product};
use giftwise_scorer::Recommender;
use proptest::prelude::*;

const VERDICT_VALUES: [f32; 6] = [0.1, 0.2, 0.5, 0.7, 0.8, 1.0];

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("pink".to_owned()),
        Just("glitter".to_owned()),
        Just("beard".to_owned()),
        Just("tactical".to_owned()),
        Just("gadget".to_owned()),
        Just("women's".to_owned()),
        Just("men".to_owned()),
        Just("unisex".to_owned()),
        Just("ssd".to_owned()),
        Just("jewelry".to_owned()),
        "[a-z]{1,8}",
    ]
}

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..8).prop_map(|words| words.join(" "))
}

fn declared_gender() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("female".to_owned()),
        Just("male".to_owned()),
        Just("prefer not to say".to_owned()),
    ]
}

fn preferences() -> impl Strategy<Value = Preferences> {
    (phrase(), phrase(), phrase(), declared_gender()).prop_map(
        |(interests, hobbies, wishlist, gender)| {
            Preferences::new()
                .with_interests(interests)
                .with_hobbies(hobbies)
                .with_wishlist(wishlist)
                .with_gender(gender)
        },
    )
}

fn catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((phrase(), phrase()), 1..12).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (title, category))| {
                Product::new(index.to_string(), title).with_category(&category)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: the derived leaning never leaves its range.
    #[test]
    fn gender_score_is_bounded(preferences in preferences()) {
        let profile = Recommender::default().analyse(&preferences);
        let value = profile.gender_score().value();
        prop_assert!((-1.0..=1.0).contains(&value));
    }

    /// Property: a declared "female" overrides any wording.
    #[test]
    fn declared_female_is_fully_feminine(preferences in preferences()) {
        let declared = preferences.with_gender("Female");
        let profile = Recommender::default().analyse(&declared);
        prop_assert_eq!(profile.gender_score(), GenderScore::FEMININE);
    }

    /// Property: sub-scores and final scores stay in range for any input.
    #[test]
    fn scores_stay_in_range(preferences in preferences(), catalog in catalog()) {
        let recommender = Recommender::default();
        let profile = recommender.analyse(&preferences);
        for scored in recommender.rank(&catalog, &profile) {
            prop_assert!(VERDICT_VALUES.contains(&scored.gender_match.value()));
            prop_assert!((0.0..=1.0).contains(&scored.relevance));
            prop_assert!((0.0..=1.0).contains(&scored.final_score));
            prop_assert!(scored.match_score() <= 100);
        }
    }

    /// Property: with nothing to go on, ranking preserves catalog order.
    #[test]
    fn neutral_shoppers_see_catalog_order(catalog in catalog()) {
        let recommender = Recommender::default().with_default_page_size(50);
        let page = recommender
            .recommend_from(&catalog, &Preferences::new())
            .expect("catalog is never empty");
        let ids: Vec<&str> = page.iter().map(|item| item.id.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|product| product.id.as_str()).collect();
        prop_assert_eq!(ids, expected);
        prop_assert!(page.iter().all(|item| item.match_score == 20));
    }
}
