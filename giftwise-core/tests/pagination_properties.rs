#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Property-based tests for pagination.
//!
//! # Invariants tested
//!
//! - **Completeness:** concatenating pages `1..=page_count` rebuilds the list.
//! - **Bounded windows:** no page holds more than `page_size` items.

use giftwise_core::{MAX_PAGE_SIZE, PageRequest};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: walking every page reconstructs the ranked list exactly once.
    #[test]
    fn pages_reconstruct_the_list(
        len in 0_usize..200,
        page_size in 1_i64..=i64::from(MAX_PAGE_SIZE),
    ) {
        let ranked: Vec<usize> = (0..len).collect();
        let first = PageRequest::new(1, page_size);
        let pages = first.page_count(ranked.len());

        let mut rebuilt = Vec::with_capacity(len);
        for page in 1..=pages {
            let number = i64::try_from(page).expect("page index fits in i64");
            rebuilt.extend_from_slice(PageRequest::new(number, page_size).window(&ranked));
        }

        prop_assert_eq!(rebuilt, ranked);
    }

    /// Property: windows never exceed the requested size, even for wild input.
    #[test]
    fn windows_are_bounded(
        len in 0_usize..120,
        page in any::<i64>(),
        page_size in any::<i64>(),
    ) {
        let ranked: Vec<usize> = (0..len).collect();
        let request = PageRequest::new(page, page_size);
        let window = request.window(&ranked);
        let limit = usize::try_from(request.page_size()).expect("page size fits in usize");
        prop_assert!(window.len() <= limit);
        prop_assert!((1..=MAX_PAGE_SIZE).contains(&request.page_size()));
        prop_assert!(request.page() >= 1);
    }
}
