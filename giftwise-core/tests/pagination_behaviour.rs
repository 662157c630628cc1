#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for clamped pagination over ranked lists.

use std::cell::RefCell;

use giftwise_core::PageRequest;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Shared state for pagination scenarios.
struct PagingContext {
    ranked: RefCell<Vec<u32>>,
    page: RefCell<Option<Vec<u32>>>,
}

#[fixture]
fn context() -> PagingContext {
    PagingContext {
        ranked: RefCell::new(Vec::new()),
        page: RefCell::new(None),
    }
}

#[given("a ranked list of five items")]
fn five_items(context: &PagingContext) {
    *context.ranked.borrow_mut() = (1..=5).collect();
}

#[when("I request page 2 with page size 2")]
fn second_page(context: &PagingContext) {
    request_page(context, 2, 2);
}

#[when("I request page 4 with page size 2")]
fn page_past_end(context: &PagingContext) {
    request_page(context, 4, 2);
}

#[when("I request page 0 with page size 0")]
fn non_positive_page(context: &PagingContext) {
    request_page(context, 0, 0);
}

#[then("the page holds items 3 and 4")]
fn holds_three_and_four(context: &PagingContext) {
    assert_page(context, &[3, 4]);
}

#[then("the page is empty")]
fn page_is_empty(context: &PagingContext) {
    assert_page(context, &[]);
}

#[then("the page holds only item 1")]
fn holds_first(context: &PagingContext) {
    assert_page(context, &[1]);
}

fn request_page(context: &PagingContext, page: i64, page_size: i64) {
    let ranked = context.ranked.borrow();
    let window = PageRequest::new(page, page_size).window(&ranked).to_vec();
    *context.page.borrow_mut() = Some(window);
}

fn assert_page(context: &PagingContext, expected: &[u32]) {
    let page = context.page.borrow();
    let items = page.as_ref().expect("a page should have been requested");
    assert_eq!(items.as_slice(), expected);
}

#[scenario(path = "tests/features/pagination.feature", index = 0)]
fn paging_through_ranked_list(context: PagingContext) {
    let _ = context;
}

#[scenario(path = "tests/features/pagination.feature", index = 1)]
fn page_beyond_end_is_empty(context: PagingContext) {
    let _ = context;
}

#[scenario(path = "tests/features/pagination.feature", index = 2)]
fn non_positive_input_is_clamped(context: PagingContext) {
    let _ = context;
}
