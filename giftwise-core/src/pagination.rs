//! Pagination over a ranked list.
//!
//! Pagination is a display concern, so invalid input is clamped into range
//! rather than rejected: pages start at 1 and sizes stay within
//! `1..=MAX_PAGE_SIZE`. Windows past the end of the list are empty.

use crate::Preferences;

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: u32 = 6;
/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 50;

/// A validated page request.
///
/// # Examples
/// ```
/// use giftwise_core::PageRequest;
///
/// let request = PageRequest::new(0, 500);
/// assert_eq!(request.page(), 1);
/// assert_eq!(request.page_size(), 50);
///
/// let ranked = [10, 20, 30];
/// assert_eq!(PageRequest::new(2, 2).window(&ranked), [30]);
/// assert!(PageRequest::new(9, 2).window(&ranked).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Build a request, clamping `page` to at least 1 and `page_size` into
    /// `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: clamp_to_u32(page, 1, u32::MAX),
            page_size: clamp_to_u32(page_size, 1, MAX_PAGE_SIZE),
        }
    }

    /// Read the page fields from preferences, falling back to page 1 and
    /// `default_page_size`.
    #[must_use]
    pub fn from_preferences(preferences: &Preferences, default_page_size: u32) -> Self {
        Self::new(
            preferences.page.unwrap_or(1),
            preferences
                .page_size
                .unwrap_or_else(|| i64::from(default_page_size)),
        )
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Number of items per page.
    #[must_use]
    pub const fn page_size(self) -> u32 {
        self.page_size
    }

    /// Index of the first item on the page, saturating on overflow.
    #[must_use]
    pub fn offset(self) -> usize {
        let start =
            u64::from(self.page.saturating_sub(1)).saturating_mul(u64::from(self.page_size));
        usize::try_from(start).unwrap_or(usize::MAX)
    }

    /// Borrow the slice of `items` covered by this page.
    #[must_use]
    pub fn window<T>(self, items: &[T]) -> &[T] {
        let start = self.offset().min(items.len());
        let size = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        let end = start.saturating_add(size).min(items.len());
        items.get(start..end).unwrap_or_default()
    }

    /// Number of pages needed to show `total` items at this page size.
    #[must_use]
    pub fn page_count(self, total: usize) -> usize {
        let size = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        total.div_ceil(size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn clamp_to_u32(value: i64, min: u32, max: u32) -> u32 {
    let clamped = value.clamp(i64::from(min), i64::from(max));
    u32::try_from(clamped).unwrap_or(min)
}
