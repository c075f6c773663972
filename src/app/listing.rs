//! Listing derivation: filter, sort and paginate the catalog.
//!
//! Everything here is a pure function of the catalog and a [`ViewState`]. The
//! pipeline runs on every render; with a catalog this size there is nothing worth
//! caching.
//!
//! # Pipeline
//!
//! 1. **Filter**: keep items admitted by the selected category (`all` keeps everything)
//! 2. **Sort**: stable descending sort on rating or review count
//! 3. **Paginate**: slice `[(page - 1) * page_size, page * page_size)`, clamped to the
//!    result length, so a page past the end is simply empty
//!
//! # Example
//!
//! ```rust
//! use foodgrid::app::{listing, SortMode, ViewState};
//! use foodgrid::domain::Catalog;
//!
//! let mut view = ViewState::default();
//! view.set_sort_mode(SortMode::Popular);
//!
//! let page = listing::derive_visible_items(Catalog::builtin(), &view, listing::DEFAULT_PAGE_SIZE);
//! assert_eq!(page.items[0].id, "3");
//! assert_eq!(page.total_matches, 6);
//! ```

use super::modes::SortMode;
use super::view_state::ViewState;
use crate::domain::{Catalog, CategoryKey, FoodItem};
use std::cmp::Reverse;
use std::ops::Range;

/// Cards per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// One page of the derived listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage<'a> {
    /// Items on this page, in display order. At most `page_size` long.
    pub items: Vec<&'a FoodItem>,
    /// Number of items that passed the category filter, across all pages.
    pub total_matches: usize,
    /// The page this slice was taken for (1-based).
    pub page: usize,
    pub page_size: usize,
}

impl ListingPage<'_> {
    /// Number of pages the pager should offer. Never less than one.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_matches, self.page_size)
    }

    /// True when the requested page lies beyond the last populated page.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.items.is_empty() && self.total_matches > 0
    }
}

/// Keeps the items admitted by `category`, preserving catalog order.
#[must_use]
pub fn filter_items(items: &[FoodItem], category: CategoryKey) -> Vec<&FoodItem> {
    items.iter().filter(|item| category.admits(item.category)).collect()
}

/// Sorts in place, highest first. The sort is stable: equal keys keep their
/// relative order.
pub fn sort_items(items: &mut [&FoodItem], mode: SortMode) {
    match mode {
        SortMode::Recommended => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortMode::Popular => items.sort_by_key(|item| Reverse(item.reviews)),
    }
}

/// Index range of `page` within a sequence of `len` items.
///
/// Both ends are clamped to `len`; page 0 is treated like an out-of-range page.
#[must_use]
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    if page == 0 {
        return len..len;
    }
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// `ceil(count / page_size)`, with a floor of one page.
#[must_use]
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    (count / page_size + usize::from(count % page_size != 0)).max(1)
}

/// Derives the visible page for `view` over `catalog`.
///
/// A `page_size` of zero is treated as one.
#[must_use]
pub fn derive_visible_items<'a>(catalog: &'a Catalog, view: &ViewState, page_size: usize) -> ListingPage<'a> {
    let page_size = page_size.max(1);

    let _span = tracing::debug_span!("derive_visible_items",
        category = %view.selected_category(),
        sort = %view.sort_mode(),
        page = view.current_page(),
        page_size = page_size
    ).entered();

    let mut matches = filter_items(catalog.items(), view.selected_category());
    sort_items(&mut matches, view.sort_mode());

    let total_matches = matches.len();
    let bounds = page_bounds(view.current_page(), page_size, total_matches);
    let items = matches[bounds].to_vec();

    tracing::debug!(total_matches, visible = items.len(), "listing derived");

    ListingPage {
        items,
        total_matches,
        page: view.current_page(),
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&FoodItem]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn test_recommended_orders_by_rating() {
        let catalog = Catalog::builtin();
        let mut items = filter_items(catalog.items(), CategoryKey::All);
        sort_items(&mut items, SortMode::Recommended);
        assert_eq!(ids(&items), ["2", "5", "3", "1", "6", "4"]);
    }

    #[test]
    fn test_popular_orders_by_reviews() {
        let catalog = Catalog::builtin();
        let mut items = filter_items(catalog.items(), CategoryKey::All);
        sort_items(&mut items, SortMode::Popular);
        assert_eq!(ids(&items), ["3", "1", "2", "6", "4", "5"]);
    }

    #[test]
    fn test_equal_keys_keep_catalog_order() {
        let mut twins: Vec<FoodItem> = Catalog::builtin().items()[..3].to_vec();
        for twin in &mut twins {
            twin.rating = 4.0;
            twin.reviews = 100;
        }
        let mut refs: Vec<&FoodItem> = twins.iter().collect();
        sort_items(&mut refs, SortMode::Recommended);
        assert_eq!(ids(&refs), ["1", "2", "3"]);
        sort_items(&mut refs, SortMode::Popular);
        assert_eq!(ids(&refs), ["1", "2", "3"]);
    }

    #[test]
    fn test_page_bounds_clamp_to_length() {
        assert_eq!(page_bounds(1, 8, 6), 0..6);
        assert_eq!(page_bounds(2, 8, 6), 6..6);
        assert_eq!(page_bounds(2, 4, 6), 4..6);
        assert_eq!(page_bounds(0, 4, 6), 6..6);
        assert_eq!(page_bounds(usize::MAX, 4, 6), 6..6);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 8), 1);
        assert_eq!(total_pages(6, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(6, 0), 6);
        assert_eq!(total_pages(6, usize::MAX), 1);
        assert_eq!(total_pages(usize::MAX, 2), usize::MAX / 2 + 1);
    }

    #[test]
    fn test_page_past_end_is_stale_not_error() {
        let mut view = ViewState::default();
        view.set_page(4);
        let page = derive_visible_items(Catalog::builtin(), &view, DEFAULT_PAGE_SIZE);
        assert!(page.items.is_empty());
        assert!(page.is_stale());
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_empty_category_is_not_stale() {
        let mut view = ViewState::default();
        view.set_category(CategoryKey::Seafood);
        let page = derive_visible_items(Catalog::builtin(), &view, DEFAULT_PAGE_SIZE);
        assert!(page.items.is_empty());
        assert!(!page.is_stale());
    }
}
