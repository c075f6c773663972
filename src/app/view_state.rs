//! The listing's view state: category filter, sort mode, page and favorites.
//!
//! [`ViewState`] is the only mutable state behind the listing. Its four fields are
//! independent; every transition is a total function of its typed input, so none
//! of them can fail.
//!
//! # Transitions
//!
//! - `set_category`: changes the filter and resets the page to 1
//! - `set_sort_mode`: changes the ordering and keeps the page as is
//! - `set_page`: jumps to a page; there is no upper clamp
//! - `toggle_favorite`: flips an identifier in or out of the favorite set
//!
//! # Example
//!
//! ```rust
//! use foodgrid::app::ViewState;
//! use foodgrid::domain::CategoryKey;
//!
//! let mut view = ViewState::default();
//! view.set_page(3);
//! view.set_category(CategoryKey::Hotpot);
//! assert_eq!(view.current_page(), 1);
//! ```

use super::modes::SortMode;
use crate::domain::CategoryKey;
use std::collections::HashSet;

/// Session-scoped filter, sort, page and favorite selections.
///
/// Fields are private so that the page reset on category change and the
/// toggle-only favorite set cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selected_category: CategoryKey,
    sort_mode: SortMode,
    current_page: usize,
    favorite_ids: HashSet<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(CategoryKey::All, SortMode::Recommended)
    }
}

impl ViewState {
    /// Creates a view on page 1 with no favorites.
    #[must_use]
    pub fn new(selected_category: CategoryKey, sort_mode: SortMode) -> Self {
        Self {
            selected_category,
            sort_mode,
            current_page: 1,
            favorite_ids: HashSet::new(),
        }
    }

    #[must_use]
    pub const fn selected_category(&self) -> CategoryKey {
        self.selected_category
    }

    #[must_use]
    pub const fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn favorite_ids(&self) -> &HashSet<String> {
        &self.favorite_ids
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorite_ids.contains(id)
    }

    /// Selects a category and returns to page 1.
    pub fn set_category(&mut self, key: CategoryKey) {
        tracing::debug!(from = %self.selected_category, to = %key, "category changed");
        self.selected_category = key;
        self.current_page = 1;
    }

    /// Changes the ordering. The current page is deliberately left untouched.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        tracing::debug!(from = %self.sort_mode, to = %mode, page = self.current_page, "sort mode changed");
        self.sort_mode = mode;
    }

    /// Jumps to page `n`. Zero is raised to 1; there is no upper bound.
    pub fn set_page(&mut self, n: usize) {
        let page = n.max(1);
        tracing::debug!(from = self.current_page, to = page, "page changed");
        self.current_page = page;
    }

    /// Adds `id` to the favorites, or removes it if already present.
    ///
    /// The identifier is not checked against the catalog. Returns whether `id` is
    /// a favorite after the toggle.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let now_favorite = if self.favorite_ids.remove(id) {
            false
        } else {
            self.favorite_ids.insert(id.to_string());
            true
        };
        tracing::debug!(item_id = %id, favorite = now_favorite, total = self.favorite_ids.len(), "favorite toggled");
        now_favorite
    }
}
