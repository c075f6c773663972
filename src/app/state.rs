//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the container the plugin mutates in response
//! to events. It wraps the listing's [`ViewState`] together with the purely
//! presentational state around it: the card cursor, the highlighted section tab
//! and the theme.
//!
//! # Architecture
//!
//! `AppState` stores inputs only. The visible page is re-derived from the catalog
//! and the view state whenever it is needed, and view models are computed on
//! demand from a state snapshot, so there is no cached listing to go stale.
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] lays the page out for a pane of a given size:
//! it wraps category chips to the pane width, picks a grid column count, clamps
//! card text to its cell and windows the grid rows around the selected card.
//!
//! # Example
//!
//! ```rust
//! use foodgrid::app::AppState;
//! use foodgrid::domain::Catalog;
//! use foodgrid::ui::Theme;
//!
//! let state = AppState::new(Catalog::builtin(), Theme::default());
//! let viewmodel = state.compute_viewmodel(40, 120);
//! assert_eq!(viewmodel.grid.cards.len(), 6);
//! ```

use super::listing::{self, ListingPage, DEFAULT_PAGE_SIZE};
use super::view_state::ViewState;
use crate::domain::{Catalog, CategoryKey, FoodItem};
use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, EmptyState, FooterInfo, GridInfo, HeaderInfo, PaginationInfo, TabItem, UIViewModel,
};

/// Default map lookup prefix; the percent-encoded item name is appended.
pub const DEFAULT_MAPS_URL: &str = "https://maps.google.com/maps?q=";

/// Page heading.
const PAGE_TITLE: &str = "成都美食";

/// Terminal lines taken by one card, borders included.
pub const CARD_HEIGHT: usize = 8;

/// Lines outside the category chips and the card grid: blank, header, section
/// tabs, border, sort bar, border, pager, border, footer.
const FIXED_CHROME_ROWS: usize = 9;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog the listing is derived from.
    pub catalog: &'static Catalog,

    /// Category filter, sort mode, page and favorites.
    pub view: ViewState,

    /// Cards per page.
    pub page_size: usize,

    /// Zero-based index of the selected card within the visible page.
    ///
    /// Clamped by `clamp_cursor()` after every listing change.
    pub cursor: usize,

    /// Index of the highlighted section tab. Display only.
    pub active_section: usize,

    /// Map lookup prefix used by navigation.
    pub maps_url: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a state over `catalog` with default view settings.
    ///
    /// The highlighted section tab starts on `food` when the catalog has one.
    #[must_use]
    pub fn new(catalog: &'static Catalog, theme: Theme) -> Self {
        let active_section = catalog
            .sections()
            .iter()
            .position(|tab| tab.key == "food")
            .unwrap_or(0);

        Self {
            catalog,
            view: ViewState::default(),
            page_size: DEFAULT_PAGE_SIZE,
            cursor: 0,
            active_section,
            maps_url: DEFAULT_MAPS_URL.to_string(),
            theme,
        }
    }

    /// Derives the page currently on screen.
    #[must_use]
    pub fn visible_page(&self) -> ListingPage<'static> {
        listing::derive_visible_items(self.catalog, &self.view, self.page_size)
    }

    /// Returns the card under the cursor, if the page has any cards.
    #[must_use]
    pub fn selected_item(&self) -> Option<&'static FoodItem> {
        self.visible_page().items.get(self.cursor).copied()
    }

    /// Moves the card cursor forward, wrapping to the first card.
    pub fn move_cursor_next(&mut self) {
        let len = self.visible_page().items.len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Moves the card cursor back, wrapping to the last card.
    pub fn move_cursor_prev(&mut self) {
        let len = self.visible_page().items.len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    /// Keeps the cursor within the visible page.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_page().items.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// The category after (`step = 1`) or before (`step = -1`) the selected one,
    /// cycling through the catalog's category list.
    #[must_use]
    pub fn adjacent_category(&self, step: isize) -> CategoryKey {
        let keys: Vec<CategoryKey> = self.catalog.categories().iter().map(|c| c.key).collect();
        if keys.is_empty() {
            return self.view.selected_category();
        }

        let len = keys.len() as isize;
        let current = keys
            .iter()
            .position(|&k| k == self.view.selected_category())
            .map_or(0, |i| i as isize);
        let next = (current + step).rem_euclid(len);
        keys[next as usize]
    }

    /// Highlights the next section tab, wrapping around.
    pub fn cycle_section(&mut self) {
        let len = self.catalog.sections().len();
        if len == 0 {
            return;
        }
        self.active_section = (self.active_section + 1) % len;
    }

    /// Builds the map lookup URL for an item.
    #[must_use]
    pub fn map_url(&self, item: &FoodItem) -> String {
        format!("{}{}", self.maps_url, urlencoding::encode(&item.name))
    }

    /// Computes a renderable UI view model for a pane of `rows` x `cols`.
    ///
    /// # Windowing
    ///
    /// Rows left after the chrome and the wrapped category chips are divided into
    /// card rows of [`CARD_HEIGHT`] lines (at least one). When the page has more
    /// card rows than fit, the window slides so the selected card stays visible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", rows, cols).entered();

        let page = self.visible_page();

        let category_tabs: Vec<TabItem> = self
            .catalog
            .categories()
            .iter()
            .map(|c| TabItem {
                label: c.label.clone(),
                is_active: c.key == self.view.selected_category(),
            })
            .collect();
        let category_lines = helpers::wrap_tabs(category_tabs, cols);

        let grid_rows = rows.saturating_sub(FIXED_CHROME_ROWS + category_lines.len());
        let grid = self.compute_grid(&page, cols, (grid_rows / CARD_HEIGHT).max(1));

        UIViewModel {
            header: self.compute_header(),
            sections: self.compute_sections(),
            category_lines,
            sort_options: self.compute_sort_options(),
            grid,
            pagination: Self::compute_pagination(&page),
            footer: Self::compute_footer(),
            empty_state: self.compute_empty_state(&page),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let favorites = self.view.favorite_ids().len();
        let title = if favorites == 0 {
            format!(" {PAGE_TITLE} ")
        } else {
            format!(" {PAGE_TITLE} · 已收藏 {favorites} ")
        };
        HeaderInfo { title }
    }

    fn compute_sections(&self) -> Vec<TabItem> {
        self.catalog
            .sections()
            .iter()
            .enumerate()
            .map(|(i, tab)| TabItem {
                label: tab.label.clone(),
                is_active: i == self.active_section,
            })
            .collect()
    }

    fn compute_sort_options(&self) -> Vec<TabItem> {
        super::modes::SortMode::ALL
            .into_iter()
            .map(|mode| TabItem {
                label: mode.label().to_string(),
                is_active: mode == self.view.sort_mode(),
            })
            .collect()
    }

    fn compute_grid(&self, page: &ListingPage<'_>, cols: usize, fit_rows: usize) -> GridInfo {
        let columns = helpers::grid_columns(cols);
        let card_width = cols / columns;
        let inner_width = card_width.saturating_sub(helpers::CARD_CHROME_WIDTH);

        let selected_row = self.cursor / columns;
        let first_row = (selected_row + 1).saturating_sub(fit_rows);
        let start = (first_row * columns).min(page.items.len());
        let end = ((first_row + fit_rows) * columns).min(page.items.len());

        let cards = page.items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| self.compute_card(item, start + offset, inner_width))
            .collect();

        GridInfo {
            columns,
            card_width,
            cards,
        }
    }

    fn compute_card(&self, item: &FoodItem, index: usize, inner_width: usize) -> CardItem {
        let is_favorite = self.view.is_favorite(&item.id);
        let price = format!("¥{}/人", item.price);
        let name_width = inner_width.saturating_sub(helpers::display_width(&price) + 1);

        CardItem {
            name: helpers::truncate_to_width(&item.name, name_width),
            price,
            stars: helpers::rating_stars(item.rating),
            reviews: format!("{:.1}  {}人点评", item.rating, item.reviews),
            description: helpers::wrap_to_width(&item.description, inner_width, 2),
            image: helpers::truncate_to_width(helpers::url_host(&item.image_url), inner_width),
            favorite_label: if is_favorite { "♥ 已收藏" } else { "♡ 收藏" }.to_string(),
            is_favorite,
            is_selected: index == self.cursor,
        }
    }

    fn compute_pagination(page: &ListingPage<'_>) -> PaginationInfo {
        PaginationInfo {
            current: page.page,
            total_pages: page.total_pages(),
            summary: format!("共 {} 条", page.total_matches),
        }
    }

    fn compute_footer() -> FooterInfo {
        FooterInfo {
            keybindings: "Tab/S-Tab: category  j/k: card  s: sort  n/p: page  f: favorite  Enter: navigate  t: section  q: quit"
                .to_string(),
        }
    }

    fn compute_empty_state(&self, page: &ListingPage<'_>) -> Option<EmptyState> {
        if !page.items.is_empty() {
            return None;
        }

        if page.is_stale() {
            Some(EmptyState {
                message: format!("第 {} 页暂无数据", page.page),
                subtitle: format!("Only {} page(s) match. Press p to go back.", page.total_pages()),
            })
        } else {
            let label = self.catalog.category_label(self.view.selected_category());
            Some(EmptyState {
                message: "暂无数据".to_string(),
                subtitle: format!("Nothing listed under {label} yet. Tab switches category."),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SortMode;

    fn state() -> AppState {
        AppState::new(Catalog::builtin(), Theme::default())
    }

    #[test]
    fn test_new_highlights_food_section() {
        let state = state();
        assert_eq!(state.catalog.sections()[state.active_section].key, "food");
    }

    #[test]
    fn test_cursor_wraps() {
        let mut state = state();
        state.move_cursor_prev();
        assert_eq!(state.cursor, 5);
        state.move_cursor_next();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_noop_on_empty_page() {
        let mut state = state();
        state.view.set_category(CategoryKey::Bar);
        state.move_cursor_next();
        assert_eq!(state.cursor, 0);
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn test_clamp_cursor_after_filter() {
        let mut state = state();
        state.cursor = 5;
        state.view.set_category(CategoryKey::Snack);
        state.clamp_cursor();
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_adjacent_category_cycles() {
        let mut state = state();
        assert_eq!(state.adjacent_category(1), CategoryKey::Other);
        assert_eq!(state.adjacent_category(-1), CategoryKey::Bar);
        state.view.set_category(CategoryKey::Bar);
        assert_eq!(state.adjacent_category(1), CategoryKey::All);
    }

    #[test]
    fn test_map_url_percent_encodes_name() {
        let state = state();
        let cafe = state.catalog.find("5").unwrap();
        assert_eq!(state.map_url(cafe), "https://maps.google.com/maps?q=BLUE%20CARIBOU%20CAFE");

        let hotpot = state.catalog.find("3").unwrap();
        assert_eq!(
            state.map_url(hotpot),
            "https://maps.google.com/maps?q=%E5%BE%97%E5%8A%B2%E5%84%BF%E7%81%AB%E9%94%85"
        );
    }

    #[test]
    fn test_viewmodel_marks_selection_and_favorites() {
        let mut state = state();
        state.view.set_sort_mode(SortMode::Popular);
        state.view.toggle_favorite("3");
        state.cursor = 1;

        let vm = state.compute_viewmodel(60, 160);
        assert_eq!(vm.grid.columns, 4);
        assert_eq!(vm.grid.cards.len(), 6);
        assert!(vm.grid.cards[0].is_favorite);
        assert!(vm.grid.cards[1].is_selected);
        assert!(!vm.grid.cards[0].is_selected);
        assert_eq!(vm.grid.cards[0].price, "¥128/人");
        assert!(vm.header.title.contains("已收藏 1"));
        assert!(vm.sort_options[1].is_active);
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn test_viewmodel_windows_rows_around_cursor() {
        let mut state = state();
        state.cursor = 5;

        // One column and room for a single card row.
        let vm = state.compute_viewmodel(20, 40);
        assert_eq!(vm.grid.columns, 1);
        assert_eq!(vm.grid.cards.len(), 1);
        assert!(vm.grid.cards[0].is_selected);
    }

    #[test]
    fn test_viewmodel_empty_states() {
        let mut state = state();
        state.view.set_category(CategoryKey::Seafood);
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("暂无数据".to_string()));

        state.view.set_category(CategoryKey::All);
        state.view.set_page(2);
        let vm = state.compute_viewmodel(40, 120);
        let empty = vm.empty_state.unwrap();
        assert!(empty.message.contains('2'));
        assert_eq!(vm.pagination.total_pages, 1);
    }

    #[test]
    fn test_sort_options_are_the_two_orderings() {
        let mut state = state();
        state.view.set_sort_mode(SortMode::Popular);
        let options = state.compute_viewmodel(40, 120).sort_options;

        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["微锦囊推荐", "按人气"]);
        assert!(!options[0].is_active);
        assert!(options[1].is_active);
    }
}
