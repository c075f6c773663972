//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by the
//! renderer. They hold display-ready strings only: labels are already truncated,
//! wrapped and decorated, so the components do no layout decisions beyond
//! positioning.
//!
//! # Example
//!
//! ```rust
//! use foodgrid::ui::viewmodel::TabItem;
//!
//! let chip = TabItem { label: "火锅".to_string(), is_active: true };
//! assert!(chip.is_active);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Page title bar.
    pub header: HeaderInfo,

    /// Section tabs under the title (display only).
    pub sections: Vec<TabItem>,

    /// Category chips, already wrapped into lines that fit the pane width.
    pub category_lines: Vec<Vec<TabItem>>,

    /// Sort radio options.
    pub sort_options: Vec<TabItem>,

    /// Card grid window.
    pub grid: GridInfo,

    /// Pager state.
    pub pagination: PaginationInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Shown in place of the grid when the current page has no cards.
    pub empty_state: Option<EmptyState>,
}

/// A selectable label: section tab, category chip or sort option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub label: String,
    pub is_active: bool,
}

/// The window of cards that fits on screen.
#[derive(Debug, Clone)]
pub struct GridInfo {
    /// Cards per grid row.
    pub columns: usize,

    /// Width of one grid cell in terminal columns, gutter included.
    pub card_width: usize,

    /// Cards to draw, row-major, starting at the first visible grid row.
    pub cards: Vec<CardItem>,
}

/// Display information for one restaurant card.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Name, truncated to leave room for the price.
    pub name: String,

    /// Per-person price label, e.g. `¥68/人`.
    pub price: String,

    /// Five-cell star bar.
    pub stars: String,

    /// Numeric rating and review count, e.g. `4.5  2420人点评`.
    pub reviews: String,

    /// Description clamped to two lines.
    pub description: Vec<String>,

    /// Host part of the image URL.
    pub image: String,

    /// Favorite button label.
    pub favorite_label: String,

    pub is_favorite: bool,

    /// Whether the card cursor is on this card.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Pager display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Current page, 1-based. May exceed `total_pages` after a sort change.
    pub current: usize,

    pub total_pages: usize,

    /// Match count summary, e.g. `共 6 条`.
    pub summary: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "暂无数据").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
