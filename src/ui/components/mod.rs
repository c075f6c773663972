//! Composable UI component renderers.
//!
//! Each component draws one region of the listing page at a given row and
//! returns the row after it.
//!
//! # Components
//!
//! - [`header`]: Title bar and section tabs
//! - [`filters`]: Category chips and sort options
//! - [`grid`]: Restaurant cards
//! - [`pagination`]: Pager and match count
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Empty state message drawn in place of the grid

mod empty;
mod filters;
mod footer;
mod grid;
mod header;
mod pagination;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use filters::{render_category_lines, render_sort_bar};
use footer::render_footer;
use grid::render_grid;
use header::{render_header, render_sections};
use pagination::render_pagination;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole listing page.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Section tabs]
/// [Border]
/// [Category chips - one or more lines]
/// [Sort options]
/// [Border]
/// [Card grid or empty state]
/// [Pager]
/// [Border]
/// [Footer]
/// ```
///
/// The pager, bottom border and footer are pinned to the last three rows.
pub fn render_page(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_sections(current_row, &vm.sections, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_category_lines(current_row, &vm.category_lines, theme, cols);
    current_row = render_sort_bar(current_row, &vm.sort_options, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_grid(current_row, &vm.grid, theme);
    }

    let footer_row = rows.max(current_row + 3);
    render_pagination(footer_row - 2, &vm.pagination, theme, cols);
    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
