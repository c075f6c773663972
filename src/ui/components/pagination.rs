//! Pager renderer.
//!
//! Draws `‹  1 2 3  ›   共 6 条` with the current page highlighted. The arrows
//! dim when there is no page in that direction. A page number past the last
//! page (possible after a sort change) is shown on its own after the range.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the pager at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(row: usize, pager: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 1;
    print!(" ");

    used += arrow("‹", pager.current > 1, theme);

    let mut pages: Vec<usize> = (1..=pager.total_pages).collect();
    if pager.current > pager.total_pages {
        pages.push(pager.current);
    }

    for page in pages {
        let label = format!(" {page} ");
        if page == pager.current {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.chip_active_fg));
            print!("{}", Theme::bg(&theme.colors.chip_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{label}");
        print!("{}", Theme::reset());
        used += display_width(&label);
    }

    used += arrow("›", pager.current < pager.total_pages, theme);

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("   {}", pager.summary);
    print!("{}", Theme::reset());
    used += 3 + display_width(&pager.summary);

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

fn arrow(glyph: &str, enabled: bool, theme: &Theme) -> usize {
    if enabled {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    }
    print!(" {glyph} ");
    print!("{}", Theme::reset());
    display_width(glyph) + 2
}
