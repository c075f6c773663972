//! Header component renderer.
//!
//! Renders the page title bar and the row of section tabs beneath it.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, TabItem};

/// Renders the header title bar at the specified row.
///
/// The title is centered, bold, and padded to the full pane width so an optional
/// header background fills the line.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = display_width(&header.title);
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the section tabs, left-aligned, with the active tab highlighted.
///
/// Tabs that would overflow the pane are dropped.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_sections(row: usize, tabs: &[TabItem], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 1;
    print!(" ");
    for tab in tabs {
        let w = display_width(&tab.label) + 2;
        if used + w > cols {
            break;
        }

        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!(" {} ", tab.label);
        print!("{}", Theme::reset());
        print!(" ");
        used += w + 1;
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
