//! Empty state component renderer.
//!
//! Shown in the grid area when the current page has no cards: either the
//! selected category lists nothing, or the page number is past the last page.

use crate::ui::helpers::{display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message centered horizontally, two rows below `row`.
///
/// # Layout
///
/// ```text
/// [2 blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// The message uses the `empty_state_fg` theme color, the subtitle `text_dim`
/// with dim styling.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    centered_line(row + 2, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    centered_line(row + 3, &empty.subtitle, &subtitle_style, cols);
}

fn centered_line(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate_to_width(text, cols);
    let len = display_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
