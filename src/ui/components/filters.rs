//! Category filter and sort bar renderers.
//!
//! Category chips arrive pre-wrapped from the view model; this module only draws
//! them. The sort bar is a pair of radio options.

use crate::ui::helpers::{display_width, position_cursor, TAB_GAP};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TabItem;

/// Renders wrapped category chip lines starting at `row`.
///
/// # Returns
///
/// The next available row position (row + number of lines)
pub fn render_category_lines(row: usize, lines: &[Vec<TabItem>], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for line in lines {
        position_cursor(current_row, 1);
        let mut used = 0;
        for (i, chip) in line.iter().enumerate() {
            if i > 0 {
                print!("{}", " ".repeat(TAB_GAP));
                used += TAB_GAP;
            }
            render_chip(chip, theme);
            used += display_width(&chip.label) + 2;
        }
        print!("{}", " ".repeat(cols.saturating_sub(used)));
        current_row += 1;
    }
    current_row
}

fn render_chip(chip: &TabItem, theme: &Theme) {
    if chip.is_active {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.chip_active_fg));
        print!("{}", Theme::bg(&theme.colors.chip_active_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!(" {} ", chip.label);
    print!("{}", Theme::reset());
}

/// Renders the sort radio options as `(•) label   ( ) label`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_sort_bar(row: usize, options: &[TabItem], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 1;
    print!(" ");
    for option in options {
        let marker = if option.is_active { "(•)" } else { "( )" };
        if option.is_active {
            print!("{}", Theme::fg(&theme.colors.chip_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{marker} {}", option.label);
        print!("{}", Theme::reset());
        print!("   ");
        used += display_width(marker) + 1 + display_width(&option.label) + 3;
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
