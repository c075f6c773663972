//! Card grid renderer.
//!
//! Draws the windowed cards row-major, `columns` per grid row, each card
//! [`CARD_HEIGHT`] lines tall:
//!
//! ```text
//! ╭──────────────────────╮
//! │ 玉林串串香    ¥68/人 │
//! │ ★★★★½ 4.5  2420人点评│
//! │ 成都大众串串，味道就 │
//! │ 正常吧，很多连锁，…  │
//! │ images.unsplash.com  │
//! │ [导航]  ♡ 收藏       │
//! ╰──────────────────────╯
//! ```

use crate::app::state::CARD_HEIGHT;
use crate::ui::helpers::{display_width, pad_to_width, position_cursor, CARD_CHROME_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, GridInfo};

const NAVIGATE_LABEL: &str = "[导航]";

/// Renders the grid starting at `row`.
///
/// # Returns
///
/// The row after the last drawn card row.
pub fn render_grid(row: usize, grid: &GridInfo, theme: &Theme) -> usize {
    let inner = grid.card_width.saturating_sub(CARD_CHROME_WIDTH);
    let mut current_row = row;

    for card_row in grid.cards.chunks(grid.columns.max(1)) {
        for (column, card) in card_row.iter().enumerate() {
            let col = column * grid.card_width + 1;
            render_card(current_row, col, card, inner, theme);
        }
        current_row += CARD_HEIGHT;
    }
    current_row
}

fn render_card(row: usize, col: usize, card: &CardItem, inner: usize, theme: &Theme) {
    let border = if card.is_selected {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.card_border)
    };

    position_cursor(row, col);
    print!("{border}╭{}╮{}", "─".repeat(inner + 2), Theme::reset());

    let name_pad = inner.saturating_sub(display_width(&card.name) + display_width(&card.price));
    let title = format!(
        "{}{}{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.text_normal),
        card.name,
        " ".repeat(name_pad),
        Theme::fg(&theme.colors.price_fg),
        card.price,
    );
    boxed_line(row + 1, col, &border, &title, display_width(&card.name) + name_pad + display_width(&card.price), inner);

    let rating = format!(
        "{}{} {}{}",
        Theme::fg(&theme.colors.rating_fg),
        card.stars,
        Theme::fg(&theme.colors.text_dim),
        card.reviews,
    );
    boxed_line(row + 2, col, &border, &rating, display_width(&card.stars) + 1 + display_width(&card.reviews), inner);

    for line in 0..2 {
        let text = card.description.get(line).map_or("", String::as_str);
        let styled = format!("{}{}", Theme::fg(&theme.colors.text_normal), text);
        boxed_line(row + 3 + line, col, &border, &styled, display_width(text), inner);
    }

    let image = format!("{}{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), card.image);
    boxed_line(row + 5, col, &border, &image, display_width(&card.image), inner);

    let favorite_color = if card.is_favorite {
        &theme.colors.favorite_fg
    } else {
        &theme.colors.text_normal
    };
    let actions = format!(
        "{}{}  {}{}",
        Theme::fg(&theme.colors.text_normal),
        NAVIGATE_LABEL,
        Theme::fg(favorite_color),
        card.favorite_label,
    );
    boxed_line(
        row + 6,
        col,
        &border,
        &actions,
        display_width(NAVIGATE_LABEL) + 2 + display_width(&card.favorite_label),
        inner,
    );

    position_cursor(row + 7, col);
    print!("{border}╰{}╯{}", "─".repeat(inner + 2), Theme::reset());
}

/// Prints `│ content │`, padding `content` (whose visible width is `visible`)
/// out to `inner` columns.
fn boxed_line(row: usize, col: usize, border: &str, content: &str, visible: usize, inner: usize) {
    position_cursor(row, col);
    print!("{border}│{} ", Theme::reset());
    print!("{content}{}", Theme::reset());
    print!("{}", pad_to_width("", inner.saturating_sub(visible)));
    print!(" {border}│{}", Theme::reset());
}
