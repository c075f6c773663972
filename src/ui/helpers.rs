//! Shared rendering utilities and helpers.
//!
//! Layout here is measured in terminal display columns, not bytes or chars: the
//! catalog is mostly CJK text, where every glyph occupies two columns. All width
//! math goes through `unicode-width`.
//!
//! # Example
//!
//! ```rust
//! use foodgrid::ui::helpers::{display_width, truncate_to_width};
//!
//! assert_eq!(display_width("火锅"), 4);
//! assert_eq!(truncate_to_width("宽窄巷子张老二凉粉", 7), "宽窄巷…");
//! ```

use crate::ui::viewmodel::TabItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns a card spends on borders, inner padding and the gutter to its right.
pub const CARD_CHROME_WIDTH: usize = 5;

/// Gap between adjacent chips on one line.
pub const TAB_GAP: usize = 1;

const ELLIPSIS: char = '…';

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in terminal columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Shortens `text` to at most `width` columns, ending in `…` when cut.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    with_ellipsis(text, width)
}

/// Cuts `text` so that it plus a trailing `…` fits in `width` columns.
fn with_ellipsis(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}

/// Right-pads `text` with spaces to exactly `width` columns.
///
/// Text already wider than `width` is returned unchanged.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let w = display_width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(w)))
}

/// Wraps `text` into lines of at most `width` columns, keeping at most
/// `max_lines` lines. When text is dropped the last line ends in `…`.
///
/// Wrapping is per glyph, which suits unspaced CJK prose.
#[must_use]
pub fn wrap_to_width(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return vec![];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for c in text.chars() {
        let w = char_width(c);
        if used + w > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(c);
        used += w;
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = with_ellipsis(last, width);
        }
    }
    lines
}

/// Columns one chip occupies: the label plus a space either side.
#[must_use]
pub fn tab_width(tab: &TabItem) -> usize {
    display_width(&tab.label) + 2
}

/// Greedily packs chips into lines no wider than `width`.
///
/// A chip wider than the pane gets a line of its own.
#[must_use]
pub fn wrap_tabs(tabs: Vec<TabItem>, width: usize) -> Vec<Vec<TabItem>> {
    let mut lines: Vec<Vec<TabItem>> = Vec::new();
    let mut current: Vec<TabItem> = Vec::new();
    let mut used = 0;

    for tab in tabs {
        let w = tab_width(&tab);
        let needed = if current.is_empty() { w } else { used + TAB_GAP + w };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            used = w;
        } else {
            used = needed;
        }
        current.push(tab);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cards per grid row for a pane `cols` wide.
#[must_use]
pub const fn grid_columns(cols: usize) -> usize {
    match cols {
        0..=47 => 1,
        48..=95 => 2,
        96..=127 => 3,
        _ => 4,
    }
}

/// Five-cell star bar for a 0-5 rating, rounded to the nearest half star.
#[must_use]
pub fn rating_stars(rating: f32) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let halves = (rating.clamp(0.0, 5.0) * 2.0).round() as usize;
    let full = halves / 2;
    let half = halves % 2;
    format!("{}{}{}", "★".repeat(full), "½".repeat(half), "☆".repeat(5 - full - half))
}

/// Host part of an http(s) URL, or the input when it has no scheme.
#[must_use]
pub fn url_host(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.split('/').next().unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(label: &str) -> TabItem {
        TabItem {
            label: label.to_string(),
            is_active: false,
        }
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width("BLUE"), 4);
        assert_eq!(display_width("¥68/人"), 6);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("火锅", 4), "火锅");
        assert_eq!(truncate_to_width("BLUE CARIBOU CAFE", 8), "BLUE CA…");
        assert_eq!(truncate_to_width("火锅", 0), "");
        assert_eq!(truncate_to_width("火锅", 2), "…");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad_to_width("火锅", 6), "火锅  ");
        assert_eq!(pad_to_width("火锅", 3), "火锅");
    }

    #[test]
    fn test_wrap_clamps_lines_with_ellipsis() {
        let lines = wrap_to_width("成都特色小吃，值得一试，传统风味，价格实惠", 10, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "成都特色小");
        assert!(lines[1].ends_with('…'));
        assert!(lines.iter().all(|l| display_width(l) <= 10));
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        assert_eq!(wrap_to_width("好吃", 10, 2), vec!["好吃".to_string()]);
        assert!(wrap_to_width("好吃", 0, 2).is_empty());
    }

    #[test]
    fn test_wrap_tabs_packs_greedily() {
        let lines = wrap_tabs(vec![tab("全部"), tab("中餐"), tab("火锅")], 13);
        let labels: Vec<Vec<&str>> = lines
            .iter()
            .map(|l| l.iter().map(|t| t.label.as_str()).collect())
            .collect();
        assert_eq!(labels, vec![vec!["全部", "中餐"], vec!["火锅"]]);

        let oversized = wrap_tabs(vec![tab("酒馆/酒吧/居酒屋"), tab("海鲜")], 4);
        assert_eq!(oversized.len(), 2);
    }

    #[test]
    fn test_grid_breakpoints() {
        assert_eq!(grid_columns(30), 1);
        assert_eq!(grid_columns(48), 2);
        assert_eq!(grid_columns(100), 3);
        assert_eq!(grid_columns(200), 4);
    }

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(4.5), "★★★★½");
        assert_eq!(rating_stars(4.8), "★★★★★");
        assert_eq!(rating_stars(0.0), "☆☆☆☆☆");
        assert_eq!(rating_stars(9.0), "★★★★★");
    }

    #[test]
    fn test_url_host() {
        assert_eq!(url_host("https://images.unsplash.com/photo-1"), "images.unsplash.com");
        assert_eq!(url_host("plain"), "plain");
    }
}
