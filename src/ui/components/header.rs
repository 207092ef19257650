//! Header bar: centered title with the result counter, theme on the right.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next row.
///
/// ```text
///                  Fontlab · 25개 스타일                     ☾ 다크
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!("{} · {}개 스타일", header.title, header.result_count);
    let title_width = display_width(&title);
    let theme_width = display_width(header.theme_label) + 1;
    let left = cols.saturating_sub(title_width) / 2;
    let middle = cols.saturating_sub(left + title_width + theme_width);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(left));
    print!("{}{title}{}", Theme::bold(), Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(middle));
    if left + title_width + theme_width <= cols {
        print!("{} ", header.theme_label);
    }

    print!("{}", Theme::reset());
    row + 1
}
