//! Search and sample-text fields plus the size readout.

use crate::ui::helpers::{display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldInfo, UIViewModel};

/// Columns reserved for the size readout at the end of the line.
const SIZE_SLOT: usize = 18;

/// Renders both fields and the size readout on one line.
///
/// ```text
///  검색 (/) [네온▏          ]  샘플 (e) [안녕하세요     ]  크기 (-/+) 40px
/// ```
pub fn render_fields(row: usize, vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let field_width = (cols.saturating_sub(SIZE_SLOT) / 2).max(12);

    position_cursor(row, 1);
    print!(" ");
    render_field(&vm.search_field, field_width.saturating_sub(1), theme);
    render_field(&vm.sample_field, field_width, theme);

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" 크기 (-/+) ");
    print!("{}", Theme::reset());
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", vm.size_readout);
    print!("{}", Theme::reset());

    let used = 1 + field_width.saturating_sub(1) + field_width + 12 + vm.size_readout.len();
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

/// Draws one `label (key) [value]` field exactly `width` columns wide.
fn render_field(field: &FieldInfo, width: usize, theme: &Theme) {
    let label = format!("{} ({}) ", field.label, field.hotkey);
    let label_width = display_width(&label);
    // Brackets, cursor cell and trailing gap.
    let inner = width.saturating_sub(label_width + 5);

    let border = if field.is_focused {
        &theme.colors.field_focus_border
    } else {
        &theme.colors.field_border
    };

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{label}");
    print!("{}[", Theme::fg(border));

    let (text, style) = if field.value.is_empty() {
        (field.placeholder.as_str(), Theme::fg(&theme.colors.text_dim))
    } else {
        (field.value.as_str(), Theme::fg(&theme.colors.text_normal))
    };
    // Keep the end of long input visible while typing.
    let shown = if field.is_focused && display_width(text) > inner {
        tail_to_width(text, inner)
    } else {
        truncate_to_width(text, inner)
    };

    print!("{style}{shown}");
    let cursor = if field.is_focused { "▏" } else { " " };
    print!("{}{cursor}", Theme::fg(border));
    print!("{}", " ".repeat(inner.saturating_sub(display_width(&shown))));
    print!("]{}  ", Theme::reset());
}

/// Last characters of `text` that fit in `max` columns.
fn tail_to_width(text: &str, max: usize) -> String {
    let mut used = 0;
    let mut tail: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = display_width(c.encode_utf8(&mut [0; 4]));
        if used + w > max {
            break;
        }
        used += w;
        tail.push(c);
    }
    tail.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_keeps_latest_input() {
        assert_eq!(tail_to_width("안녕하세요", 4), "세요");
        assert_eq!(tail_to_width("abc", 10), "abc");
    }
}
