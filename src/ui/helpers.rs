//! Shared rendering utilities.
//!
//! Card names, labels and sample text are mostly Hangul, which occupies two
//! terminal columns per syllable. All width math here goes through
//! `unicode-width` so padding and truncation line up on screen.

use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Terminal columns occupied by `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cuts `text` to at most `max` columns, ending in `…` when something was cut.
///
/// ```rust
/// use fontlab::ui::helpers::truncate_to_width;
///
/// assert_eq!(truncate_to_width("그라데이션 플로우", 8), "그라데…");
/// assert_eq!(truncate_to_width("gold", 8), "gold");
/// ```
#[must_use]
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Spaces needed after `text` to fill `width` columns.
#[must_use]
pub fn padding_for(text: &str, width: usize) -> usize {
    width.saturating_sub(display_width(text))
}

/// Inserts `gap` spaces between characters.
#[must_use]
pub fn letter_spaced(text: &str, gap: usize) -> String {
    if gap == 0 {
        return text.to_string();
    }
    let spacer = " ".repeat(gap);
    let mut out = String::with_capacity(text.len() * (gap + 1));
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push_str(&spacer);
        }
        out.push(c);
    }
    out
}

/// Prints `text` with the character range `range` highlighted as a search hit.
///
/// `restore` is re-emitted after the highlight so the rest of the line keeps
/// its original color.
pub fn render_highlighted_text(text: &str, range: Option<(usize, usize)>, theme: &Theme, restore: &str) {
    let Some((start, end)) = range else {
        print!("{text}");
        return;
    };

    let chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = end.clamp(start, chars.len());

    let before: String = chars[..start].iter().collect();
    let hit: String = chars[start..end].iter().collect();
    let after: String = chars[end..].iter().collect();

    print!("{before}");
    print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
    print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
    print!("{hit}");
    print!("{}", Theme::reset());
    print!("{restore}");
    print!("{after}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_is_double_width() {
        assert_eq!(display_width("안녕"), 4);
        assert_eq!(display_width("3D 엠보스"), 9);
    }

    #[test]
    fn truncation_respects_wide_chars() {
        assert_eq!(truncate_to_width("안녕하세요", 5), "안녕…");
        assert_eq!(truncate_to_width("안녕하세요", 10), "안녕하세요");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn spacing_goes_between_letters_only() {
        assert_eq!(letter_spaced("abc", 1), "a b c");
        assert_eq!(letter_spaced("안녕", 2), "안  녕");
        assert_eq!(letter_spaced("abc", 0), "abc");
    }

    #[test]
    fn padding_counts_columns() {
        assert_eq!(padding_for("레트로", 10), 4);
        assert_eq!(padding_for("too long", 3), 0);
    }
}
