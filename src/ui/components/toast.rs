//! Copy confirmation toast.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToastView;

/// Draws the toast right-aligned on `row`.
pub fn render_toast(row: usize, toast: &ToastView, theme: &Theme, cols: usize) {
    let text = format!(" ✓ {} ", toast.message);
    let col = cols.saturating_sub(display_width(&text) + 1).max(1);

    position_cursor(row, col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.toast_fg));
    print!("{}", Theme::bg(&theme.colors.toast_bg));
    print!("{text}");
    print!("{}", Theme::reset());
}
