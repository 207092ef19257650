//! Empty state shown when the filter leaves no cards.

use super::render_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message two rows below `top` with its subtitle beneath it.
pub fn render_empty_state(top: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    render_centered(top + 2, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered(top + 3, &empty.subtitle, &subtitle_style, cols);
}
