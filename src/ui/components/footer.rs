//! Footer help bar.

use super::render_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders keybinding hints centered at `row`, truncated on narrow panes.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    render_centered(row, &footer.keybindings, &Theme::fg(&theme.colors.text_dim), cols);
}
