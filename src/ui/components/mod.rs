//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns the
//! next free row, so [`render_gallery`] reads top to bottom like the screen:
//!
//! ```text
//! [Header: title · count · theme]
//! [Border]
//! [Category tabs]
//! [Search field | Sample field | Size]
//! [Border]
//! [Card grid or empty state]
//! [Border]
//! [Footer]
//! ```
//!
//! The detail overlay and the toast are drawn last, over the gallery.

mod empty;
mod fields;
mod footer;
mod grid;
mod header;
mod overlay;
mod tabs;
mod toast;

use crate::ui::helpers::{display_width, padding_for, position_cursor, truncate_to_width};
use crate::ui::layout::GRID_TOP_ROW;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Prints `text` centered on `row` in `style`, filling the whole line.
fn render_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate_to_width(text, cols);
    let width = display_width(&text);
    let left = cols.saturating_sub(width) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(left));
    print!("{text}");
    print!("{}", " ".repeat(padding_for(&text, cols.saturating_sub(left))));
    print!("{}", Theme::reset());
}

/// Renders the whole gallery screen for a view model.
pub fn render_gallery(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 1;

    current_row = header::render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = tabs::render_tabs(current_row, &vm.tabs, theme, cols);
    current_row = fields::render_fields(current_row, vm, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    debug_assert_eq!(current_row, GRID_TOP_ROW);

    let footer_row = rows.max(GRID_TOP_ROW + 2);
    let bottom_border = footer_row - 1;

    if let Some(empty) = &vm.empty_state {
        empty::render_empty_state(current_row, empty, theme, cols);
    } else {
        grid::render_grid(current_row, bottom_border, vm, theme);
    }

    render_border(bottom_border, &theme.colors.border, cols);
    footer::render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(overlay) = &vm.overlay {
        overlay::render_overlay(overlay, theme);
    }
    if let Some(toast) = &vm.toast {
        toast::render_toast(bottom_border.saturating_sub(1), toast, theme, cols);
    }
}
