//! Screen geometry shared by the renderer and the controller.
//!
//! The controller needs the same numbers the renderer draws with: the grid
//! column count drives up/down navigation, and the overlay frame decides
//! whether a click landed outside the overlay.

use crate::app::overlay::overlay_title;
use crate::domain::StyleDescriptor;
use crate::ui::helpers::display_width;

/// Minimum card width in columns, borders included.
pub const CARD_WIDTH: usize = 34;
/// Card height in rows, borders included.
pub const CARD_HEIGHT: usize = 6;
/// Columns between neighbouring cards.
pub const CARD_GAP: usize = 1;
/// First row of the card grid (1-indexed).
pub const GRID_TOP_ROW: usize = 6;
/// Rows below the grid: border and footer.
pub const BOTTOM_CHROME_ROWS: usize = 2;

/// Cards per grid row for a pane `cols` wide. Always at least one.
#[must_use]
pub const fn grid_columns(cols: usize) -> usize {
    let columns = (cols + CARD_GAP) / (CARD_WIDTH + CARD_GAP);
    if columns == 0 {
        1
    } else {
        columns
    }
}

/// Grid rows that fit in a pane `rows` tall. Always at least one.
#[must_use]
pub const fn grid_rows(rows: usize) -> usize {
    let available = rows.saturating_sub(GRID_TOP_ROW - 1 + BOTTOM_CHROME_ROWS);
    let fit = available / CARD_HEIGHT;
    if fit == 0 {
        1
    } else {
        fit
    }
}

/// Width of each card when `columns` cards share `cols` columns.
#[must_use]
pub fn card_width(cols: usize, columns: usize) -> usize {
    let columns = columns.max(1);
    let gaps = CARD_GAP * (columns - 1);
    (cols.saturating_sub(gaps) / columns).max(8)
}

/// First grid row to draw so that `selected_row` stays visible.
///
/// Keeps the selection near the middle and never scrolls past the last row.
#[must_use]
pub fn first_visible_row(selected_row: usize, total_rows: usize, visible_rows: usize) -> usize {
    if total_rows <= visible_rows {
        return 0;
    }
    selected_row
        .saturating_sub(visible_rows / 2)
        .min(total_rows - visible_rows)
}

/// Placement of the detail overlay; `top`/`left` are 1-indexed like
/// [`position_cursor`](crate::ui::helpers::position_cursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayFrame {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

/// Hint line drawn at the bottom of the overlay.
pub const OVERLAY_HINT: &str = "c: 복사  esc: 닫기";

/// Rows the overlay needs around the code: borders, title, rule, hint.
const OVERLAY_CHROME_ROWS: usize = 5;

impl OverlayFrame {
    /// Centers a frame for `descriptor` in a `rows` x `cols` pane.
    #[must_use]
    pub fn for_descriptor(descriptor: &StyleDescriptor, rows: usize, cols: usize) -> Self {
        let title_width = display_width(&overlay_title(descriptor));
        let code_width = descriptor
            .raw_style_code
            .lines()
            .map(display_width)
            .max()
            .unwrap_or(0);
        let content_width = code_width.max(title_width).max(display_width(OVERLAY_HINT));

        let max_width = cols.saturating_sub(2).max(1);
        let width = (content_width + 4).min(max_width);

        let code_rows = descriptor.raw_style_code.lines().count().max(1);
        let max_height = rows.saturating_sub(2).max(1);
        let height = (code_rows + OVERLAY_CHROME_ROWS).min(max_height);

        Self {
            top: rows.saturating_sub(height) / 2 + 1,
            left: cols.saturating_sub(width) / 2 + 1,
            width,
            height,
        }
    }

    /// Whether the 0-indexed cell (`line`, `column`) lies on or inside the frame.
    #[must_use]
    pub fn contains(&self, line: isize, column: usize) -> bool {
        let Ok(line) = usize::try_from(line) else {
            return false;
        };
        let row = line + 1;
        let col = column + 1;
        row >= self.top
            && row < self.top + self.height
            && col >= self.left
            && col < self.left + self.width
    }

    /// Rows available for code lines inside the frame.
    #[must_use]
    pub const fn code_rows(&self) -> usize {
        self.height.saturating_sub(OVERLAY_CHROME_ROWS)
    }

    /// Columns available for text inside the borders and padding.
    #[must_use]
    pub const fn inner_width(&self) -> usize {
        self.width.saturating_sub(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    #[test]
    fn columns_follow_pane_width() {
        assert_eq!(grid_columns(20), 1);
        assert_eq!(grid_columns(CARD_WIDTH), 1);
        assert_eq!(grid_columns(CARD_WIDTH * 2 + CARD_GAP), 2);
        assert_eq!(grid_columns(120), 3);
    }

    #[test]
    fn rows_never_drop_to_zero() {
        assert_eq!(grid_rows(4), 1);
        assert_eq!(grid_rows(GRID_TOP_ROW - 1 + BOTTOM_CHROME_ROWS + CARD_HEIGHT * 3), 3);
    }

    #[test]
    fn window_keeps_selection_visible() {
        assert_eq!(first_visible_row(0, 10, 3), 0);
        assert_eq!(first_visible_row(5, 10, 3), 4);
        assert_eq!(first_visible_row(9, 10, 3), 7);
        assert_eq!(first_visible_row(4, 2, 3), 0);
    }

    #[test]
    fn overlay_is_centered_and_contains_its_cells() {
        let neon = catalog::find_by_id("neon-glow").unwrap();
        let frame = OverlayFrame::for_descriptor(neon, 40, 120);
        assert_eq!(frame.height, neon.raw_style_code.lines().count() + 5);
        assert!(frame.contains(20, 60));
        assert!(!frame.contains(0, 0));
        assert!(!frame.contains(-1, 60));
        assert!(!frame.contains(20, 119));
    }

    #[test]
    fn overlay_shrinks_to_small_panes() {
        let gold = catalog::find_by_id("gold").unwrap();
        let frame = OverlayFrame::for_descriptor(gold, 10, 30);
        assert!(frame.height <= 8);
        assert!(frame.width <= 28);
        assert!(frame.top >= 1 && frame.left >= 1);
    }
}
