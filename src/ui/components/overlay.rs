//! Detail overlay renderer, drawn over the gallery.

use crate::ui::helpers::{padding_for, position_cursor};
use crate::ui::layout::OVERLAY_HINT;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::OverlayView;

/// One row of the overlay box, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
enum OverlayRow<'a> {
    TopBorder,
    Title(&'a str),
    Rule,
    Code(&'a str),
    Hint(String),
    BottomBorder,
}

/// Order in which chrome rows give way on short panes.
const fn drop_rank(row: &OverlayRow<'_>) -> Option<u8> {
    match row {
        OverlayRow::Rule => Some(0),
        OverlayRow::Hint(_) => Some(1),
        OverlayRow::BottomBorder => Some(2),
        OverlayRow::TopBorder => Some(3),
        OverlayRow::Title(_) | OverlayRow::Code(_) => None,
    }
}

/// Rows to draw for `overlay`, never more than its frame is tall.
///
/// Code lines already fit the frame. When the pane is too short for the
/// chrome, the rule goes first, then the hint, then the borders; the title
/// is kept longest.
fn plan_rows(overlay: &OverlayView) -> Vec<OverlayRow<'_>> {
    let hint = if overlay.is_clipped {
        format!("… {OVERLAY_HINT}")
    } else {
        OVERLAY_HINT.to_string()
    };

    let mut rows = vec![
        OverlayRow::TopBorder,
        OverlayRow::Title(overlay.title.as_str()),
        OverlayRow::Rule,
    ];
    rows.extend(overlay.code_lines.iter().map(|line| OverlayRow::Code(line.as_str())));
    rows.push(OverlayRow::Hint(hint));
    rows.push(OverlayRow::BottomBorder);

    let height = overlay.frame.height;
    for rank in 0..4 {
        if rows.len() <= height {
            break;
        }
        rows.retain(|row| drop_rank(row) != Some(rank));
    }
    rows.truncate(height);
    rows
}

/// Draws the overlay box: title, rule, style code, and key hint.
pub fn render_overlay(overlay: &OverlayView, theme: &Theme) {
    let frame = overlay.frame;
    let inner = frame.inner_width();
    let border = Theme::fg(&theme.colors.accent);
    let edge = "─".repeat(frame.width.saturating_sub(2));
    let title_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    let code_style = Theme::fg(&theme.colors.code_fg);
    let hint_style = Theme::fg(&theme.colors.text_dim);

    let line = |text: &str, style: &str| {
        print!("{border}│ {}", Theme::reset());
        print!("{style}{text}{}", Theme::reset());
        print!("{}", " ".repeat(padding_for(text, inner)));
        print!("{border} │{}", Theme::reset());
    };

    for (offset, row) in plan_rows(overlay).iter().enumerate() {
        position_cursor(frame.top + offset, frame.left);
        match row {
            OverlayRow::TopBorder => print!("{border}╭{edge}╮{}", Theme::reset()),
            OverlayRow::Title(title) => line(*title, &title_style),
            OverlayRow::Rule => print!("{border}├{edge}┤{}", Theme::reset()),
            OverlayRow::Code(code) => line(*code, &code_style),
            OverlayRow::Hint(hint) => line(hint.as_str(), &hint_style),
            OverlayRow::BottomBorder => print!("{border}╰{edge}╯{}", Theme::reset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::OverlayFrame;

    fn view(height: usize, code_lines: &[&str]) -> OverlayView {
        OverlayView {
            title: "글리치 - CSS 코드".to_string(),
            code_lines: code_lines.iter().map(ToString::to_string).collect(),
            is_clipped: false,
            frame: OverlayFrame {
                top: 1,
                left: 1,
                width: 40,
                height,
            },
        }
    }

    #[test]
    fn roomy_frame_draws_full_chrome() {
        let overlay = view(6, &["color: red;"]);
        assert_eq!(
            plan_rows(&overlay),
            vec![
                OverlayRow::TopBorder,
                OverlayRow::Title("글리치 - CSS 코드"),
                OverlayRow::Rule,
                OverlayRow::Code("color: red;"),
                OverlayRow::Hint(OVERLAY_HINT.to_string()),
                OverlayRow::BottomBorder,
            ]
        );
    }

    #[test]
    fn short_frames_never_overflow() {
        for height in 0..5 {
            let overlay = view(height, &[]);
            let rows = plan_rows(&overlay);
            assert_eq!(rows.len(), height, "height {height}");
        }
    }

    #[test]
    fn title_outlives_the_rest_of_the_chrome() {
        assert_eq!(
            plan_rows(&view(3, &[])),
            vec![
                OverlayRow::TopBorder,
                OverlayRow::Title("글리치 - CSS 코드"),
                OverlayRow::BottomBorder,
            ]
        );
        assert_eq!(plan_rows(&view(1, &[])), vec![OverlayRow::Title("글리치 - CSS 코드")]);
    }

    #[test]
    fn clipped_code_marks_the_hint() {
        let mut overlay = view(6, &["a"]);
        overlay.is_clipped = true;
        assert!(plan_rows(&overlay).contains(&OverlayRow::Hint(format!("… {OVERLAY_HINT}"))));
    }
}
