//! Card grid renderer.
//!
//! Each card is drawn as a rounded box:
//!
//! ```text
//! ╭──────────────────────────────╮
//! │ 네온 글로우            레트로 │
//! │ 안녕하세요                   │  ← preview, styled by effect
//! │                              │  ← echo layer (glitch only)
//! │ 40px               ⏎ CSS 보기 │
//! ╰──────────────────────────────╯
//! ```

use crate::ui::effects::{effect_for, ramp_color, Effect};
use crate::ui::helpers::{
    display_width, padding_for, position_cursor, render_highlighted_text, truncate_to_width,
};
use crate::ui::layout::{CARD_GAP, CARD_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardView, UIViewModel};

/// Label of the detail trigger on every card.
const TRIGGER_LABEL: &str = "⏎ CSS 보기";

/// Renders the visible cards row-major from `top`, stopping before `limit`.
pub fn render_grid(top: usize, limit: usize, vm: &UIViewModel, theme: &Theme) {
    for (i, card) in vm.cards.iter().enumerate() {
        let row = top + (i / vm.columns) * CARD_HEIGHT;
        if row + CARD_HEIGHT > limit {
            break;
        }
        let col = 1 + (i % vm.columns) * (vm.card_width + CARD_GAP);
        render_card(row, col, vm.card_width, card, theme);
    }
}

fn render_card(row: usize, col: usize, width: usize, card: &CardView, theme: &Theme) {
    let inner = width.saturating_sub(4);
    let border = if card.is_selected {
        Theme::fg(&theme.colors.accent)
    } else {
        Theme::fg(&theme.colors.border)
    };
    let edge = "─".repeat(width.saturating_sub(2));

    position_cursor(row, col);
    print!("{border}╭{edge}╮{}", Theme::reset());

    // Name and category label.
    let label_width = display_width(card.category_label);
    let name = truncate_to_width(&card.name, inner.saturating_sub(label_width + 1));
    let name_style = if card.is_selected {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    position_cursor(row + 1, col);
    print!("{border}│ {}", Theme::reset());
    print!("{name_style}");
    // A truncated name drops the highlight.
    let highlight = card.highlight.filter(|_| name == card.name);
    render_highlighted_text(&name, highlight, theme, &name_style);
    print!("{}", Theme::reset());
    print!(
        "{}",
        " ".repeat(inner.saturating_sub(display_width(&name) + label_width))
    );
    print!("{}{}", Theme::fg(&theme.colors.text_dim), card.category_label);
    print!("{border} │{}", Theme::reset());

    // Preview and echo layer.
    let effect = effect_for(card.style_class);
    position_cursor(row + 2, col);
    print!("{border}│{}", Theme::reset());
    render_preview(&card.preview_text, &effect, theme, inner);
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 3, col);
    print!("{border}│{}", Theme::reset());
    match (&card.echo_text, effect.echo) {
        (Some(echo), Some(colors)) => render_echo(echo, colors, theme, inner),
        _ => {
            print!("{}", Theme::bg(&theme.colors.preview_bg));
            print!("{}", " ".repeat(inner + 2));
            print!("{}", Theme::reset());
        }
    }
    print!("{border}│{}", Theme::reset());

    // Size readout and detail trigger.
    let trigger_style = if card.is_selected {
        Theme::fg(&theme.colors.accent)
    } else {
        Theme::fg(&theme.colors.text_dim)
    };
    position_cursor(row + 4, col);
    print!("{border}│ {}", Theme::reset());
    print!("{}{}", Theme::fg(&theme.colors.text_dim), card.size_readout);
    let used = card.size_readout.len() + display_width(TRIGGER_LABEL);
    if used <= inner {
        print!("{}", " ".repeat(inner - used));
        print!("{trigger_style}{TRIGGER_LABEL}");
    } else {
        print!("{}", " ".repeat(inner.saturating_sub(card.size_readout.len())));
    }
    print!("{border} │{}", Theme::reset());

    position_cursor(row + 5, col);
    print!("{border}╰{edge}╯{}", Theme::reset());
}

/// Draws preview text on the stage background, one color per character
/// along the effect's ramp.
fn render_preview(text: &str, effect: &Effect, theme: &Theme, inner: usize) {
    print!("{} ", Theme::bg(&theme.colors.preview_bg));
    let attributes = sgr_attributes(effect);
    let len = text.chars().count();

    for (i, c) in text.chars().enumerate() {
        let color = ramp_color(effect.ramp, i, len).map_or_else(
            || Theme::fg(&theme.colors.text_normal),
            Theme::fg_rgb,
        );
        print!("{attributes}{color}{c}");
    }

    print!("{}", Theme::reset());
    print!("{}", Theme::bg(&theme.colors.preview_bg));
    print!("{} ", " ".repeat(padding_for(text, inner)));
    print!("{}", Theme::reset());
}

/// Echo layer shifted one column right, alternating the two split colors.
fn render_echo(text: &str, (left, right): (&str, &str), theme: &Theme, inner: usize) {
    print!("{}  ", Theme::bg(&theme.colors.preview_bg));
    let shown = truncate_to_width(text, inner.saturating_sub(1));
    for (i, c) in shown.chars().enumerate() {
        let color = if i % 2 == 0 { left } else { right };
        print!("{}{}{c}", Theme::dim(), Theme::fg(color));
    }
    print!("{}", Theme::reset());
    print!("{}", Theme::bg(&theme.colors.preview_bg));
    print!("{} ", " ".repeat(padding_for(&shown, inner.saturating_sub(1))));
    print!("{}", Theme::reset());
}

fn sgr_attributes(effect: &Effect) -> String {
    let mut out = String::new();
    if effect.bold {
        out.push_str(Theme::bold());
    }
    if effect.dim {
        out.push_str(Theme::dim());
    }
    if effect.italic {
        out.push_str(Theme::italic());
    }
    if effect.underline {
        out.push_str(Theme::underline());
    }
    out
}
