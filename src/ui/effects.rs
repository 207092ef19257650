//! Terminal stand-ins for the preset visual treatments.
//!
//! A terminal cannot load fonts or draw shadows, so each `style_class` maps to
//! an [`Effect`]: a color ramp spread across the characters of the preview,
//! plus SGR attributes. Colors are taken from the preset's own CSS so the
//! preview reads like the code the overlay shows.

use crate::ui::theme::Theme;

/// How a preview is drawn for one style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    /// Color stops spread across the text; empty means the theme text color.
    pub ramp: &'static [&'static str],
    pub bold: bool,
    pub italic: bool,
    pub dim: bool,
    pub underline: bool,
    /// Renders the text in upper case (`text-transform: uppercase`).
    pub uppercase: bool,
    /// Wide letter spacing in the CSS; adds one column between characters.
    pub spaced: bool,
    /// Colors of the offset echo layer; only layered presets set this.
    pub echo: Option<(&'static str, &'static str)>,
}

impl Effect {
    const PLAIN: Self = Self {
        ramp: &[],
        bold: false,
        italic: false,
        dim: false,
        underline: false,
        uppercase: false,
        spaced: false,
        echo: None,
    };

    const fn ramp(stops: &'static [&'static str]) -> Self {
        Self { ramp: stops, ..Self::PLAIN }
    }

    const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    const fn spaced(self) -> Self {
        Self { spaced: true, ..self }
    }
}

/// Resolves a style class to its effect. Unknown classes draw plain text.
#[must_use]
pub fn effect_for(style_class: &str) -> Effect {
    match style_class {
        "font-neon-glow" => Effect::ramp(&["#ffffff", "#ff00de"]).bold(),
        "font-gradient-flow" => {
            Effect::ramp(&["#ff6b6b", "#feca57", "#48dbfb", "#ff9ff3", "#ff6b6b"]).bold()
        }
        "font-glitch" => Effect {
            echo: Some(("#ff0040", "#00fff9")),
            ..Effect::ramp(&["#ffffff"]).bold()
        },
        "font-retro-sunset" => Effect::ramp(&["#ff6a00", "#ee0979", "#bd00ff"]).bold(),
        "font-emboss" => Effect::ramp(&["#ffffff", "#e0e0e0", "#9e9e9e"]).bold(),
        "font-chalk" => Effect { dim: true, ..Effect::ramp(&["#ffffff"]) }.spaced(),
        "font-gold" => Effect::ramp(&["#f9d423", "#e65c00", "#f9d423", "#e65c00", "#f9d423"]).bold(),
        "font-comic" => Effect::ramp(&["#ffeb3b", "#ff5722", "#e91e63"]).bold(),
        "font-fire" => Effect::ramp(&["#ffff33", "#ffdd33", "#ff8800", "#ff2200"]).bold(),
        "font-ice" => Effect::ramp(&["#e0f7fa", "#80deea", "#4dd0e1", "#00bcd4"]).bold(),
        "font-hologram" => Effect::ramp(&[
            "#ff0000", "#ff7300", "#fffb00", "#48ff00", "#00ffd5", "#002bff", "#7a00ff",
            "#ff00c8",
        ]),
        "font-newspaper" => Effect::ramp(&["#2c2c2c"]).bold(),
        "font-typewriter" => Effect::ramp(&["#333333"]),
        "font-stencil" => Effect { underline: true, ..Effect::PLAIN }.bold().spaced(),
        "font-rainbow-shadow" => Effect::ramp(&[
            "#ff0000", "#ff7700", "#ffdd00", "#00ff00", "#0077ff", "#7700ff", "#ff00ff",
        ])
        .bold(),
        "font-elegant-serif" => Effect { italic: true, ..Effect::PLAIN }.spaced(),
        "font-minimal-sans" => Effect {
            uppercase: true,
            dim: true,
            ..Effect::PLAIN
        }
        .spaced(),
        "font-brush" => Effect::ramp(&["#3b3b3b", "#6b6b6b"]).bold(),
        "font-calligraphy" | "font-sketchy" => Effect { italic: true, ..Effect::PLAIN },
        "font-arcade" => Effect::ramp(&["#00ff00"]).bold().spaced(),
        "font-deep-shadow" => Effect::ramp(&["#ffffff", "#cccccc", "#aaaaaa"]).bold(),
        "font-neon-blue" => Effect::ramp(&["#ffffff", "#00b4ff"]).bold(),
        "font-perspective" => Effect::ramp(&["#cccccc", "#bbbbbb", "#aaaaaa"]).bold(),
        "font-watercolor" => Effect::ramp(&["#ff9a9e", "#fecfef", "#a18cd1"]).bold(),
        _ => Effect::PLAIN,
    }
}

/// Extra columns between characters for a preview size in pixels.
///
/// Terminal cells have one fixed size, so larger previews are drawn with
/// wider letter spacing instead: 16-47 px none, then one more column per
/// 32 px, capped at three.
#[must_use]
pub const fn letter_gap(size_px: u32) -> usize {
    let gap = size_px.saturating_sub(16) / 32;
    if gap > 3 {
        3
    } else {
        gap as usize
    }
}

/// Color of the character at `index` out of `len` along `ramp`.
///
/// Interpolates linearly between neighbouring stops.
#[must_use]
pub fn ramp_color(ramp: &[&str], index: usize, len: usize) -> Option<(u8, u8, u8)> {
    match ramp {
        [] => None,
        [only] => Some(Theme::rgb(only)),
        _ => {
            let segments = ramp.len() - 1;
            let t = if len <= 1 {
                0.0
            } else {
                index as f32 / (len - 1) as f32
            };
            let position = t * segments as f32;
            let lower = (position.floor() as usize).min(segments - 1);
            let fraction = position - lower as f32;
            let (r1, g1, b1) = Theme::rgb(ramp[lower]);
            let (r2, g2, b2) = Theme::rgb(ramp[lower + 1]);
            let mix = |a: u8, b: u8| -> u8 {
                (f32::from(a) + (f32::from(b) - f32::from(a)) * fraction).round() as u8
            };
            Some((mix(r1, r2), mix(g1, g2), mix(b1, b2)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CATALOG;

    #[test]
    fn every_preset_has_a_styled_effect() {
        for descriptor in CATALOG {
            let effect = effect_for(descriptor.style_class);
            assert_ne!(effect, Effect::PLAIN, "{} renders plain", descriptor.id);
        }
    }

    #[test]
    fn only_glitch_layers_an_echo() {
        for descriptor in CATALOG {
            assert_eq!(
                effect_for(descriptor.style_class).echo.is_some(),
                descriptor.requires_echo_attribute
            );
        }
    }

    #[test]
    fn unknown_class_is_plain() {
        assert_eq!(effect_for("font-missing"), Effect::PLAIN);
    }

    #[test]
    fn letter_gap_grows_with_size() {
        assert_eq!(letter_gap(16), 0);
        assert_eq!(letter_gap(40), 0);
        assert_eq!(letter_gap(48), 1);
        assert_eq!(letter_gap(80), 2);
        assert_eq!(letter_gap(120), 3);
    }

    #[test]
    fn ramp_hits_both_ends() {
        let ramp = ["#000000", "#ffffff"];
        assert_eq!(ramp_color(&ramp, 0, 5), Some((0, 0, 0)));
        assert_eq!(ramp_color(&ramp, 4, 5), Some((255, 255, 255)));
        assert_eq!(ramp_color(&ramp, 2, 5), Some((128, 128, 128)));
        assert_eq!(ramp_color(&[], 0, 1), None);
        assert_eq!(ramp_color(&ramp, 0, 1), Some((0, 0, 0)));
    }
}
