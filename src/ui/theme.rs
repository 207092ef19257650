//! Theme management and ANSI escape sequence generation.
//!
//! The gallery has a light and a dark palette; the theme toggle switches
//! between them. Both are Catppuccin variants embedded at compile time, and a
//! custom TOML file can replace them.
//!
//! # Built-in Themes
//!
//! - `catppuccin-latte`: light palette (default for light mode)
//! - `catppuccin-mocha`: dark palette (default for dark mode)
//! - `catppuccin-frappe`, `catppuccin-macchiato`: alternative dark palettes
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! field_border = "#6c7086"
//! field_focus_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! accent = "#cba6f7"
//! preview_bg = "#181825"
//! code_fg = "#a6e3a1"
//! toast_fg = "#1e1e2e"
//! toast_bg = "#a6e3a1"
//! ```

use crate::domain::error::{FontlabError, Result};
use crate::domain::ThemePreference;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (`"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<String>,

    /// Active tab and selected card foreground.
    pub selection_fg: String,
    /// Active tab and selected card background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text (category labels, footer, readouts).
    pub text_dim: String,

    /// Separator lines and unselected card borders.
    pub border: String,

    /// Border of an unfocused input field.
    pub field_border: String,
    /// Border of the focused input field.
    pub field_focus_border: String,

    /// Search hit highlight foreground.
    pub match_highlight_fg: String,
    /// Search hit highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Selected card border and overlay frame.
    pub accent: String,
    /// Background behind previews, so light-on-dark presets stay legible.
    pub preview_bg: String,
    /// Style code text in the detail overlay.
    pub code_fg: String,

    pub toast_fg: String,
    pub toast_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`FontlabError::Theme`] if the file cannot be read or does not
    /// parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FontlabError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| FontlabError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Accepts `#rrggbb` or `rrggbb`; anything else becomes white.
    #[must_use]
    pub fn rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    ///
    /// ```rust
    /// use fontlab::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::fg_rgb(Self::rgb(hex))
    }

    /// ANSI 24-bit foreground escape for an RGB tuple.
    #[must_use]
    pub fn fg_rgb((r, g, b): (u8, u8, u8)) -> String {
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default dark theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

/// The pair of palettes the theme toggle switches between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemeSet {
    /// Palette for a preference.
    #[must_use]
    pub const fn for_preference(&self, preference: ThemePreference) -> &Theme {
        match preference {
            ThemePreference::Light => &self.light,
            ThemePreference::Dark => &self.dark,
        }
    }

    /// Resolves both palettes from configuration.
    ///
    /// A `theme_file` replaces both palettes. Otherwise each mode uses its
    /// named built-in theme, falling back to Latte/Mocha when the name is
    /// missing or unknown.
    #[must_use]
    pub fn resolve(light_name: Option<&str>, dark_name: Option<&str>, theme_file: Option<&str>) -> Self {
        if let Some(path) = theme_file {
            match Theme::from_file(path) {
                Ok(theme) => {
                    return Self {
                        light: theme.clone(),
                        dark: theme,
                    }
                }
                Err(e) => {
                    tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using built-in themes");
                }
            }
        }

        let named = |name: Option<&str>, fallback: &str| {
            name.and_then(|n| {
                let theme = Theme::from_name(n);
                if theme.is_none() {
                    tracing::debug!(theme_name = %n, "unknown theme name, using default");
                }
                theme
            })
            .or_else(|| Theme::from_name(fallback))
            .unwrap_or_default()
        };

        Self {
            light: named(light_name, "catppuccin-latte"),
            dark: named(dark_name, "catppuccin-mocha"),
        }
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}
