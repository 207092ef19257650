//! Fontlab: a Zellij plugin gallery of decorative text-style presets.
//!
//! Fontlab shows a fixed catalog of text styles as a grid of cards and lets
//! the user:
//! - filter by category tab and by a name/label search
//! - type a sample text and resize it, updating every preview in place
//! - open a card's CSS in an overlay and copy it to the clipboard
//! - switch between light and dark palettes, with the choice remembered

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Controller
//! │  - Filter engine                                    │
//! │  - Event handling, overlay, toast                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Gallery       │   │ UI Layer      │   │ Worker Layer  │
//! │ (gallery/)    │   │ (ui/)         │   │ (worker/)     │
//! │ - Surface     │   │ - Components  │   │ - Preferences │
//! │ - Pipeline    │   │ - Themes      │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Storage & Infrastructure                   │
//! │  - Style catalog (domain/)                          │
//! │  - JSON preference store (storage/)                 │
//! │  - Paths, clipboard (infrastructure/)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/fontlab.wasm" {
//!         sample_text "Hello"
//!         sample_size "48"
//!         prefers_color_scheme "dark"
//!         dark_theme "catppuccin-macchiato"
//!         toast_seconds "3"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fontlab::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! assert_eq!(state.gallery.result_count(), 25);
//!
//! for event in [Event::MoveRight, Event::OpenDetail] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert!(state.overlay.is_open());
//! # Ok::<(), fontlab::FontlabError>(())
//! ```

pub mod app;
pub mod domain;
pub mod gallery;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, EditField, Event, InputMode};
pub use domain::{FontlabError, Result, ThemePreference};
pub use ui::Theme;

use app::session::{SessionState, SizeRange, DEFAULT_SAMPLE_SIZE, DEFAULT_SAMPLE_TEXT};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;
use ui::ThemeSet;

/// Plugin configuration parsed from the Zellij layout.
///
/// ```kdl
/// plugin location="file:/path/to/fontlab.wasm" {
///     sample_text "안녕하세요"
///     sample_size "40"
///     size_min "16"
///     size_max "120"
///     size_step "4"
///     prefers_color_scheme "light"
///     light_theme "catppuccin-latte"
///     dark_theme "catppuccin-mocha"
///     theme_file "~/.config/fontlab/theme.toml"
///     toast_seconds "2"
///     trace_level "info"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Placeholder sample text shown while the sample field is empty.
    pub sample_text: String,

    /// Initial preview size in pixels, clamped to the size range.
    pub sample_size: u32,

    pub size_min: u32,
    pub size_max: u32,
    pub size_step: u32,

    /// Host color scheme used when no theme preference is stored.
    pub prefers_dark: bool,

    /// Built-in palette names for each mode.
    pub light_theme: Option<String>,
    pub dark_theme: Option<String>,

    /// Custom TOML palette used for both modes. `~` is expanded.
    pub theme_file: Option<String>,

    /// How long the copy toast stays up.
    pub toast_duration: Duration,

    /// `EnvFilter` directives for tracing. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let range = SizeRange::default();
        Self {
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            size_min: range.min,
            size_max: range.max,
            size_step: range.step,
            prefers_dark: false,
            light_theme: None,
            dark_theme: None,
            theme_file: None,
            toast_duration: Duration::from_secs(2),
            trace_level: None,
        }
    }
}

/// Parses `key` from the map. A missing key is `Ok(None)`.
fn parse_field<T: FromStr>(config: &BTreeMap<String, String>, key: &str) -> Result<Option<T>> {
    config
        .get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| FontlabError::Config(format!("invalid value for {key}: {raw:?}")))
        })
        .transpose()
}

/// Like [`parse_field`], but logs and falls back to `default` on a bad value.
fn field_or<T: FromStr>(config: &BTreeMap<String, String>, key: &str, default: T) -> T {
    match parse_field(config, key) {
        Ok(value) => value.unwrap_or(default),
        Err(e) => {
            tracing::warn!(error = %e, "using default");
            default
        }
    }
}

fn non_empty(config: &BTreeMap<String, String>, key: &str) -> Option<String> {
    config
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

impl Config {
    /// Parses configuration from Zellij's configuration map. Unparseable
    /// values fall back to their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use fontlab::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("sample_size".to_string(), "64".to_string());
    /// map.insert("prefers_color_scheme".to_string(), "dark".to_string());
    /// map.insert("toast_seconds".to_string(), "lots".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.sample_size, 64);
    /// assert!(config.prefers_dark);
    /// assert_eq!(config.toast_duration.as_secs(), 2);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let prefers_dark = match config.get("prefers_color_scheme").map(|s| s.trim()) {
            None => defaults.prefers_dark,
            Some(scheme) => match ThemePreference::parse(scheme) {
                Some(preference) => preference == ThemePreference::Dark,
                None => {
                    tracing::warn!(scheme, "unknown prefers_color_scheme, using light");
                    defaults.prefers_dark
                }
            },
        };

        let toast_seconds = field_or(config, "toast_seconds", defaults.toast_duration.as_secs_f64());
        let toast_duration = Duration::try_from_secs_f64(toast_seconds)
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or(defaults.toast_duration);

        Self {
            sample_text: non_empty(config, "sample_text").unwrap_or(defaults.sample_text),
            sample_size: field_or(config, "sample_size", defaults.sample_size),
            size_min: field_or(config, "size_min", defaults.size_min),
            size_max: field_or(config, "size_max", defaults.size_max),
            size_step: field_or(config, "size_step", defaults.size_step),
            prefers_dark,
            light_theme: non_empty(config, "light_theme"),
            dark_theme: non_empty(config, "dark_theme"),
            theme_file: non_empty(config, "theme_file")
                .map(|path| infrastructure::expand_tilde(&path)),
            toast_duration,
            trace_level: non_empty(config, "trace_level"),
        }
    }

    /// Size bounds described by this configuration.
    #[must_use]
    pub fn size_range(&self) -> SizeRange {
        SizeRange::new(self.size_min, self.size_max, self.size_step)
    }
}

/// Builds the initial application state: full catalog mounted, palette from
/// the system default until the stored preference arrives.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing fontlab plugin");

    let themes = ThemeSet::resolve(
        config.light_theme.as_deref(),
        config.dark_theme.as_deref(),
        config.theme_file.as_deref(),
    );
    let theme = ThemePreference::resolve(None, config.prefers_dark);
    let session = SessionState::new(config.sample_text.clone(), config.sample_size, theme);

    AppState::new(
        session,
        themes,
        config.size_range(),
        config.prefers_dark,
        config.toast_duration,
    )
}
