//! Light/dark theme preference.
//!
//! The preference is the only state that outlives a plugin session. It is
//! stored as a plain `"light"` / `"dark"` string so the preference file stays
//! readable and tolerant of hand edits.

use serde::{Deserialize, Serialize};

/// Which palette the gallery is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The other preference.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value. Anything other than `light`/`dark` is treated
    /// as "no preference".
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Resolves the effective preference: the stored value when present,
    /// otherwise the system default.
    #[must_use]
    pub fn resolve(stored: Option<Self>, system_prefers_dark: bool) -> Self {
        stored.unwrap_or(if system_prefers_dark { Self::Dark } else { Self::Light })
    }
}
