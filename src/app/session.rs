//! User-controlled view parameters for the lifetime of the plugin pane.

use crate::domain::{CategoryFilter, ThemePreference};

/// Placeholder rendered in previews while the sample field is empty.
pub const DEFAULT_SAMPLE_TEXT: &str = "안녕하세요";

/// Initial preview size in pixels.
pub const DEFAULT_SAMPLE_SIZE: u32 = 40;

/// Bounds and step of the size control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            min: 16,
            max: 120,
            step: 4,
        }
    }
}

impl SizeRange {
    /// Builds a range, swapping inverted bounds and forcing a non-zero step.
    #[must_use]
    pub fn new(min: u32, max: u32, step: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            step: step.max(1),
        }
    }

    #[must_use]
    pub fn clamp(self, px: u32) -> u32 {
        px.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn step_up(self, px: u32) -> u32 {
        self.clamp(px.saturating_add(self.step))
    }

    #[must_use]
    pub fn step_down(self, px: u32) -> u32 {
        self.clamp(px.saturating_sub(self.step))
    }
}

/// Mutable session state owned by the controller.
///
/// Raw field contents (`search_input`, `sample_input`) are kept next to the
/// values the gallery actually uses, because the fields display what was
/// typed while filtering and previews use normalized values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Active category tab.
    pub active_category: CategoryFilter,
    /// Search field contents as typed.
    pub search_input: String,
    /// Lowercased search text used by the filter.
    pub search_text: String,
    /// Sample field contents as typed.
    pub sample_input: String,
    /// Text shown in previews; the placeholder when `sample_input` is empty.
    pub sample_text: String,
    /// Placeholder used when the sample field is empty.
    pub placeholder: String,
    /// Preview size in pixels.
    pub sample_size: u32,
    /// Active palette.
    pub theme: ThemePreference,
}

impl SessionState {
    #[must_use]
    pub fn new(placeholder: impl Into<String>, sample_size: u32, theme: ThemePreference) -> Self {
        let placeholder = placeholder.into();
        Self {
            active_category: CategoryFilter::All,
            search_input: String::new(),
            search_text: String::new(),
            sample_input: String::new(),
            sample_text: placeholder.clone(),
            placeholder,
            sample_size,
            theme,
        }
    }

    /// Stores the search field contents and its lowercased form.
    pub fn set_search_input(&mut self, raw: String) {
        self.search_text = raw.to_lowercase();
        self.search_input = raw;
    }

    /// Stores the sample field contents, falling back to the placeholder.
    pub fn set_sample_input(&mut self, raw: String) {
        self.sample_text = if raw.is_empty() {
            self.placeholder.clone()
        } else {
            raw.clone()
        };
        self.sample_input = raw;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_TEXT, DEFAULT_SAMPLE_SIZE, ThemePreference::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_lowercased_but_input_is_kept() {
        let mut session = SessionState::default();
        session.set_search_input("Neon 3D".to_string());
        assert_eq!(session.search_input, "Neon 3D");
        assert_eq!(session.search_text, "neon 3d");
    }

    #[test]
    fn empty_sample_reverts_to_placeholder() {
        let mut session = SessionState::default();
        session.set_sample_input("Hello".to_string());
        assert_eq!(session.sample_text, "Hello");
        session.set_sample_input(String::new());
        assert_eq!(session.sample_text, DEFAULT_SAMPLE_TEXT);
        assert!(session.sample_input.is_empty());
    }

    #[test]
    fn size_range_clamps_and_steps() {
        let range = SizeRange::new(20, 60, 8);
        assert_eq!(range.clamp(5), 20);
        assert_eq!(range.step_up(56), 60);
        assert_eq!(range.step_down(24), 20);
        assert_eq!(SizeRange::new(60, 20, 0), SizeRange { min: 20, max: 60, step: 1 });
    }
}
