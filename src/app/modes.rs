//! Input mode state machine.
//!
//! The gallery has two text fields (search and sample text). While one of
//! them is focused, printable keys are typed into it; otherwise keys are
//! gallery commands. The detail overlay is tracked separately in
//! [`DetailOverlay`](super::overlay::DetailOverlay) because it can be open
//! regardless of how it was reached.

/// Text field that can receive typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    /// Free-text filter over names and category labels.
    Search,
    /// Text rendered inside every preview.
    SampleText,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are gallery commands (navigate, open, size, theme, ...).
    #[default]
    Normal,

    /// Keys are typed into the given field; `Enter`/`Esc` leave the field.
    Editing(EditField),
}

impl InputMode {
    /// Returns `true` if `field` currently has focus.
    #[must_use]
    pub fn is_editing(self, field: EditField) -> bool {
        self == Self::Editing(field)
    }
}
