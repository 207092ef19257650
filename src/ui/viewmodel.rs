//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed
//! by the renderer. They carry display-ready data only: truncation, window
//! selection and highlight ranges are already applied.

use crate::ui::layout::OverlayFrame;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub tabs: Vec<TabInfo>,
    pub search_field: FieldInfo,
    pub sample_field: FieldInfo,
    /// Size readout next to the fields (`"40px"`).
    pub size_readout: String,

    /// Cards in the visible window, row-major.
    pub cards: Vec<CardView>,
    /// Cards per grid row.
    pub columns: usize,
    /// Width of each card in columns.
    pub card_width: usize,

    /// Shown instead of the grid when no preset matches.
    pub empty_state: Option<EmptyState>,
    pub overlay: Option<OverlayView>,
    pub toast: Option<ToastView>,
    pub footer: FooterInfo,
}

/// Header bar: title plus result counter and active palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Number of presets currently shown.
    pub result_count: usize,
    pub theme_label: &'static str,
}

/// One category tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    /// Digit that selects the tab directly.
    pub hotkey: char,
    pub label: &'static str,
    pub is_active: bool,
}

/// A single-line input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub label: &'static str,
    /// Key that focuses the field.
    pub hotkey: char,
    /// Raw field contents.
    pub value: String,
    /// Dimmed text shown while `value` is empty.
    pub placeholder: String,
    pub is_focused: bool,
}

/// One gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: &'static str,
    pub name: String,
    pub category_label: &'static str,
    pub style_class: &'static str,
    /// Preview text, already letter-spaced and truncated to the card.
    pub preview_text: String,
    /// Echo layer text for layered presets.
    pub echo_text: Option<String>,
    pub size_readout: String,
    pub is_selected: bool,
    /// Search hit in `name`, as a character range.
    pub highlight: Option<(usize, usize)>,
}

/// Detail overlay contents and placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub title: String,
    /// Code lines that fit the frame, in order.
    pub code_lines: Vec<String>,
    /// Whether lines were cut to fit the pane.
    pub is_clipped: bool,
    pub frame: OverlayFrame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub message: String,
}

/// Footer help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown when the filter leaves nothing to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
