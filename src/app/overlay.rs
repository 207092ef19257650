//! Detail overlay state machine.
//!
//! ```text
//! Closed ──open(d)──▶ Open(d)
//!   ▲                   │
//!   └── close / click outside / Esc
//! ```
//!
//! While open, the overlay shows the descriptor's style code verbatim and the
//! gallery behind it does not scroll or move its selection.

use crate::domain::StyleDescriptor;

/// Whether the detail overlay is showing, and for which preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailOverlay {
    #[default]
    Closed,
    Open(&'static StyleDescriptor),
}

impl DetailOverlay {
    /// Shows `descriptor`, replacing whatever was open.
    pub fn open(&mut self, descriptor: &'static StyleDescriptor) {
        tracing::debug!(style_id = descriptor.id, "detail overlay opened");
        *self = Self::Open(descriptor);
    }

    /// Closes the overlay. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        match std::mem::take(self) {
            Self::Open(descriptor) => {
                tracing::debug!(style_id = descriptor.id, "detail overlay closed");
                true
            }
            Self::Closed => false,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The preset being shown, if any.
    #[must_use]
    pub const fn descriptor(&self) -> Option<&'static StyleDescriptor> {
        match self {
            Self::Open(descriptor) => Some(*descriptor),
            Self::Closed => None,
        }
    }

    /// Style code currently on display; this is what the copy action copies.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        self.descriptor().map(|d| d.raw_style_code)
    }
}

/// Overlay heading for a preset, e.g. `"네온 글로우 - CSS 코드"`.
#[must_use]
pub fn overlay_title(descriptor: &StyleDescriptor) -> String {
    format!("{} - CSS 코드", descriptor.display_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    #[test]
    fn open_then_close() {
        let arcade = catalog::find_by_id("arcade").unwrap();
        let mut overlay = DetailOverlay::default();
        assert!(!overlay.is_open());

        overlay.open(arcade);
        assert!(overlay.is_open());
        assert_eq!(overlay.code(), Some(arcade.raw_style_code));
        assert_eq!(overlay_title(arcade), "아케이드 픽셀 - CSS 코드");

        assert!(overlay.close());
        assert!(!overlay.close());
        assert_eq!(overlay.descriptor(), None);
    }

    #[test]
    fn reopening_switches_descriptor() {
        let mut overlay = DetailOverlay::default();
        overlay.open(catalog::find_by_id("ice").unwrap());
        overlay.open(catalog::find_by_id("fire").unwrap());
        assert_eq!(overlay.descriptor().map(|d| d.id), Some("fire"));
    }
}
