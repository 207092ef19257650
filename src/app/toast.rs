//! Transient "copied" confirmation.
//!
//! Each [`Toast::show`] schedules its own dismissal timer. Timers from an
//! earlier copy may fire while a later toast is still meant to be visible, so
//! the toast only hides once every outstanding timer has fired.

/// Message shown after the style code reaches the clipboard.
pub const COPIED_MESSAGE: &str = "CSS 코드가 복사되었습니다!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toast {
    message: String,
    visible: bool,
    pending_timers: u32,
}

impl Toast {
    /// Shows `message` and records one more pending dismissal timer.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.visible = true;
        self.pending_timers = self.pending_timers.saturating_add(1);
    }

    /// Handles a fired dismissal timer. Returns `true` if the toast was hidden.
    pub fn expire(&mut self) -> bool {
        self.pending_timers = self.pending_timers.saturating_sub(1);
        if self.pending_timers == 0 && self.visible {
            self.visible = false;
            return true;
        }
        false
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// The message, if currently visible.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.visible.then_some(self.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_after_its_timer() {
        let mut toast = Toast::default();
        toast.show(COPIED_MESSAGE);
        assert_eq!(toast.message(), Some(COPIED_MESSAGE));
        assert!(toast.expire());
        assert_eq!(toast.message(), None);
    }

    #[test]
    fn overlapping_shows_wait_for_last_timer() {
        let mut toast = Toast::default();
        toast.show("one");
        toast.show("two");
        assert!(!toast.expire());
        assert!(toast.is_visible());
        assert!(toast.expire());
        assert!(!toast.is_visible());
    }

    #[test]
    fn stray_timer_is_harmless() {
        let mut toast = Toast::default();
        assert!(!toast.expire());
        assert!(!toast.is_visible());
    }
}
