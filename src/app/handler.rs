//! Event handling and state transitions.
//!
//! [`handle_event`] is the interaction controller: it maps each input to the
//! session change it implies and to the update path that change needs.
//!
//! | Input            | State                         | Update                       |
//! |------------------|-------------------------------|------------------------------|
//! | search field     | search text (lowercased)      | refilter + full render       |
//! | category tab     | active category               | refilter + full render       |
//! | sample field     | sample text (or placeholder)  | preview text in place        |
//! | size control     | sample size (clamped)         | preview size + readout       |
//! | theme toggle     | theme preference              | palette switch + persist     |
//!
//! While the detail overlay is open, only overlay events (close, copy, click)
//! and asynchronous completions are handled; everything else is ignored so the
//! gallery behind the overlay stays put.

use super::modes::{EditField, InputMode};
use super::toast::COPIED_MESSAGE;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{CategoryFilter, ThemePreference};
use crate::infrastructure::clipboard::osc52_sequence;
use crate::ui::layout::OverlayFrame;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events produced by the plugin shim from Zellij input and host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    /// Opens the detail overlay for the selected card.
    OpenDetail,
    /// Activates the detail trigger of the card for `id`.
    OpenDetailFor { id: String },
    /// Closes the detail overlay.
    CloseDetail,
    /// Left click at a 0-indexed pane cell.
    ClickAt { line: isize, column: usize },

    /// Copies the style code shown in the overlay.
    CopyStyleCode,
    /// The host clipboard command finished.
    ClipboardSettled { succeeded: bool },
    /// A toast dismissal timer fired.
    ToastExpired,

    /// Focuses a text field.
    FocusField(EditField),
    /// Leaves the focused text field.
    FinishEditing,
    /// Typed character for the focused field.
    Char(char),
    Backspace,
    /// Closes the overlay, or leaves the focused field.
    Escape,

    SelectCategory(CategoryFilter),
    NextCategory,
    PreviousCategory,

    IncreaseSize,
    DecreaseSize,

    ToggleTheme,

    /// Hides the plugin pane.
    CloseFocus,

    /// Host permissions were granted; stored preferences can now be read.
    PermissionsGranted,

    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Events still handled while the overlay covers the gallery.
    const fn passes_overlay(&self) -> bool {
        matches!(
            self,
            Self::CloseDetail
                | Self::Escape
                | Self::ClickAt { .. }
                | Self::CopyStyleCode
                | Self::ClipboardSettled { .. }
                | Self::ToastExpired
                | Self::CloseFocus
                | Self::PermissionsGranted
                | Self::WorkerResponse(_)
        )
    }
}

/// Processes an event, mutates application state, and returns whether to
/// re-render plus the actions to execute.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for the
/// plugin shim, which logs errors and continues.
///
/// ```rust
/// use fontlab::{handle_event, AppState, Event};
///
/// let mut state = AppState::default();
/// let (render, actions) = handle_event(&mut state, &Event::OpenDetail)?;
/// assert!(render && actions.is_empty());
/// assert!(state.overlay.is_open());
/// # Ok::<(), fontlab::FontlabError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.overlay.is_open() && !event.passes_overlay() {
        tracing::trace!("ignored while detail overlay is open");
        return Ok((false, vec![]));
    }

    match event {
        Event::MoveLeft => {
            state.move_selection_left();
            Ok((true, vec![]))
        }
        Event::MoveRight => {
            state.move_selection_right();
            Ok((true, vec![]))
        }
        Event::MoveUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::MoveDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::OpenDetail => {
            let Some(descriptor) = state.selected_descriptor() else {
                tracing::debug!("no card selected");
                return Ok((false, vec![]));
            };
            state.overlay.open(descriptor);
            Ok((true, vec![]))
        }
        Event::OpenDetailFor { id } => {
            let Some(index) = state
                .gallery
                .cards()
                .iter()
                .position(|card| card.descriptor_id == id.as_str())
            else {
                tracing::debug!(style_id = %id, "detail trigger for a card that is not mounted");
                return Ok((false, vec![]));
            };
            state.selected_index = index;
            handle_event(state, &Event::OpenDetail)
        }
        Event::CloseDetail => Ok((state.overlay.close(), vec![])),
        Event::ClickAt { line, column } => {
            let (rows, cols) = state.viewport;
            if let Some(descriptor) = state.overlay.descriptor() {
                let frame = OverlayFrame::for_descriptor(descriptor, rows, cols);
                if frame.contains(*line, *column) {
                    return Ok((false, vec![]));
                }
                return Ok((state.overlay.close(), vec![]));
            }
            match state.card_at(*line, *column) {
                Some(index) => {
                    state.selected_index = index;
                    handle_event(state, &Event::OpenDetail)
                }
                None => Ok((false, vec![])),
            }
        }
        Event::CopyStyleCode => {
            let Some(code) = state.overlay.code() else {
                return Ok((false, vec![]));
            };
            tracing::debug!(code_len = code.len(), "copying style code");
            state.begin_copy(code.to_string());
            Ok((false, vec![Action::CopyToClipboard { text: code.to_string() }]))
        }
        Event::ClipboardSettled { succeeded } => {
            let Some(text) = state.finish_copy() else {
                tracing::debug!("clipboard result with no copy in flight");
                return Ok((false, vec![]));
            };
            if !succeeded {
                tracing::debug!("clipboard tool failed, falling back to OSC 52");
                match osc52_sequence(&text) {
                    Some(sequence) => state.queue_terminal_output(sequence),
                    None => tracing::debug!("OSC 52 fallback skipped"),
                }
            }
            state.toast.show(COPIED_MESSAGE);
            Ok((
                true,
                vec![Action::ScheduleToastDismiss {
                    after: state.toast_duration,
                }],
            ))
        }
        Event::ToastExpired => Ok((state.toast.expire(), vec![])),
        Event::FocusField(field) => {
            state.input_mode = InputMode::Editing(*field);
            Ok((true, vec![]))
        }
        Event::FinishEditing => {
            let was_editing = state.input_mode != InputMode::Normal;
            state.input_mode = InputMode::Normal;
            Ok((was_editing, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Editing(EditField::Search) => {
                let mut raw = state.session.search_input.clone();
                raw.push(*c);
                state.apply_search_input(raw);
                Ok((true, vec![]))
            }
            InputMode::Editing(EditField::SampleText) => {
                let mut raw = state.session.sample_input.clone();
                raw.push(*c);
                state.apply_sample_input(raw);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Editing(EditField::Search) => {
                let mut raw = state.session.search_input.clone();
                if raw.pop().is_none() {
                    return Ok((false, vec![]));
                }
                state.apply_search_input(raw);
                Ok((true, vec![]))
            }
            InputMode::Editing(EditField::SampleText) => {
                let mut raw = state.session.sample_input.clone();
                if raw.pop().is_none() {
                    return Ok((false, vec![]));
                }
                state.apply_sample_input(raw);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => {
            if state.overlay.close() {
                return Ok((true, vec![]));
            }
            handle_event(state, &Event::FinishEditing)
        }
        Event::SelectCategory(category) => {
            state.apply_category(*category);
            Ok((true, vec![]))
        }
        Event::NextCategory | Event::PreviousCategory => {
            let step = if matches!(event, Event::NextCategory) { 1 } else { -1 };
            let current = state.session.active_category.tab_index() as isize;
            state.apply_category(CategoryFilter::from_tab_index(current + step));
            Ok((true, vec![]))
        }
        Event::IncreaseSize => {
            let next = state.size_range.step_up(state.session.sample_size);
            Ok((state.apply_sample_size(next), vec![]))
        }
        Event::DecreaseSize => {
            let next = state.size_range.step_down(state.session.sample_size);
            Ok((state.apply_sample_size(next), vec![]))
        }
        Event::ToggleTheme => {
            let theme = state.session.theme.toggled();
            state.apply_theme(theme);
            state.theme_chosen = true;
            tracing::debug!(theme = theme.as_str(), "theme toggled");
            Ok((true, vec![Action::PostToWorker(WorkerMessage::save_theme(theme))]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::PermissionsGranted => Ok((
            false,
            vec![Action::PostToWorker(WorkerMessage::load_preferences())],
        )),
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::PreferencesLoaded { theme } => {
            if state.theme_chosen {
                tracing::debug!("theme already chosen this session, ignoring stored preference");
                return (false, vec![]);
            }
            let resolved = ThemePreference::resolve(*theme, state.system_prefers_dark);
            tracing::debug!(stored = ?theme, resolved = resolved.as_str(), "preferences loaded");
            if resolved == state.session.theme {
                return (false, vec![]);
            }
            state.apply_theme(resolved);
            (true, vec![])
        }
        WorkerResponse::ThemeSaved { theme } => {
            tracing::debug!(theme = theme.as_str(), "theme preference saved");
            (false, vec![])
        }
        WorkerResponse::Error { message } => {
            tracing::warn!(error = %message, "worker error");
            (false, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    fn open_neon(state: &mut AppState) {
        handle_event(state, &Event::OpenDetailFor { id: "neon-glow".to_string() }).unwrap();
    }

    #[test]
    fn navigation_is_locked_while_overlay_open() {
        let mut state = AppState::default();
        open_neon(&mut state);
        let (render, _) = handle_event(&mut state, &Event::MoveRight).unwrap();
        assert!(!render);
        assert_eq!(state.selected_index, 0);

        handle_event(&mut state, &Event::CloseDetail).unwrap();
        handle_event(&mut state, &Event::MoveRight).unwrap();
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn copy_requires_open_overlay() {
        let mut state = AppState::default();
        let (_, actions) = handle_event(&mut state, &Event::CopyStyleCode).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn failed_clipboard_falls_back_to_osc52() {
        let mut state = AppState::default();
        open_neon(&mut state);
        handle_event(&mut state, &Event::CopyStyleCode).unwrap();
        let (render, actions) =
            handle_event(&mut state, &Event::ClipboardSettled { succeeded: false }).unwrap();

        assert!(render);
        assert_eq!(
            actions,
            vec![Action::ScheduleToastDismiss { after: state.toast_duration }]
        );
        let output = state.take_terminal_output();
        assert_eq!(output.len(), 1);
        assert!(output[0].starts_with("\x1b]52;c;"));
        assert!(state.toast.is_visible());
    }

    #[test]
    fn stray_clipboard_result_is_ignored() {
        let mut state = AppState::default();
        let (render, actions) =
            handle_event(&mut state, &Event::ClipboardSettled { succeeded: true }).unwrap();
        assert!(!render && actions.is_empty());
        assert!(!state.toast.is_visible());
    }

    #[test]
    fn unknown_detail_trigger_does_nothing() {
        let mut state = AppState::default();
        let (render, _) =
            handle_event(&mut state, &Event::OpenDetailFor { id: "missing".to_string() }).unwrap();
        assert!(!render);
        assert!(!state.overlay.is_open());
    }

    #[test]
    fn category_cycling_wraps() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::PreviousCategory).unwrap();
        assert_eq!(
            state.session.active_category,
            CategoryFilter::Only(crate::domain::Category::Modern)
        );
        handle_event(&mut state, &Event::NextCategory).unwrap();
        assert_eq!(state.session.active_category, CategoryFilter::All);
    }

    #[test]
    fn stored_preference_applies_until_user_toggles() {
        let mut state = AppState::default();
        let loaded = Event::WorkerResponse(WorkerResponse::PreferencesLoaded {
            theme: Some(ThemePreference::Dark),
        });
        let (render, _) = handle_event(&mut state, &loaded).unwrap();
        assert!(render);
        assert_eq!(state.session.theme, ThemePreference::Dark);

        handle_event(&mut state, &Event::ToggleTheme).unwrap();
        assert_eq!(state.session.theme, ThemePreference::Light);
        let (render, _) = handle_event(&mut state, &loaded).unwrap();
        assert!(!render);
        assert_eq!(state.session.theme, ThemePreference::Light);
    }

    #[test]
    fn missing_preference_uses_system_scheme() {
        let mut state = AppState::default();
        state.system_prefers_dark = true;
        let loaded = Event::WorkerResponse(WorkerResponse::PreferencesLoaded { theme: None });
        handle_event(&mut state, &loaded).unwrap();
        assert_eq!(state.session.theme, ThemePreference::Dark);
    }

    #[test]
    fn click_on_card_opens_its_detail() {
        let mut state = AppState::default();
        state.viewport = (40, 120);
        let line = (crate::ui::layout::GRID_TOP_ROW - 1) as isize;
        let (render, _) = handle_event(&mut state, &Event::ClickAt { line, column: 1 }).unwrap();
        assert!(render);
        assert_eq!(
            state.overlay.descriptor(),
            catalog::find_by_id("neon-glow")
        );
    }
}
