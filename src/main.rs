//! Zellij plugin wrapper and entry point.
//!
//! This is the only place that talks to the Zellij host. It maps host events
//! to library [`Event`]s, runs [`handle_event`], and executes the returned
//! [`Action`]s.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  FontlabWorker   │   │  ← Preference file
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Gallery:
//! - `h`/`j`/`k`/`l`, arrows: move selection
//! - `Enter`: open the selected card's CSS
//! - `/`: edit search, `e`: edit sample text
//! - `Tab`/`Shift+Tab`, `0`-`7`: category
//! - `+`/`=`, `-`: sample size
//! - `t`: toggle light/dark
//! - `q`: hide the plugin
//! - left click: open a card
//!
//! Overlay:
//! - `c`/`y`: copy CSS
//! - `Esc`/`q`/`x`, click outside: close
//!
//! Text fields:
//! - characters and `Backspace` edit, `Enter`/`Esc` finish

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use fontlab::domain::CategoryFilter;
use fontlab::infrastructure::{copy_command, CLIPBOARD_CONTEXT_KEY, CLIPBOARD_CONTEXT_VALUE};
use fontlab::worker::{FontlabWorker, WorkerMessage, WorkerResponse};
use fontlab::{handle_event, Action, Config, EditField, Event, InputMode};

register_plugin!(State);
register_worker!(FontlabWorker, fontlab_worker, FONTLAB_WORKER);

struct State {
    app: fontlab::AppState,

    /// Worker identifier for IPC messaging.
    worker_name: String,

    /// Whether the host allows `run_command`; without it every copy goes
    /// straight to the OSC 52 fallback.
    can_run_commands: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: fontlab::initialize(&Config::default()),
            worker_name: "fontlab".to_string(),
            can_run_commands: false,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        fontlab::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(config = ?config, "parsed configuration");

        self.app = fontlab::initialize(&config);

        request_permission(&[PermissionType::RunCommands, PermissionType::FullHdAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::CustomMessage,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let _guard = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name)
            .entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key),
            zellij_tile::prelude::Event::Mouse(Mouse::LeftClick(line, column)) => {
                Some(Event::ClickAt { line, column })
            }
            zellij_tile::prelude::Event::Timer(_) => Some(Event::ToastExpired),
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                self.map_custom_message_event(&message, &payload)
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                Self::map_command_result_event(exit_code, &stderr, &context)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.can_run_commands = matches!(status, PermissionStatus::Granted);
                match status {
                    PermissionStatus::Granted => Some(Event::PermissionsGranted),
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - clipboard falls back to OSC 52, theme is not remembered");
                        None
                    }
                }
            }
            _ => None,
        };

        our_event.is_some_and(|event| self.dispatch(&event))
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.viewport = (rows, cols);
        for sequence in self.app.take_terminal_output() {
            print!("{sequence}");
        }
        fontlab::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs an event through the handler and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                actions
                    .iter()
                    .fold(should_render, |render, action| self.execute_action(action) || render)
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(_) => "Mouse".to_string(),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.overlay.is_open() {
            return match key.bare_key {
                BareKey::Char('c' | 'y') => Some(Event::CopyStyleCode),
                BareKey::Esc => Some(Event::Escape),
                BareKey::Char('q' | 'x') => Some(Event::CloseDetail),
                _ => None,
            };
        }

        if let InputMode::Editing(_) = self.app.input_mode {
            return match key.bare_key {
                BareKey::Enter => Some(Event::FinishEditing),
                BareKey::Esc => Some(Event::Escape),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Left | BareKey::Char('h') => Event::MoveLeft,
            BareKey::Right | BareKey::Char('l') => Event::MoveRight,
            BareKey::Up | BareKey::Char('k') => Event::MoveUp,
            BareKey::Down | BareKey::Char('j') => Event::MoveDown,
            BareKey::Enter => Event::OpenDetail,
            BareKey::Char('/') => Event::FocusField(EditField::Search),
            BareKey::Char('e') => Event::FocusField(EditField::SampleText),
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PreviousCategory,
            BareKey::Tab => Event::NextCategory,
            BareKey::Char(c @ '0'..='7') => {
                let index = c.to_digit(10).map_or(0, |d| d as isize);
                Event::SelectCategory(CategoryFilter::from_tab_index(index))
            }
            BareKey::Char('+' | '=') => Event::IncreaseSize,
            BareKey::Char('-') => Event::DecreaseSize,
            BareKey::Char('t') => Event::ToggleTheme,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => {
                tracing::debug!(response = ?response, "worker response received");
                Some(Event::WorkerResponse(response))
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn map_command_result_event(
        exit_code: Option<i32>,
        stderr: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        if context.get(CLIPBOARD_CONTEXT_KEY).map(String::as_str) != Some(CLIPBOARD_CONTEXT_VALUE) {
            return None;
        }

        let succeeded = exit_code == Some(0);
        if !succeeded {
            tracing::debug!(
                exit_code = ?exit_code,
                stderr = %String::from_utf8_lossy(stderr),
                "clipboard command failed"
            );
        }
        Some(Event::ClipboardSettled { succeeded })
    }

    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes one action. Returns `true` if it changed state that needs a
    /// re-render.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) -> bool {
        match action {
            Action::CloseFocus => {
                hide_self();
                false
            }
            Action::PostToWorker(message) => {
                self.post_worker_message(message);
                false
            }
            Action::CopyToClipboard { text } => {
                if !self.can_run_commands {
                    return self.dispatch(&Event::ClipboardSettled { succeeded: false });
                }
                let argv = copy_command(text);
                let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
                let context = BTreeMap::from([(
                    CLIPBOARD_CONTEXT_KEY.to_string(),
                    CLIPBOARD_CONTEXT_VALUE.to_string(),
                )]);
                run_command(&argv, context);
                false
            }
            Action::ScheduleToastDismiss { after } => {
                set_timeout(after.as_secs_f64());
                false
            }
        }
    }
}
