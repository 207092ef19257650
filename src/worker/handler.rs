//! Worker thread owning the preference store.
//!
//! Zellij spawns the worker on its own thread; requests arrive as JSON
//! payloads and each one gets exactly one [`WorkerResponse`] back.

use crate::domain::error::{FontlabError, Result};
use crate::domain::ThemePreference;
use crate::infrastructure::paths;
use crate::storage::{JsonPreferenceStore, PreferenceStore, THEME_KEY};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker state. The store is opened lazily on the first message, since the
/// worker is constructed before the host grants filesystem access.
#[derive(Serialize, Deserialize, Default)]
pub struct FontlabWorker {
    #[serde(skip)]
    store: Option<Box<dyn PreferenceStore>>,
}

impl FontlabWorker {
    /// Creates a worker backed by an already-open store.
    #[must_use]
    pub fn with_store(store: Box<dyn PreferenceStore>) -> Self {
        Self { store: Some(store) }
    }

    fn open_default_store() -> Result<Box<dyn PreferenceStore>> {
        let store = JsonPreferenceStore::new(paths::preferences_path())?;
        Ok(Box::new(store))
    }

    fn store(&mut self) -> Result<&mut Box<dyn PreferenceStore>> {
        self.store
            .as_mut()
            .ok_or_else(|| FontlabError::Worker("preference store not initialized".to_string()))
    }

    /// Reads the stored theme. Anything other than `light` or `dark` counts as
    /// no preference.
    fn handle_load_preferences(&mut self) -> WorkerResponse {
        match self.store().and_then(|store| store.get(THEME_KEY)) {
            Ok(stored) => {
                let theme = stored.as_deref().and_then(ThemePreference::parse);
                if stored.is_some() && theme.is_none() {
                    tracing::warn!(stored = ?stored, "ignoring invalid stored theme");
                }
                tracing::debug!(theme = ?theme, "preferences loaded");
                WorkerResponse::PreferencesLoaded { theme }
            }
            Err(e) => {
                // Unreadable preferences still resolve to the system default.
                tracing::warn!(error = %e, "failed to read preferences");
                WorkerResponse::PreferencesLoaded { theme: None }
            }
        }
    }

    fn handle_save_theme(&mut self, theme: ThemePreference) -> WorkerResponse {
        match self
            .store()
            .and_then(|store| store.set(THEME_KEY, theme.as_str()))
        {
            Ok(()) => {
                tracing::debug!(theme = theme.as_str(), "theme saved");
                WorkerResponse::ThemeSaved { theme }
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to save theme");
                WorkerResponse::Error {
                    message: format!("save theme: {e}"),
                }
            }
        }
    }

    /// Links worker spans to the plugin span that sent `message`.
    ///
    /// The returned guard must be held while the message is handled.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let parent = message.trace_context()?;
        let span_context = SpanContext::new(
            TraceId::from_hex(&parent.trace_id).ok()?,
            SpanId::from_hex(&parent.parent_span_id).ok()?,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Handles one request and returns its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadPreferences { .. } => self.handle_load_preferences(),
            WorkerMessage::SaveTheme { theme, .. } => self.handle_save_theme(theme),
        }
    }
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

fn reply(name: String, response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
    }
}

impl ZellijWorker<'_> for FontlabWorker {
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let request: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        if self.store.is_none() {
            match Self::open_default_store() {
                Ok(store) => self.store = Some(store),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to open preference store");
                    let response = match request {
                        WorkerMessage::LoadPreferences { .. } => {
                            WorkerResponse::PreferencesLoaded { theme: None }
                        }
                        WorkerMessage::SaveTheme { .. } => WorkerResponse::Error {
                            message: format!("open preference store: {e}"),
                        },
                    };
                    reply(message, &response);
                    return;
                }
            }
        }

        let response = self.handle_message(request);
        reply(message, &response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn worker_in(dir: &TempDir) -> FontlabWorker {
        let store = JsonPreferenceStore::new(dir.path().join("preferences.json")).expect("store");
        FontlabWorker::with_store(Box::new(store))
    }

    #[test]
    fn nothing_stored_loads_as_no_preference() {
        let dir = TempDir::new().expect("tempdir");
        let mut worker = worker_in(&dir);

        assert_eq!(
            worker.handle_message(WorkerMessage::load_preferences()),
            WorkerResponse::PreferencesLoaded { theme: None }
        );
    }

    #[test]
    fn saved_theme_is_loaded_back() {
        let dir = TempDir::new().expect("tempdir");
        {
            let mut worker = worker_in(&dir);
            assert_eq!(
                worker.handle_message(WorkerMessage::save_theme(ThemePreference::Dark)),
                WorkerResponse::ThemeSaved {
                    theme: ThemePreference::Dark
                }
            );
        }

        let mut worker = worker_in(&dir);
        assert_eq!(
            worker.handle_message(WorkerMessage::load_preferences()),
            WorkerResponse::PreferencesLoaded {
                theme: Some(ThemePreference::Dark)
            }
        );
    }

    #[test]
    fn invalid_stored_value_is_no_preference() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = JsonPreferenceStore::new(dir.path().join("preferences.json")).expect("store");
        store.set(THEME_KEY, "solarized").expect("set");
        let mut worker = FontlabWorker::with_store(Box::new(store));

        assert_eq!(
            worker.handle_message(WorkerMessage::load_preferences()),
            WorkerResponse::PreferencesLoaded { theme: None }
        );
    }

    #[test]
    fn uninitialized_worker_reports_errors() {
        let mut worker = FontlabWorker::default();

        assert_eq!(
            worker.handle_message(WorkerMessage::load_preferences()),
            WorkerResponse::PreferencesLoaded { theme: None }
        );
        assert!(matches!(
            worker.handle_message(WorkerMessage::save_theme(ThemePreference::Light)),
            WorkerResponse::Error { .. }
        ));
    }
}
