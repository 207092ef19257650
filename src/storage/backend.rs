//! Preference store abstraction.
//!
//! The worker owns a `Box<dyn PreferenceStore>` and never cares which backend
//! sits behind it; tests swap in a tempfile-backed JSON store.

use crate::domain::error::Result;

/// String key-value store for user preferences.
///
/// # Examples
///
/// ```no_run
/// use fontlab::storage::{JsonPreferenceStore, PreferenceStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonPreferenceStore::new(PathBuf::from("/tmp/preferences.json"))?;
/// store.set("theme", "dark")?;
/// assert_eq!(store.get("theme")?.as_deref(), Some("dark"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait PreferenceStore: Send {
    /// Returns the stored value for `key`, or `None` if it was never set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key` and persists it before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The in-memory value is kept either way.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
