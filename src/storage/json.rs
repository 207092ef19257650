//! JSON file-based preference store.
//!
//! Uses atomic writes (write-to-temp + rename) so the file is never left
//! half-written. A file that cannot be read or fails to parse (including
//! bytes that are not UTF-8) is treated as empty and is replaced on the next
//! write.

use crate::domain::error::{FontlabError, Result};
use crate::storage::backend::PreferenceStore;
use crate::storage::models::PreferencesRecord;
use std::path::{Path, PathBuf};

/// JSON file preference store.
///
/// The whole record is kept in memory and written out on every change.
/// `Send` but not `Sync`; it lives on the worker thread.
pub struct JsonPreferenceStore {
    file_path: PathBuf,
    data: PreferencesRecord,
    dirty: bool,
}

impl JsonPreferenceStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created. An
    /// unreadable or corrupt file opens as an empty store.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)
        } else {
            tracing::debug!("no preference file, starting empty");
            PreferencesRecord::default()
        };

        tracing::debug!(entries = data.values.len(), "preference store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> PreferencesRecord {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, path = ?path, "preference file is unreadable, ignoring it");
                return PreferencesRecord::default();
            }
        };

        match serde_json::from_slice::<PreferencesRecord>(&bytes) {
            Ok(data) => {
                tracing::debug!(version = data.version, "loaded preference file");
                data
            }
            Err(e) => {
                tracing::warn!(error = %e, path = ?path, "preference file is corrupt, ignoring it");
                PreferencesRecord::default()
            }
        }
    }

    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        self.data.touch();
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| FontlabError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key, value).entered();

        if self.data.values.get(key).map(String::as_str) == Some(value) {
            tracing::trace!("value unchanged");
            return Ok(());
        }

        self.data.values.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonPreferenceStore {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save preferences on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonPreferenceStore {
        JsonPreferenceStore::new(dir.path().join("fontlab").join("preferences.json"))
            .expect("open store")
    }

    #[test]
    fn new_store_is_empty_and_creates_parent() {
        let dir = TempDir::new().expect("tempdir");
        let store = store_in(&dir);

        assert_eq!(store.get("theme").expect("get"), None);
        assert!(dir.path().join("fontlab").is_dir());
        assert!(!store.path().exists());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().expect("tempdir");
        {
            let mut store = store_in(&dir);
            store.set("theme", "dark").expect("set");
        }

        let store = store_in(&dir);
        assert_eq!(store.get("theme").expect("get").as_deref(), Some("dark"));
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let dir = TempDir::new().expect("tempdir");
        let mut store = store_in(&dir);
        store.set("theme", "light").expect("set");

        assert!(store.path().exists());
        assert!(!store.path().with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_is_replaced() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{not json").expect("write");

        let mut store = JsonPreferenceStore::new(path.clone()).expect("open");
        assert_eq!(store.get("theme").expect("get"), None);

        store.set("theme", "dark").expect("set");
        let contents = std::fs::read_to_string(&path).expect("read");
        let record: PreferencesRecord = serde_json::from_str(&contents).expect("valid JSON");
        assert_eq!(record.values.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn non_utf8_file_reads_as_empty_and_is_replaced() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).expect("write");

        let mut store = JsonPreferenceStore::new(path.clone()).expect("open");
        assert_eq!(store.get("theme").expect("get"), None);

        store.set("theme", "dark").expect("set");
        let reopened = JsonPreferenceStore::new(path).expect("reopen");
        assert_eq!(reopened.get("theme").expect("get").as_deref(), Some("dark"));
    }
}
