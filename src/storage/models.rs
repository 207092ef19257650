//! On-disk record layout for the preference file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current version of the preference file format.
pub const PREFERENCES_VERSION: u32 = 1;

/// Top-level structure serialized to `preferences.json`.
///
/// ```json
/// {
///   "version": 1,
///   "values": { "theme": "dark" },
///   "updated_at": 1760000000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesRecord {
    /// Format version for future migrations.
    pub version: u32,

    #[serde(default)]
    pub values: BTreeMap<String, String>,

    /// Unix timestamp of the last write, `None` if never written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Default for PreferencesRecord {
    fn default() -> Self {
        Self {
            version: PREFERENCES_VERSION,
            values: BTreeMap::new(),
            updated_at: None,
        }
    }
}

impl PreferencesRecord {
    /// Stamps the record with the current time.
    pub fn touch(&mut self) {
        self.updated_at = Some(chrono::Utc::now().timestamp());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let record: PreferencesRecord = serde_json::from_str(r#"{"version":1}"#).expect("parse");
        assert!(record.values.is_empty());
        assert_eq!(record.updated_at, None);
    }

    #[test]
    fn touch_sets_timestamp() {
        let mut record = PreferencesRecord::default();
        record.touch();
        assert!(record.updated_at.is_some_and(|t| t > 0));
    }
}
