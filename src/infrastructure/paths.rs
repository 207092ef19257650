//! Path helpers for the Zellij plugin sandbox, where the host filesystem is
//! mounted under `/host`.

use std::path::PathBuf;

/// Returns the data directory for Fontlab files.
///
/// `/host/.local/share/zellij/fontlab` in the sandbox, which is usually
/// `~/.local/share/zellij/fontlab` on the host. The preference file and the
/// trace export live here.
///
/// ```
/// use fontlab::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/fontlab"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("fontlab")
}

/// Location of the preference file.
#[must_use]
pub fn preferences_path() -> PathBuf {
    get_data_dir().join("preferences.json")
}

/// Expands tilde paths to use the `/host` prefix.
///
/// ```
/// use fontlab::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
