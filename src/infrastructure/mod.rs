//! Infrastructure layer for the Zellij sandbox and the host terminal.
//!
//! - [`paths`]: data directory and `~` expansion under the `/host` mount
//! - [`clipboard`]: host clipboard command and the OSC 52 fallback sequence

pub mod clipboard;
pub mod paths;

pub use clipboard::{copy_command, osc52_sequence, CLIPBOARD_CONTEXT_KEY, CLIPBOARD_CONTEXT_VALUE};
pub use paths::{expand_tilde, get_data_dir, preferences_path};
