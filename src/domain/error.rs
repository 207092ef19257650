//! Error types for the Fontlab plugin.
//!
//! The gallery itself never fails: filtering and rendering are total. Errors
//! only surface at the edges (preference storage, worker IPC, theme loading,
//! configuration), and the plugin shim logs them and keeps running with a
//! working default.

use thiserror::Error;

/// The main error type for Fontlab plugin operations.
///
/// # Examples
///
/// ```
/// use fontlab::FontlabError;
///
/// fn read_preferences() -> Result<(), FontlabError> {
///     Err(FontlabError::Storage("preferences file is not valid JSON".to_string()))
/// }
///
/// assert!(read_preferences().is_err());
/// ```
#[derive(Debug, Error)]
pub enum FontlabError {
    /// Reading or writing the preference store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme palette could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// A configuration value is malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Fontlab operations.
pub type Result<T> = std::result::Result<T, FontlabError>;
