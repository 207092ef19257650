//! Storage layer for persisted user preferences.
//!
//! The only thing the gallery persists is the theme preference, so the store is
//! a small string key-value map kept in a JSON file.
//!
//! # Modules
//!
//! - `backend`: store trait abstraction
//! - `json`: JSON file implementation with atomic writes
//! - `models`: on-disk record layout

pub mod backend;
pub mod json;
pub mod models;

pub use backend::PreferenceStore;
pub use json::JsonPreferenceStore;
pub use models::PreferencesRecord;

/// Key under which the theme preference is stored.
pub const THEME_KEY: &str = "theme";
