//! Domain layer: the style catalog and the value types shared by every layer.
//!
//! Nothing in here depends on Zellij. The catalog is static data, the filter
//! and render pipeline consume it by reference, and the preference type is
//! what the worker persists.
//!
//! # Organization
//!
//! - [`catalog`]: The fixed, ordered list of text-style presets
//! - [`style`]: Descriptor, category and category filter types
//! - [`preference`]: Light/dark theme preference
//! - [`error`]: Error types and result alias
//!
//! # Examples
//!
//! ```
//! use fontlab::domain::{catalog, Category};
//!
//! let retro = catalog::CATALOG
//!     .iter()
//!     .filter(|d| d.category == Category::Retro)
//!     .count();
//! assert_eq!(retro, 3);
//! ```

pub mod catalog;
pub mod error;
pub mod preference;
pub mod style;

pub use error::{FontlabError, Result};
pub use preference::ThemePreference;
pub use style::{Category, CategoryFilter, StyleDescriptor};
