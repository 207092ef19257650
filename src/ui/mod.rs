//! Terminal UI: view models, layout, visual effects and component renderers.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: renderable snapshot of the gallery
//! - [`renderer`]: top-level entry point
//! - [`components`]: per-region renderers
//! - [`layout`]: grid and overlay geometry, shared with click hit-testing
//! - [`effects`]: style class → terminal treatment
//! - [`helpers`]: width-aware text utilities
//! - [`theme`]: color themes and ANSI escape generation

pub mod components;
pub mod effects;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeSet};
pub use viewmodel::{
    CardView, EmptyState, FieldInfo, FooterInfo, HeaderInfo, OverlayView, TabInfo, ToastView,
    UIViewModel,
};
