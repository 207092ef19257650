//! Render pipeline: turns the filtered catalog into mounted cards.
//!
//! The pipeline never draws anything itself. It writes cards, the result
//! counter and the size readout onto a [`RenderSurface`]; the terminal UI
//! reads the in-memory [`Gallery`] surface when Zellij asks for a frame.
//!
//! ```text
//! filtered descriptors → render() → RenderSurface (Gallery) → ui::render → ANSI
//!                 sample text → update_preview_text() ┘
//!                 sample size → update_preview_size() ┘
//! ```
//!
//! # Modules
//!
//! - [`surface`]: The surface trait plus card/preview types and `Gallery`
//! - [`pipeline`]: Full render and the two incremental fast paths

pub mod pipeline;
pub mod surface;

pub use pipeline::{build_card, render, size_readout, update_preview_size, update_preview_text};
pub use surface::{Card, Gallery, Preview, RenderSurface};
