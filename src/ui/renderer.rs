//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View model computation**: `AppState` → `UIViewModel`
//! 2. **Component rendering**: the view model is drawn by [`components`]
//!
//! # Example
//!
//! ```rust,no_run
//! use fontlab::app::AppState;
//! use fontlab::ui::render;
//!
//! let state = AppState::default();
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout with the active theme.
///
/// Does not clear the screen; every component pads its rows to the full pane
/// width instead.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_gallery(&viewmodel, state.theme(), rows, cols);
}
