//! Application layer: session state, the interaction controller, and the
//! detail overlay.
//!
//! ```text
//! Zellij input → Event → handle_event → state mutation → Actions → host calls
//!                             ↑                                 ↓
//!                             └──── clipboard / timer / worker ─┘
//! ```
//!
//! # Modules
//!
//! - [`filter`]: the pure catalog filter
//! - [`session`]: user-controlled view parameters
//! - [`state`]: [`AppState`] and view model computation
//! - [`handler`]: [`handle_event`], the interaction controller
//! - [`overlay`]: detail overlay state machine
//! - [`toast`]: copy confirmation with overlapping timers
//! - [`modes`]: text field focus
//! - [`actions`]: side effects executed by the plugin shim

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod overlay;
pub mod session;
pub mod state;
pub mod toast;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{EditField, InputMode};
pub use overlay::DetailOverlay;
pub use session::{SessionState, SizeRange};
pub use state::AppState;
pub use toast::Toast;
