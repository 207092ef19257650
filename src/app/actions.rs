//! Side effects requested by the event handler.
//!
//! The handler mutates [`AppState`](super::AppState) directly but never calls
//! the Zellij host. Anything that leaves the plugin (hiding the pane, running
//! the clipboard tool, arming a timer, talking to the worker) is returned as
//! an [`Action`] and executed by the plugin shim in order.

use crate::worker::WorkerMessage;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Hands `text` to the host clipboard tool. Its completion comes back as
    /// [`Event::ClipboardSettled`](super::Event::ClipboardSettled).
    CopyToClipboard { text: String },

    /// Arms a timer whose expiry arrives as
    /// [`Event::ToastExpired`](super::Event::ToastExpired).
    ScheduleToastDismiss { after: Duration },
}
