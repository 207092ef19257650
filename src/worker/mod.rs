//! Worker thread for preference persistence.
//!
//! - `messages`: request/response protocol with trace-context propagation
//! - `handler`: the worker and its message processing

pub mod handler;
pub mod messages;

pub use handler::FontlabWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
