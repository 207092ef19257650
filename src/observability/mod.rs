//! Span export to a rotating OTLP-JSON file.
//!
//! ```text
//! tracing → tracing-opentelemetry → SDK tracer provider → FileSpanExporter → fontlab-otlp.json
//! ```
//!
//! The file lives in the plugin data directory and rotates at 10 MB, keeping
//! three numbered backups. Each line is one self-contained OTLP JSON document,
//! so the file can be fed to any OTLP-aware viewer line by line.
//!
//! The level comes from the `trace_level` plugin option (default `info`) and
//! accepts full `EnvFilter` directives such as `fontlab::app=trace,info`.

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::init_tracing;

/// Service and instrumentation scope name attached to every exported batch.
pub const SERVICE_NAME: &str = "fontlab";

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "fontlab-otlp.json";
