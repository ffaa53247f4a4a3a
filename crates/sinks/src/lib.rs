//! Weft Sinks - Output destinations for formatted trace lines
//!
//! The writer thread drains the event queue, encodes each record, and hands
//! the line to the active sink. Sinks are polymorphic over the capability
//! pair {write, close}:
//!
//! ```text
//! [WriterThread] --line--> [dyn TraceSink] --> file | tcp stream
//! ```
//!
//! # Available Sinks
//!
//! | Sink | Selected by | Purpose |
//! |------|-------------|---------|
//! | `FileSink` | any path, or empty (default name) | offline visualization |
//! | `TcpSink`  | `tcp:<host>:<port>` | live streaming to a viewer |
//!
//! # Failure Policy
//!
//! Construction failure is surfaced as a `Result` and treated as fatal by the
//! caller: tracing is correctness-adjacent and must never run silently
//! degraded. Mid-stream write failures are the opposite - the sink latches an
//! errored state, further writes become no-ops, and the host program is never
//! destabilized by a broken trace channel.

mod common;
mod error;
mod file;
mod sink;
mod target;
mod tcp;

pub use common::{MetricsSnapshot, SinkMetrics};
pub use error::SinkError;
pub use file::FileSink;
pub use sink::{open_sink, TraceSink};
pub use target::{SinkTarget, DEFAULT_LOG_FILE, TCP_SCHEME};
pub use tcp::TcpSink;

/// Result type for sink operations
pub type Result<T> = std::result::Result<T, SinkError>;
