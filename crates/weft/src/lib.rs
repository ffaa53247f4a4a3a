//! Weft - In-process execution tracer
//!
//! Instrumented call sites in a multi-threaded program emit structured trace
//! events (function entry/exit, phase changes, message send/receive,
//! free-text events, thread naming). A background writer serializes them to
//! a file or TCP stream for later offline visualization of execution
//! timelines.
//!
//! # Quick Start
//!
//! ```no_run
//! fn handle(job: &str) {
//!     weft::trace_fn!();
//!     weft::recv(job);
//!     weft::phase("decode");
//!     // ...
//!     weft::send(job);
//! }
//!
//! fn main() {
//!     weft::trace_start(); // sink selected via WEFT_LOG, default weft.log
//!     weft::set_thread_name("Main");
//!     handle("job-17");
//!     // trace_stop() also runs from a process-exit hook
//!     weft::trace_stop();
//! }
//! ```
//!
//! # Overhead and Guarantees
//!
//! A marker call acquires a pooled record, stamps it with the calling
//! thread's identity and a process-wide logical timestamp, and enqueues it
//! for the writer thread - no I/O on the caller. Events are never lost or
//! reordered: when the queue exceeds its threshold the producing thread is
//! deliberately stalled instead of dropping, and shutdown drains the queue
//! before the process exits. Marker calls never fail and are no-ops while
//! tracing is not started.

mod global;
mod macros;
mod markers;
mod value;

pub use global::{engine, trace_start, trace_start_with, trace_stop};
pub use markers::{
    comment, event, info, phase, recv, recv2, send, send2, set_thread_name, terminate,
    ScopeTracer,
};
pub use value::TraceValue;

// Re-exports for standalone engine use and sink-selection constants
pub use weft_engine::{Engine, EngineConfig, EngineState, SinkTarget, OUTPUT_ENV};
pub use weft_protocol::fold_bytes;
