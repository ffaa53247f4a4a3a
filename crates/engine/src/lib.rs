//! Weft Engine - Asynchronous log engine for the weft tracer
//!
//! Coordinates many producing threads and one consuming thread with bounded
//! memory, strict total ordering, and graceful drain-on-exit:
//!
//! ```text
//! [host threads] --write_*--> [RecordPool] -> [TraceClock stamp]
//!        |                                          |
//!        +--- backpressure <--- [EventQueue] <--- enqueue
//!                                    |
//!                            [writer thread] --> encode --> [sink]
//! ```
//!
//! # Concurrency Model
//!
//! Each shared structure - pool free list, queue, identity counter,
//! timestamp counter, writer handle - is guarded by its own lock, so
//! unrelated operations never contend. Producers suspend only under
//! backpressure; the consumer suspends on a true condition wait when the
//! queue is empty.
//!
//! # Lifecycle
//!
//! `Disabled -> Enabled -> Draining -> Stopped`, never back to `Enabled`.
//! Write operations are silent no-ops outside `Enabled`; `shutdown` enqueues
//! a stamped sentinel and joins the writer so every previously enqueued
//! event reaches the sink before the process exits.

mod clock;
mod config;
mod engine;
mod pool;
mod queue;
mod writer;

pub use clock::TraceClock;
pub use config::{EngineConfig, OUTPUT_ENV};
pub use engine::{Engine, EngineState};
pub use pool::{PoolMetrics, PoolSnapshot, RecordPool};
pub use queue::{EventQueue, DEFAULT_QUEUE_THRESHOLD};

// Re-exports for callers that only depend on the engine crate
pub use weft_protocol::{EventKind, EventRecord};
pub use weft_sinks::{MetricsSnapshot, SinkTarget};

#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod queue_test;
