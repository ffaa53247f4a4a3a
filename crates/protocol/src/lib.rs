//! Weft Protocol - Record model and wire format for the weft tracer
//!
//! This crate provides the types that flow through the trace pipeline:
//! - `EventKind` - FuncEnter, FuncExit, Phase, Send, Recv, etc.
//! - `RecordFlags` - payload-presence bitmask driving line layout
//! - `EventRecord` - one unit of trace data, recycled through the pool
//! - `encode_record` - the line encoder for the visualization wire format
//!
//! # Wire Format
//!
//! Line-oriented text, one record per line, fixed field order:
//!
//! ```text
//! <kind-tag> <thread-id> [<timestamp>] [<name>] [<merged-value>] ["<text>"]
//! ```
//!
//! The grammar is a compatibility contract with downstream visualization
//! tools; changing field order or omission rules is a breaking change.
//!
//! # Design Principles
//!
//! - **No allocations in the hot path**: records and line buffers are reused,
//!   `name` is a static label, `text` keeps its capacity across recycling
//! - **Emission order = production order**: thread id and timestamp are
//!   stamped at record creation, never at encoding time

mod encode;
mod error;
mod record;
mod value;

pub use encode::encode_record;
pub use error::ProtocolError;
pub use record::{EventKind, EventRecord, RecordFlags};
pub use value::{fold_bytes, merge_values};

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Initial capacity for reusable line buffers
pub const LINE_CAPACITY: usize = 256;
