//! Line encoder for the wire format
//!
//! One record per line, space-separated, fixed field order:
//!
//! ```text
//! <kind-tag> <thread-id> [<timestamp>] [<name>] [<merged-value>] ["<text>"]
//! ```
//!
//! - timestamp is omitted when `NO_TIMESTAMP` is set (thread naming)
//! - name is present only for FuncEnter/FuncExit/Phase
//! - the merged value (lowercase hex) is present only for Send/Recv
//! - quoted text is present only for Comment/Info/Event/ThreadName

use std::fmt::Write as FmtWrite;

use crate::error::ProtocolError;
use crate::record::{EventRecord, RecordFlags};
use crate::value::merge_values;

/// Encode a record into `out` as a single wire line (with trailing newline)
///
/// `out` is cleared first; callers reuse one buffer across records. Thread id
/// and timestamp are emitted as stamped at production time.
///
/// # Errors
///
/// Returns [`ProtocolError::InternalKind`] for kinds without a wire
/// representation (the shutdown sentinel).
pub fn encode_record(record: &EventRecord, out: &mut String) -> Result<(), ProtocolError> {
    if !record.kind.is_emitted() {
        return Err(ProtocolError::InternalKind(record.kind));
    }

    out.clear();
    out.push_str(record.kind.tag());
    let _ = write!(out, " {}", record.thread_id);

    if !record.flags.contains(RecordFlags::NO_TIMESTAMP) {
        let _ = write!(out, " {}", record.timestamp);
    }
    if record.flags.contains(RecordFlags::HAS_NAME) {
        let _ = write!(out, " {}", record.name);
    }
    if record.flags.contains(RecordFlags::HAS_VALUE) {
        let _ = write!(out, " {:x}", merge_values(record.value1, record.value2));
    }
    if record.flags.contains(RecordFlags::HAS_TEXT) {
        out.push_str(" \"");
        escape_into(out, &record.text);
        out.push('"');
    }

    out.push('\n');
    Ok(())
}

/// Append text to the line buffer, escaped for a shell-style line reader
///
/// Keeps one record per line: quotes and backslashes are backslash-escaped,
/// newlines and control characters are rendered as escape sequences.
fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
}
