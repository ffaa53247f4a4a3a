//! Writer thread - the sole consumer draining the queue into the sink

use std::sync::Arc;

use weft_protocol::{encode_record, EventKind, LINE_CAPACITY};
use weft_sinks::{open_sink, SinkMetrics, SinkTarget};

use crate::pool::RecordPool;
use crate::queue::EventQueue;

/// Thread name for the background writer
pub(crate) const WRITER_THREAD_NAME: &str = "weft-writer";

/// Drain loop run on the writer thread
///
/// Resolves the sink, then consumes records until the shutdown sentinel:
/// encode, write, release to the pool. A sink construction failure aborts
/// the process - tracing is correctness-adjacent and must never run
/// silently degraded. A mid-stream write failure flips the drop latch and
/// the loop keeps draining (and recycling) records without writing, so
/// producers never notice a broken trace channel.
pub(crate) fn run(
    target: SinkTarget,
    queue: Arc<EventQueue>,
    pool: Arc<RecordPool>,
    metrics: Arc<SinkMetrics>,
) {
    let mut sink = match open_sink(&target) {
        Ok(sink) => sink,
        Err(e) => {
            tracing::error!(sink = %target, error = %e, "failed to open trace sink");
            std::process::abort();
        }
    };
    tracing::debug!(sink = %target, "trace writer started");

    let mut line = String::with_capacity(LINE_CAPACITY);
    let mut dropping = false;

    loop {
        let record = queue.dequeue_blocking();
        if record.kind == EventKind::Shutdown {
            pool.release(record);
            break;
        }

        match encode_record(&record, &mut line) {
            Ok(()) => {
                if !dropping {
                    match sink.write_line(&line) {
                        Ok(()) => metrics.record_line(line.len() as u64),
                        Err(e) => {
                            dropping = true;
                            metrics.record_error();
                            tracing::warn!(
                                sink = %target,
                                error = %e,
                                "trace sink write failed, dropping further records"
                            );
                        }
                    }
                }
            }
            Err(e) => {
                // Unreachable for records produced by the engine; keep the
                // queue draining regardless
                tracing::warn!(error = %e, "skipping unencodable record");
            }
        }
        pool.release(record);
    }

    if let Err(e) = sink.close() {
        tracing::warn!(sink = %target, error = %e, "failed to close trace sink");
    }

    let snapshot = metrics.snapshot();
    tracing::debug!(
        sink = %target,
        lines = snapshot.lines_written,
        bytes = snapshot.bytes_written,
        errors = snapshot.write_errors,
        "trace writer shut down"
    );
}
