//! Common types shared by all sinks

use std::sync::atomic::{AtomicU64, Ordering};

/// Write counters for the active sink
///
/// Owned by the writer thread and shared with the engine through an `Arc`;
/// all counters are relaxed.
#[derive(Debug, Default)]
pub struct SinkMetrics {
    /// Lines successfully handed to the sink
    pub lines_written: AtomicU64,

    /// Bytes successfully handed to the sink
    pub bytes_written: AtomicU64,

    /// Write errors (the sink is dropped after the first)
    pub write_errors: AtomicU64,
}

impl SinkMetrics {
    /// Create new metrics instance
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    /// Record a successfully written line
    #[inline]
    pub fn record_line(&self, bytes: u64) {
        self.lines_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Record a write error
    #[inline]
    pub fn record_error(&self) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            lines_written: self.lines_written.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            write_errors: self.write_errors.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of sink metrics
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub lines_written: u64,
    pub bytes_written: u64,
    pub write_errors: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_line() {
        let metrics = SinkMetrics::new();
        metrics.record_line(12);
        metrics.record_line(30);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.lines_written, 2);
        assert_eq!(snapshot.bytes_written, 42);
        assert_eq!(snapshot.write_errors, 0);
    }

    #[test]
    fn test_record_error() {
        let metrics = SinkMetrics::new();
        metrics.record_error();

        assert_eq!(metrics.snapshot().write_errors, 1);
    }
}
