//! Record pool - recycles event-record allocations
//!
//! The hot path of an instrumented program allocates at most once per
//! record lifetime: after the writer encodes a record it returns here and
//! the next write call reuses it, text capacity included.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use weft_protocol::EventRecord;

/// Mutex-guarded free list of reusable records
///
/// The pool is a cache, not a hard cap: `acquire` falls back to a fresh
/// allocation when the free list is empty and `release` always accepts.
/// Released records are NOT scrubbed - every acquisition site must fully
/// reinitialize the record (see [`EventRecord::reset`]).
pub struct RecordPool {
    /// Free list of released records
    free: Mutex<Vec<Box<EventRecord>>>,

    /// Reuse counters
    metrics: PoolMetrics,
}

impl RecordPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self {
            free: Mutex::new(Vec::new()),
            metrics: PoolMetrics::new(),
        }
    }

    /// Take a record from the free list, or allocate one
    ///
    /// O(1). The returned record carries stale fields from its previous
    /// use; the caller must reset it before filling.
    #[inline]
    pub fn acquire(&self) -> Box<EventRecord> {
        match self.free.lock().pop() {
            Some(record) => {
                self.metrics.record_hit();
                record
            }
            None => {
                self.metrics.record_miss();
                Box::new(EventRecord::new())
            }
        }
    }

    /// Return a record to the free list
    ///
    /// Fields are left as-is; the reinitialize-on-acquire contract makes
    /// scrubbing here redundant work on the consumer thread.
    #[inline]
    pub fn release(&self, record: Box<EventRecord>) {
        self.metrics.record_return();
        self.free.lock().push(record);
    }

    /// Number of records currently available for reuse
    pub fn available(&self) -> usize {
        self.free.lock().len()
    }

    /// Get reference to reuse counters
    pub fn metrics(&self) -> &PoolMetrics {
        &self.metrics
    }
}

impl Default for RecordPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Reuse counters for the record pool
#[derive(Debug, Default)]
pub struct PoolMetrics {
    /// Acquisitions served from the free list
    pub hits: AtomicU64,

    /// Acquisitions that had to allocate
    pub misses: AtomicU64,

    /// Records returned to the free list
    pub returns: AtomicU64,
}

impl PoolMetrics {
    /// Create new metrics instance
    pub const fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            returns: AtomicU64::new(0),
        }
    }

    /// Record a free-list hit
    #[inline]
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an allocation
    #[inline]
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a return
    #[inline]
    pub fn record_return(&self) {
        self.returns.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all counters
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            returns: self.returns.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of pool metrics
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub returns: u64,
}
