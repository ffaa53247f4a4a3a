//! Event queue - the single FIFO between all producers and the writer
//!
//! Backpressure policy: before acquiring a record, a producer checks the
//! queue depth against a fixed threshold. Above it, the producer blocks
//! until the writer drains back under the threshold. This trades
//! instrumented-program latency for bounded memory and zero event loss -
//! backpressure deliberately propagates into the traced program instead of
//! dropping events.

use std::collections::VecDeque;

use parking_lot::{Condvar, Mutex};

use weft_protocol::EventRecord;

/// Default producer-stall threshold (queue depth)
pub const DEFAULT_QUEUE_THRESHOLD: usize = 1000;

/// Thread-safe FIFO with a blocking consumer and producer backpressure
///
/// All waits are condition-signaled: the consumer is woken by `enqueue`,
/// stalled producers by the depth dropping under the threshold, and
/// startup/drain waiters by the queue reaching empty.
pub struct EventQueue {
    /// The FIFO itself
    inner: Mutex<VecDeque<Box<EventRecord>>>,

    /// Producer-stall threshold
    threshold: usize,

    /// Signaled on enqueue (one waiting consumer)
    ready: Condvar,

    /// Signaled when depth drops below the threshold
    below_threshold: Condvar,

    /// Signaled when the queue reaches empty
    drained: Condvar,
}

impl EventQueue {
    /// Create a queue with the given backpressure threshold
    pub fn new(threshold: usize) -> Self {
        Self {
            inner: Mutex::new(VecDeque::new()),
            threshold,
            ready: Condvar::new(),
            below_threshold: Condvar::new(),
            drained: Condvar::new(),
        }
    }

    /// Backpressure threshold this queue was built with
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Append a record and wake one waiting consumer
    ///
    /// Safe under arbitrary concurrent producers.
    pub fn enqueue(&self, record: Box<EventRecord>) {
        let mut queue = self.inner.lock();
        queue.push_back(record);
        self.ready.notify_one();
    }

    /// Remove and return the head, suspending while the queue is empty
    ///
    /// Consumer-only. The wait is a true condition wait, re-checked on wake
    /// to tolerate spurious wakeups. After removing the head, waiters on the
    /// below-threshold and drained conditions are notified as applicable.
    pub fn dequeue_blocking(&self) -> Box<EventRecord> {
        let mut queue = self.inner.lock();
        loop {
            if let Some(record) = queue.pop_front() {
                if queue.len() < self.threshold {
                    self.below_threshold.notify_all();
                }
                if queue.is_empty() {
                    self.drained.notify_all();
                }
                return record;
            }
            self.ready.wait(&mut queue);
        }
    }

    /// Current depth - used only for backpressure, not an exact count
    pub fn approx_size(&self) -> usize {
        self.inner.lock().len()
    }

    /// Block the calling producer while the depth is at or above the
    /// threshold
    ///
    /// Emits a diagnostic notice at stall entry and exit. Self-resolving:
    /// the consumer signals as soon as it drains under the threshold.
    pub fn wait_below_threshold(&self) {
        let mut queue = self.inner.lock();
        if queue.len() < self.threshold {
            return;
        }

        tracing::warn!(
            depth = queue.len(),
            threshold = self.threshold,
            "trace queue full, stalling producer thread"
        );
        while queue.len() >= self.threshold {
            self.below_threshold.wait(&mut queue);
        }
        tracing::debug!("trace queue below threshold, resuming producer thread");
    }

    /// Block until the consumer has observed the queue empty
    pub fn wait_until_empty(&self) {
        let mut queue = self.inner.lock();
        while !queue.is_empty() {
            self.drained.wait(&mut queue);
        }
    }
}
