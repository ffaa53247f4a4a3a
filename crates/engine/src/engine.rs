//! Engine facade - lifecycle and the write operations
//!
//! The engine owns the previously scattered pieces of tracer state (pool,
//! queue, clock, writer handle) as fields. It can be used standalone with an
//! explicit instance, or through the process-wide instance the `weft` facade
//! crate exposes.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use weft_protocol::{EventKind, EventRecord};
use weft_sinks::{MetricsSnapshot, SinkMetrics};

use crate::clock::TraceClock;
use crate::config::EngineConfig;
use crate::pool::RecordPool;
use crate::queue::EventQueue;
use crate::writer;

/// Lifecycle state of the engine
///
/// Transitions only move forward; once stopped, the engine rejects every
/// write, so a late call can never race a dead queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EngineState {
    /// Initial state; writes are no-ops
    Disabled = 0,
    /// Writer running, writes accepted
    Enabled = 1,
    /// Shutdown sentinel enqueued, drain in progress
    Draining = 2,
    /// Drain complete, sink closed; writes are no-ops again
    Stopped = 3,
}

impl EngineState {
    /// Parse state from raw byte value
    #[inline]
    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Enabled,
            2 => Self::Draining,
            3 => Self::Stopped,
            _ => Self::Disabled,
        }
    }
}

/// The trace engine
///
/// Exposes the write operations called by instrumented sites and owns the
/// background writer's lifecycle. All write operations are cheap no-ops
/// unless the engine is enabled, and none of them ever surfaces an error to
/// the call site: tracing must not alter the traced program's control flow,
/// except for the deliberate backpressure stall.
pub struct Engine {
    /// Lifecycle state
    state: AtomicU8,

    /// Engine configuration (sink selection, backpressure threshold)
    config: EngineConfig,

    /// Thread identity + logical timestamps
    clock: TraceClock,

    /// Record recycler, shared with the writer
    pool: Arc<RecordPool>,

    /// Producer/consumer FIFO, shared with the writer
    queue: Arc<EventQueue>,

    /// Sink write counters, shared with the writer
    sink_metrics: Arc<SinkMetrics>,

    /// Writer join handle; `Some` while the writer is alive
    writer: Mutex<Option<JoinHandle<()>>>,
}

impl Engine {
    /// Create a disabled engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a disabled engine with the given configuration
    pub fn with_config(config: EngineConfig) -> Self {
        let queue = Arc::new(EventQueue::new(config.queue_threshold));
        Self {
            state: AtomicU8::new(EngineState::Disabled as u8),
            config,
            clock: TraceClock::new(),
            pool: Arc::new(RecordPool::new()),
            queue,
            sink_metrics: Arc::new(SinkMetrics::new()),
            writer: Mutex::new(None),
        }
    }

    /// Current lifecycle state
    #[inline]
    pub fn state(&self) -> EngineState {
        EngineState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Whether write operations are currently accepted
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.state.load(Ordering::Acquire) == EngineState::Enabled as u8
    }

    /// Snapshot of the sink write counters
    pub fn sink_metrics(&self) -> MetricsSnapshot {
        self.sink_metrics.snapshot()
    }

    /// Start tracing: spawn the writer and wait until it is consuming
    ///
    /// Idempotent: only the first call on a disabled engine does anything.
    /// Emits a startup comment record and blocks until the queue has been
    /// observed empty, so callers know the writer is live before their first
    /// instrumented call.
    ///
    /// Sink construction happens on the writer thread; a failure there
    /// aborts the process - tracing must never run silently degraded.
    pub fn enable(&self) {
        if self
            .state
            .compare_exchange(
                EngineState::Disabled as u8,
                EngineState::Enabled as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_err()
        {
            return;
        }

        let target = self.config.resolve_target();
        let queue = Arc::clone(&self.queue);
        let pool = Arc::clone(&self.pool);
        let metrics = Arc::clone(&self.sink_metrics);

        let handle = thread::Builder::new()
            .name(writer::WRITER_THREAD_NAME.into())
            .spawn(move || writer::run(target, queue, pool, metrics));
        match handle {
            Ok(handle) => {
                *self.writer.lock() = Some(handle);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to spawn trace writer thread");
                std::process::abort();
            }
        }

        self.write_comment("weft trace start");
        self.queue.wait_until_empty();
    }

    /// Stop tracing: drain the queue and close the sink
    ///
    /// The first call on an enabled engine enqueues a stamped shutdown
    /// sentinel and joins the writer - an unbounded, non-cancellable wait
    /// that guarantees every previously enqueued event reached the sink.
    /// Later calls (and calls on a never-enabled engine) are no-ops.
    pub fn shutdown(&self) {
        if self
            .state
            .compare_exchange(
                EngineState::Enabled as u8,
                EngineState::Draining as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_err()
        {
            return;
        }

        // The sentinel is stamped like any other record so it sorts
        // correctly in the drain
        let mut record = self.pool.acquire();
        record.reset(EventKind::Shutdown, EventKind::Shutdown.flags());
        record.thread_id = self.clock.thread_id();
        record.timestamp = self.clock.next_timestamp();
        self.queue.enqueue(record);

        let handle = self.writer.lock().take();
        if let Some(handle) = handle {
            tracing::debug!("draining trace queue");
            let _ = handle.join();
        }

        self.state
            .store(EngineState::Stopped as u8, Ordering::Release);
    }

    // =========================================================================
    // Write operations
    // =========================================================================

    /// Function entry marker
    pub fn write_func_enter(&self, name: &'static str) {
        if !self.is_enabled() {
            return;
        }
        let mut record = self.produce(EventKind::FuncEnter);
        record.name = name;
        self.queue.enqueue(record);
    }

    /// Function exit marker
    pub fn write_func_exit(&self, name: &'static str) {
        if !self.is_enabled() {
            return;
        }
        let mut record = self.produce(EventKind::FuncExit);
        record.name = name;
        self.queue.enqueue(record);
    }

    /// Phase change marker
    pub fn write_phase(&self, name: &'static str) {
        if !self.is_enabled() {
            return;
        }
        let mut record = self.produce(EventKind::Phase);
        record.name = name;
        self.queue.enqueue(record);
    }

    /// Message send marker; `value2` is 0 for the one-value form
    pub fn write_send(&self, value1: u64, value2: u64) {
        if !self.is_enabled() {
            return;
        }
        let mut record = self.produce(EventKind::Send);
        record.value1 = value1;
        record.value2 = value2;
        self.queue.enqueue(record);
    }

    /// Message receive marker; `value2` is 0 for the one-value form
    pub fn write_recv(&self, value1: u64, value2: u64) {
        if !self.is_enabled() {
            return;
        }
        let mut record = self.produce(EventKind::Recv);
        record.value1 = value1;
        record.value2 = value2;
        self.queue.enqueue(record);
    }

    /// Free-text comment
    pub fn write_comment(&self, text: &str) {
        self.write_text(EventKind::Comment, text);
    }

    /// Free-text information marker
    pub fn write_info(&self, text: &str) {
        self.write_text(EventKind::Info, text);
    }

    /// Free-text event marker
    pub fn write_event(&self, text: &str) {
        self.write_text(EventKind::Event, text);
    }

    /// Name the calling thread in the visualization
    ///
    /// Emitted without a timestamp so renaming does not occupy a timeline
    /// slot.
    pub fn write_thread_name(&self, name: &str) {
        self.write_text(EventKind::ThreadName, name);
    }

    /// Explicit terminate marker
    pub fn write_terminate(&self) {
        if !self.is_enabled() {
            return;
        }
        let record = self.produce(EventKind::Terminate);
        self.queue.enqueue(record);
    }

    /// Shared path for the text-payload kinds
    fn write_text(&self, kind: EventKind, text: &str) {
        if !self.is_enabled() {
            return;
        }
        let mut record = self.produce(kind);
        record.text.push_str(text);
        self.queue.enqueue(record);
    }

    /// Backpressure-check, acquire, and stamp a record
    ///
    /// Identity and timestamp are assigned here, exactly once per record,
    /// so emitted order reflects causal production order. The kind-specific
    /// payload is filled by the caller before enqueue.
    fn produce(&self, kind: EventKind) -> Box<EventRecord> {
        self.queue.wait_below_threshold();
        let mut record = self.pool.acquire();
        record.reset(kind, kind.flags());
        record.thread_id = self.clock.thread_id();
        record.timestamp = self.clock.next_timestamp();
        record
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Engine {
    /// Defined teardown for standalone instances: drain on drop
    ///
    /// A no-op unless the engine is currently enabled. The process-wide
    /// instance is never dropped; it drains through the exit hook instead.
    fn drop(&mut self) {
        self.shutdown();
    }
}
