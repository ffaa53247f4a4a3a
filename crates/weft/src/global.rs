//! The process-wide engine instance
//!
//! Markers operate on a single documented process-wide engine rather than ad
//! hoc globals: one `OnceLock` holds the instance, `trace_start` is the
//! defined init and the registered exit hook (or `trace_stop`) the defined
//! teardown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use weft_engine::{Engine, EngineConfig};

static ENGINE: OnceLock<Engine> = OnceLock::new();

/// Guards exit-hook registration so repeated starts register exactly once
static EXIT_HOOK_REGISTERED: AtomicBool = AtomicBool::new(false);

/// The process-wide engine, if tracing has been started
#[inline]
pub fn engine() -> Option<&'static Engine> {
    ENGINE.get()
}

/// Start tracing with the default configuration
///
/// The sink is selected by the `WEFT_LOG` environment variable; empty or
/// unset falls back to the default file name. Returns after the writer
/// thread has begun consuming. Idempotent.
pub fn trace_start() {
    trace_start_with(EngineConfig::default());
}

/// Start tracing with an explicit configuration
///
/// The configuration is applied by the first start; later calls reuse the
/// existing engine. Registers a process-exit hook that drains the queue, so
/// a program that never calls [`trace_stop`] still flushes its trace.
pub fn trace_start_with(config: EngineConfig) {
    let engine = ENGINE.get_or_init(|| Engine::with_config(config));
    engine.enable();
    register_exit_hook();
}

/// Stop tracing: drain every enqueued event into the sink and close it
///
/// Safe to call at any time; the exit hook makes a later second call a
/// no-op.
pub fn trace_stop() {
    if let Some(engine) = ENGINE.get() {
        engine.shutdown();
    }
}

fn register_exit_hook() {
    if EXIT_HOOK_REGISTERED.swap(true, Ordering::SeqCst) {
        return;
    }
    // SAFETY: the hook is an extern "C" fn that does not unwind
    let rc = unsafe { libc::atexit(shutdown_at_exit) };
    if rc != 0 {
        // Only possible when the registration table is exhausted; the trace
        // still flushes on an explicit trace_stop
        tracing::warn!("failed to register exit hook, call trace_stop() explicitly");
    }
}

extern "C" fn shutdown_at_exit() {
    trace_stop();
}
