//! Point markers - the instrumentation surface
//!
//! Free functions mapping 1:1 onto engine write operations, plus the RAII
//! scope tracer behind the `trace_fn!`/`trace_scope!` macros. Every marker
//! is a silent no-op until [`crate::trace_start`] has run.

use crate::global::engine;
use crate::value::TraceValue;

/// Phase change marker: the current scope moved to a new stage
pub fn phase(name: &'static str) {
    if let Some(engine) = engine() {
        engine.write_phase(name);
    }
}

/// Mark sending a message identified by one value
pub fn send(value: impl TraceValue) {
    if let Some(engine) = engine() {
        engine.write_send(value.trace_value(), 0);
    }
}

/// Mark sending a message identified by two values
pub fn send2(value1: impl TraceValue, value2: impl TraceValue) {
    if let Some(engine) = engine() {
        engine.write_send(value1.trace_value(), value2.trace_value());
    }
}

/// Mark receiving a message identified by one value
pub fn recv(value: impl TraceValue) {
    if let Some(engine) = engine() {
        engine.write_recv(value.trace_value(), 0);
    }
}

/// Mark receiving a message identified by two values
pub fn recv2(value1: impl TraceValue, value2: impl TraceValue) {
    if let Some(engine) = engine() {
        engine.write_recv(value1.trace_value(), value2.trace_value());
    }
}

/// Free-text event marker (a point on the timeline)
pub fn event(text: &str) {
    if let Some(engine) = engine() {
        engine.write_event(text);
    }
}

/// Free-text information marker
///
/// See also [`trace_info!`](crate::trace_info) for the formatted-value
/// convenience form.
pub fn info(text: &str) {
    if let Some(engine) = engine() {
        engine.write_info(text);
    }
}

/// Free-text comment (ignored by the timeline layout)
pub fn comment(text: &str) {
    if let Some(engine) = engine() {
        engine.write_comment(text);
    }
}

/// Explicit terminate marker
pub fn terminate() {
    if let Some(engine) = engine() {
        engine.write_terminate();
    }
}

/// Name the calling thread in the visualization
pub fn set_thread_name(name: &str) {
    if let Some(engine) = engine() {
        engine.write_thread_name(name);
    }
}

/// RAII guard tracing a function or custom-named scope
///
/// Emits a function-entry record on construction and the matching exit
/// record when dropped, so every early return and unwind closes its
/// execution bar.
pub struct ScopeTracer {
    name: &'static str,
}

impl ScopeTracer {
    /// Enter a scope with the given static label
    pub fn new(name: &'static str) -> Self {
        if let Some(engine) = engine() {
            engine.write_func_enter(name);
        }
        Self { name }
    }
}

impl Drop for ScopeTracer {
    fn drop(&mut self) {
        if let Some(engine) = engine() {
            engine.write_func_exit(self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global engine is deliberately never started in unit tests; the
    // full lifecycle is covered by tests/markers.rs

    #[test]
    fn test_markers_without_engine_are_noops() {
        assert!(engine().is_none());

        phase("idle");
        send(1u64);
        recv2(1u64, 2u64);
        event("nothing happens");
        info("nothing happens");
        comment("nothing happens");
        set_thread_name("Nobody");
        terminate();

        let _scope = ScopeTracer::new("unstarted");
    }

    #[test]
    fn test_function_name_macro_names_the_function() {
        fn probe() -> &'static str {
            crate::__function_name!()
        }

        let name = probe();
        assert!(name.ends_with("probe"), "unexpected name: {name}");
        assert!(!name.contains(' '));
    }
}
