//! Tests for the engine facade and its lifecycle

use std::fs;

use tempfile::tempdir;

use crate::config::EngineConfig;
use crate::engine::{Engine, EngineState};
use crate::queue::DEFAULT_QUEUE_THRESHOLD;

#[test]
fn test_default_config() {
    let config = EngineConfig::default();
    assert_eq!(config.output, None);
    assert_eq!(config.queue_threshold, DEFAULT_QUEUE_THRESHOLD);
}

#[test]
fn test_config_builders() {
    let config = EngineConfig::default()
        .with_output("tcp:127.0.0.1:9000")
        .with_queue_threshold(64);

    assert_eq!(config.output.as_deref(), Some("tcp:127.0.0.1:9000"));
    assert_eq!(config.queue_threshold, 64);
}

#[test]
fn test_explicit_output_overrides_environment() {
    use weft_sinks::SinkTarget;

    let config = EngineConfig::default().with_output("/tmp/explicit.log");
    assert_eq!(
        config.resolve_target(),
        SinkTarget::File("/tmp/explicit.log".into())
    );
}

#[test]
fn test_empty_output_selects_default_file() {
    use weft_sinks::{SinkTarget, DEFAULT_LOG_FILE};

    let config = EngineConfig::default().with_output("");
    assert_eq!(
        config.resolve_target(),
        SinkTarget::File(DEFAULT_LOG_FILE.into())
    );
}

#[test]
fn test_new_engine_is_disabled() {
    let engine = Engine::new();
    assert_eq!(engine.state(), EngineState::Disabled);
    assert!(!engine.is_enabled());
}

#[test]
fn test_writes_while_disabled_produce_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.log");
    let engine =
        Engine::with_config(EngineConfig::default().with_output(path.display().to_string()));

    engine.write_func_enter("Foo");
    engine.write_event("dropped");
    engine.write_terminate();

    // The writer was never spawned, so the sink was never even created
    assert!(!path.exists());
    assert_eq!(engine.sink_metrics().lines_written, 0);
}

#[test]
fn test_enable_emits_startup_comment() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.log");
    let engine =
        Engine::with_config(EngineConfig::default().with_output(path.display().to_string()));

    engine.enable();
    assert_eq!(engine.state(), EngineState::Enabled);
    engine.shutdown();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("# "));
    assert!(lines[0].ends_with("\"weft trace start\""));
}

#[test]
fn test_enable_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.log");
    let engine =
        Engine::with_config(EngineConfig::default().with_output(path.display().to_string()));

    engine.enable();
    engine.enable();
    engine.shutdown();

    // A second enable neither restarts the writer nor re-emits the comment
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn test_shutdown_transitions_to_stopped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.log");
    let engine =
        Engine::with_config(EngineConfig::default().with_output(path.display().to_string()));

    engine.enable();
    engine.write_event("before");
    engine.shutdown();

    assert_eq!(engine.state(), EngineState::Stopped);
    assert!(!engine.is_enabled());
}

#[test]
fn test_late_writes_after_shutdown_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.log");
    let engine =
        Engine::with_config(EngineConfig::default().with_output(path.display().to_string()));

    engine.enable();
    engine.write_event("kept");
    engine.shutdown();

    let before = fs::read_to_string(&path).unwrap();
    engine.write_event("dropped");
    engine.write_func_enter("Dropped");
    engine.shutdown();

    // No transition back to enabled, no further lines
    assert_eq!(engine.state(), EngineState::Stopped);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_shutdown_without_enable_is_noop() {
    let engine = Engine::new();
    engine.shutdown();
    assert_eq!(engine.state(), EngineState::Disabled);
}

#[test]
fn test_sink_metrics_count_written_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.log");
    let engine =
        Engine::with_config(EngineConfig::default().with_output(path.display().to_string()));

    engine.enable();
    engine.write_event("one");
    engine.write_event("two");
    engine.shutdown();

    let metrics = engine.sink_metrics();
    // Startup comment + two events
    assert_eq!(metrics.lines_written, 3);
    assert_eq!(metrics.write_errors, 0);
    assert!(metrics.bytes_written > 0);
}
