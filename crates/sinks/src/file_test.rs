//! Tests for the file sink

use std::fs;

use tempfile::tempdir;

use crate::file::FileSink;
use crate::sink::TraceSink;

#[test]
fn test_write_and_close() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.log");

    let mut sink = FileSink::create(&path).unwrap();
    sink.write_line("CAL 0 0 Foo\n").unwrap();
    sink.write_line("RET 0 1 Foo\n").unwrap();
    sink.close().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "CAL 0 0 Foo\nRET 0 1 Foo\n");
}

#[test]
fn test_create_truncates_previous_run() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.log");
    fs::write(&path, "stale contents\n").unwrap();

    let mut sink = FileSink::create(&path).unwrap();
    sink.write_line("# 0 0 \"fresh\"\n").unwrap();
    sink.close().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "# 0 0 \"fresh\"\n");
}

#[test]
fn test_create_fails_for_bad_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("trace.log");

    assert!(FileSink::create(&path).is_err());
}

#[test]
fn test_close_is_idempotent_and_latches() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.log");

    let mut sink = FileSink::create(&path).unwrap();
    sink.write_line("EVT 0 0 \"before\"\n").unwrap();
    sink.close().unwrap();
    sink.close().unwrap();

    // Writes after close are silent no-ops
    sink.write_line("EVT 0 1 \"after\"\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "EVT 0 0 \"before\"\n");
}
