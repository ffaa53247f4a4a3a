//! Tests for the TCP stream sink

use std::io::Read;
use std::net::TcpListener;
use std::thread;

use crate::sink::TraceSink;
use crate::tcp::TcpSink;

#[test]
fn test_streams_lines_to_listener() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = thread::spawn(move || {
        let (mut conn, _) = listener.accept().unwrap();
        let mut received = String::new();
        conn.read_to_string(&mut received).unwrap();
        received
    });

    let mut sink = TcpSink::connect(&addr.to_string()).unwrap();
    sink.write_line("CAL 0 0 Foo\n").unwrap();
    sink.write_line("RET 0 1 Foo\n").unwrap();
    sink.close().unwrap();

    assert_eq!(server.join().unwrap(), "CAL 0 0 Foo\nRET 0 1 Foo\n");
}

#[test]
fn test_connect_refused_is_an_error() {
    // Bind then drop to get a port that refuses connections
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    assert!(TcpSink::connect(&addr.to_string()).is_err());
}

#[test]
fn test_resolve_failure_is_an_error() {
    assert!(TcpSink::connect("no-port-given").is_err());
}

#[test]
fn test_write_after_close_is_noop() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = thread::spawn(move || {
        let (mut conn, _) = listener.accept().unwrap();
        let mut received = String::new();
        conn.read_to_string(&mut received).unwrap();
        received
    });

    let mut sink = TcpSink::connect(&addr.to_string()).unwrap();
    sink.write_line("EVT 0 0 \"only line\"\n").unwrap();
    sink.close().unwrap();
    sink.write_line("EVT 0 1 \"dropped\"\n").unwrap();

    assert_eq!(server.join().unwrap(), "EVT 0 0 \"only line\"\n");
}
