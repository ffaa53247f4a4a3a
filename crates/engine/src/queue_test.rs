//! Tests for the event queue and its backpressure contract

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use weft_protocol::{EventKind, EventRecord};

use crate::queue::EventQueue;

fn record(timestamp: u64) -> Box<EventRecord> {
    let mut rec = Box::new(EventRecord::new());
    rec.reset(EventKind::Event, EventKind::Event.flags());
    rec.timestamp = timestamp;
    rec
}

#[test]
fn test_fifo_order() {
    let queue = EventQueue::new(1000);
    queue.enqueue(record(1));
    queue.enqueue(record(2));
    queue.enqueue(record(3));

    assert_eq!(queue.dequeue_blocking().timestamp, 1);
    assert_eq!(queue.dequeue_blocking().timestamp, 2);
    assert_eq!(queue.dequeue_blocking().timestamp, 3);
}

#[test]
fn test_approx_size() {
    let queue = EventQueue::new(1000);
    assert_eq!(queue.approx_size(), 0);

    queue.enqueue(record(1));
    queue.enqueue(record(2));
    assert_eq!(queue.approx_size(), 2);

    queue.dequeue_blocking();
    assert_eq!(queue.approx_size(), 1);
}

#[test]
fn test_dequeue_blocks_until_enqueue() {
    let queue = Arc::new(EventQueue::new(1000));

    let consumer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || queue.dequeue_blocking().timestamp)
    };

    // Give the consumer time to reach its wait
    thread::sleep(Duration::from_millis(50));
    queue.enqueue(record(7));

    assert_eq!(consumer.join().unwrap(), 7);
}

#[test]
fn test_producer_stalls_at_threshold_and_resumes() {
    let queue = Arc::new(EventQueue::new(4));
    for i in 0..4 {
        queue.enqueue(record(i));
    }

    let passed = Arc::new(AtomicBool::new(false));
    let producer = {
        let queue = Arc::clone(&queue);
        let passed = Arc::clone(&passed);
        thread::spawn(move || {
            queue.wait_below_threshold();
            passed.store(true, Ordering::SeqCst);
            queue.enqueue(record(100));
        })
    };

    // The producer must stay blocked while the queue sits at the threshold
    thread::sleep(Duration::from_millis(100));
    assert!(!passed.load(Ordering::SeqCst));

    // One dequeue drops the depth under the threshold and unblocks it
    queue.dequeue_blocking();
    producer.join().unwrap();
    assert!(passed.load(Ordering::SeqCst));
    assert_eq!(queue.approx_size(), 4);
}

#[test]
fn test_wait_below_threshold_returns_immediately_when_under() {
    let queue = EventQueue::new(4);
    queue.enqueue(record(1));

    // Depth 1 < 4: must not block
    queue.wait_below_threshold();
}

#[test]
fn test_wait_until_empty() {
    let queue = Arc::new(EventQueue::new(1000));
    queue.enqueue(record(1));
    queue.enqueue(record(2));

    let consumer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            queue.dequeue_blocking();
            thread::sleep(Duration::from_millis(50));
            queue.dequeue_blocking();
        })
    };

    queue.wait_until_empty();
    assert_eq!(queue.approx_size(), 0);
    consumer.join().unwrap();
}

#[test]
fn test_concurrent_producers_lose_nothing() {
    let queue = Arc::new(EventQueue::new(100_000));
    let mut producers = Vec::new();

    for t in 0..4u64 {
        let queue = Arc::clone(&queue);
        producers.push(thread::spawn(move || {
            for i in 0..250u64 {
                queue.enqueue(record(t * 1000 + i));
            }
        }));
    }
    for producer in producers {
        producer.join().unwrap();
    }

    let mut seen = Vec::new();
    for _ in 0..1000 {
        seen.push(queue.dequeue_blocking().timestamp);
    }
    assert_eq!(queue.approx_size(), 0);

    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 1000);
}
