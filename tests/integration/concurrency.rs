//! Concurrent use of a shared collector

use std::sync::{Arc, Barrier};
use std::thread;

use breadcrumbs::{Breadcrumb, Collector, Config, RingBuffer};

#[test]
fn concurrent_adds_respect_capacity() {
    let collector = Arc::new(Collector::with_buffer(
        Config::default(),
        RingBuffer::new(50).unwrap(),
    ));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let collector = Arc::clone(&collector);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..200 {
                    collector.add(Breadcrumb::new(format!("{t}:{i}")));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(collector.len(), 50);
    assert_eq!(collector.stats().evicted, 8 * 200 - 50);
}

#[test]
fn per_thread_order_survives_interleaving() {
    let collector = Arc::new(Collector::with_buffer(
        Config::default(),
        RingBuffer::new(1000).unwrap(),
    ));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let collector = Arc::clone(&collector);
            thread::spawn(move || {
                for i in 0..100 {
                    collector.add(Breadcrumb::builder(i.to_string()).category(t.to_string()).build());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for t in 0..4 {
        let seq: Vec<usize> = collector
            .each()
            .filter(|c| c.category() == t.to_string())
            .filter_map(|c| c.message().parse().ok())
            .collect();
        assert_eq!(seq, (0..100).collect::<Vec<_>>());
    }
}

#[test]
fn clear_and_snapshot_during_adds() {
    let config = Arc::new(Config::default());
    let collector = Arc::new(Collector::with_buffer(
        Arc::clone(&config),
        RingBuffer::new(16).unwrap(),
    ));

    let writer = {
        let collector = Arc::clone(&collector);
        thread::spawn(move || {
            for i in 0..2000 {
                collector.add(Breadcrumb::new(i.to_string()));
            }
        })
    };

    for _ in 0..200 {
        let snapshot = collector.to_vec();
        assert!(snapshot.len() <= 16);

        // Each snapshot is a contiguous, increasing run.
        let numbers: Vec<u32> = snapshot.iter().filter_map(|c| c.message().parse().ok()).collect();
        assert!(numbers.windows(2).all(|w| w[1] == w[0] + 1));

        collector.clear();
    }

    writer.join().unwrap();
    assert!(collector.len() <= 16);
}
