//! Tests for per-tier counters

use std::sync::Arc;
use tiercache_domain::{CounterSnapshot, TierCounters};

#[test]
fn test_counters_start_at_zero() {
    let counters = TierCounters::new();
    assert_eq!(counters.snapshot(), CounterSnapshot::default());
    assert!((counters.snapshot().hit_rate() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_counters_record_and_reset() {
    let counters = TierCounters::new();
    for _ in 0..3 {
        counters.record_hit();
    }
    counters.record_miss();
    counters.record_set();
    counters.record_deletes(2);

    let snapshot = counters.snapshot();
    assert_eq!(snapshot.hits, 3);
    assert_eq!(snapshot.misses, 1);
    assert_eq!(snapshot.sets, 1);
    assert_eq!(snapshot.deletes, 2);
    assert!((snapshot.hit_rate() - 0.75).abs() < f64::EPSILON);

    counters.reset();
    assert_eq!(counters.snapshot(), CounterSnapshot::default());
}

#[test]
fn test_counters_are_safe_across_threads() {
    let counters = Arc::new(TierCounters::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let counters = Arc::clone(&counters);
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    counters.record_hit();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(counters.snapshot().hits, 4000);
}
