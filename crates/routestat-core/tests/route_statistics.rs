//! RouteStatistics counter semantics.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use routestat_core::RouteStatistics;

#[test]
fn fresh_entry_has_zero_average() {
    let stats = RouteStatistics::new();
    assert_eq!(stats.request_count(), 0);
    assert_eq!(stats.average_response_time(), Duration::ZERO);
}

#[test]
fn average_is_mean_of_recorded_durations() {
    let stats = RouteStatistics::new();
    for ms in [10, 20, 30] {
        stats.record_request(Duration::from_millis(ms));
    }
    assert_eq!(stats.request_count(), 3);
    assert_eq!(stats.average_response_time(), Duration::from_millis(20));
    assert_eq!(stats.total_response_time(), Duration::from_millis(60));
}

#[test]
fn concurrent_records_are_not_lost() {
    const THREADS: usize = 16;
    const PER_THREAD: usize = 2_500;

    let stats = RouteStatistics::new();
    std::thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..PER_THREAD {
                    stats.record_request(Duration::from_micros(100));
                }
            });
        }
    });

    assert_eq!(stats.request_count(), (THREADS * PER_THREAD) as u64);
    assert_eq!(stats.average_response_time(), Duration::from_micros(100));
}

#[test]
fn average_never_exceeds_recorded_durations_under_contention() {
    use std::sync::atomic::{AtomicBool, Ordering};

    const WRITERS: usize = 8;
    const PER_WRITER: usize = 50_000;

    let stats = RouteStatistics::new();
    let done = AtomicBool::new(false);
    let mut worst = Duration::ZERO;

    std::thread::scope(|s| {
        let writers: Vec<_> = (0..WRITERS)
            .map(|_| {
                s.spawn(|| {
                    for _ in 0..PER_WRITER {
                        stats.record_request(Duration::from_millis(1));
                    }
                })
            })
            .collect();

        s.spawn(|| {
            for w in writers {
                w.join().unwrap();
            }
            done.store(true, Ordering::Release);
        });

        while !done.load(Ordering::Acquire) {
            worst = worst.max(stats.average_response_time());
        }
    });

    assert!(worst <= Duration::from_millis(1), "worst average {worst:?}");
    assert_eq!(stats.request_count(), (WRITERS * PER_WRITER) as u64);
    assert_eq!(stats.average_response_time(), Duration::from_millis(1));
}
