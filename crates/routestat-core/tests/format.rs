//! Human-readable formatting helpers.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use routestat_core::format;

#[test]
fn bytes_use_si_units() {
    assert_eq!(format::bytes(0), "0 B");
    assert_eq!(format::bytes(512), "512 B");
    assert_eq!(format::bytes(1_500), "1.5 kB");
    assert_eq!(format::bytes(82_854_982), "83 MB");
    assert_eq!(format::bytes(8_000_000_000), "8.0 GB");
}

#[test]
fn durations_pick_largest_unit() {
    assert_eq!(format::duration(Duration::from_millis(300)), "now");
    assert_eq!(format::duration(Duration::from_secs(1)), "1 second");
    assert_eq!(format::duration(Duration::from_secs(42)), "42 seconds");
    assert_eq!(format::duration(Duration::from_secs(3 * 60 + 5)), "3 minutes");
    assert_eq!(format::duration(Duration::from_secs(3_600)), "1 hour");
    assert_eq!(format::duration(Duration::from_secs(5 * 86_400)), "5 days");
    assert_eq!(format::duration(Duration::from_secs(21 * 86_400)), "3 weeks");
}

#[test]
fn uptime_keeps_hours_and_minutes() {
    assert_eq!(format::uptime(Duration::from_secs(59)), "0:00");
    assert_eq!(format::uptime(Duration::from_secs(5 * 60)), "0:05");
    assert_eq!(format::uptime(Duration::from_secs(86_400 + 3_600)), "1 day, 1:00");
    assert_eq!(
        format::uptime(Duration::from_secs(3 * 86_400 + 2 * 3_600 + 3 * 60 + 59)),
        "3 days, 2:03"
    );
}
