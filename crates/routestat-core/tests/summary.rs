//! Slow/popular classification and report row serialization.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use routestat_core::{Route, RouteStatistics, RouteSummary, Thresholds};

fn row(route: &str, requests: u64, response_time: u64) -> Route {
    Route {
        route: route.to_string(),
        requests,
        response_time,
    }
}

#[test]
fn classify_splits_and_sorts() {
    let routes = vec![row("A", 5, 5), row("B", 0, 15), row("C", 2, 12)];
    let summary = RouteSummary::classify(routes, Thresholds::default());

    let slow: Vec<&str> = summary.slow.iter().map(|r| r.route.as_str()).collect();
    let popular: Vec<&str> = summary.popular.iter().map(|r| r.route.as_str()).collect();
    assert_eq!(slow, ["B", "C"]);
    assert_eq!(popular, ["A", "C"]);
}

#[test]
fn thresholds_are_inclusive() {
    let routes = vec![row("edge", 1, 10), row("under", 0, 9)];
    let summary = RouteSummary::classify(routes, Thresholds::default());
    assert_eq!(summary.slow, vec![row("edge", 1, 10)]);
    assert_eq!(summary.popular, vec![row("edge", 1, 10)]);
}

#[test]
fn custom_thresholds_apply() {
    let thresholds = Thresholds {
        slow_ms: 100,
        popular_requests: 3,
    };
    let routes = vec![row("a", 3, 150), row("b", 2, 99), row("c", 10, 200)];
    let summary = RouteSummary::classify(routes, thresholds);

    let slow: Vec<u64> = summary.slow.iter().map(|r| r.response_time).collect();
    let popular: Vec<u64> = summary.popular.iter().map(|r| r.requests).collect();
    assert_eq!(slow, [200, 150]);
    assert_eq!(popular, [10, 3]);
}

#[test]
fn empty_summary_serializes_as_empty_lists() {
    let summary = RouteSummary::classify(Vec::new(), Thresholds::default());
    let v = serde_json::to_value(&summary).unwrap();
    assert_eq!(v, serde_json::json!({"Slow": [], "Popular": []}));
}

#[test]
fn route_from_stats_truncates_to_millis() {
    let stats = RouteStatistics::new();
    stats.record_request(Duration::from_micros(12_900));
    stats.record_request(Duration::from_micros(12_900));

    let r = Route::from_stats("/slow", &stats);
    assert_eq!(r, row("/slow", 2, 12));

    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(
        v,
        serde_json::json!({"Route": "/slow", "Requests": 2, "ResponseTime": 12})
    );
}
