//! Report DTOs: per-route rows and the slow/popular summary.
//!
//! Rows are point-in-time copies; nothing here touches the live counters after
//! construction.

use serde::{Deserialize, Serialize};

use crate::stats::RouteStatistics;

/// Default slow-route threshold, in milliseconds.
pub const DEFAULT_SLOW_THRESHOLD_MS: u64 = 10;
/// Default minimum request count for a route to be listed as popular.
pub const DEFAULT_POPULAR_MIN_REQUESTS: u64 = 1;

/// One route as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    pub route: String,
    pub requests: u64,
    /// Average response time in whole milliseconds (truncated).
    pub response_time: u64,
}

impl Route {
    /// Snapshot a live entry. Each field is read independently.
    pub fn from_stats(path: impl Into<String>, stats: &RouteStatistics) -> Self {
        let avg = stats.average_response_time().as_millis();
        Self {
            route: path.into(),
            requests: stats.request_count(),
            response_time: u64::try_from(avg).unwrap_or(u64::MAX),
        }
    }
}

/// Classification limits (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub slow_ms: u64,
    pub popular_requests: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            slow_ms: DEFAULT_SLOW_THRESHOLD_MS,
            popular_requests: DEFAULT_POPULAR_MIN_REQUESTS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteSummary {
    /// `response_time >= slow_ms`, slowest first.
    pub slow: Vec<Route>,
    /// `requests >= popular_requests`, busiest first.
    pub popular: Vec<Route>,
}

impl RouteSummary {
    /// Split rows into slow/popular lists. A row may land in both or neither.
    /// Order among equal keys is unspecified.
    pub fn classify<I>(routes: I, thresholds: Thresholds) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        let mut summary = RouteSummary::default();

        for route in routes {
            let slow = route.response_time >= thresholds.slow_ms;
            let popular = route.requests >= thresholds.popular_requests;
            match (slow, popular) {
                (true, true) => {
                    summary.slow.push(route.clone());
                    summary.popular.push(route);
                }
                (true, false) => summary.slow.push(route),
                (false, true) => summary.popular.push(route),
                (false, false) => {}
            }
        }

        summary.slow.sort_unstable_by(|a, b| b.response_time.cmp(&a.response_time));
        summary.popular.sort_unstable_by(|a, b| b.requests.cmp(&a.requests));
        summary
    }
}
