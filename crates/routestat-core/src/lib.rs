//! routestat core: per-route request statistics, the route registry, report DTOs,
//! and formatting helpers.
//!
//! This crate carries no HTTP or OS dependencies. The server crate feeds it
//! completed-request timings and reads it back when rendering a snapshot.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every operation on the hot request path is total.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod format;
pub mod stats;
pub mod summary;

/// Shared result type.
pub use error::{Result, StatsError};
pub use stats::{AppInfo, RouteStatistics, StatisticsRegistry};
pub use summary::{Route, RouteSummary, Thresholds};
