//! Per-route counters and the registry that owns them.

pub mod registry;
pub mod route;

pub use registry::{normalize_path, AppInfo, StatisticsRegistry};
pub use route::RouteStatistics;
