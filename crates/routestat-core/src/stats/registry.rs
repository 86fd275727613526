use std::borrow::Cow;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use super::route::RouteStatistics;

/// Read-only view of the hosting application: when it started and how it is
/// configured. The config is carried opaquely and only ever read.
#[derive(Debug)]
pub struct AppInfo<C> {
    started_at: Instant,
    config: Arc<C>,
}

impl<C> AppInfo<C> {
    /// Capture "now" as the application start time.
    pub fn new(config: Arc<C>) -> Self {
        Self::started_at(Instant::now(), config)
    }

    pub fn started_at(started_at: Instant, config: Arc<C>) -> Self {
        Self { started_at, config }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<C> Clone for AppInfo<C> {
    fn clone(&self) -> Self {
        Self {
            started_at: self.started_at,
            config: Arc::clone(&self.config),
        }
    }
}

/// Route registry:
/// - `route path -> RouteStatistics` (entries are never removed or replaced)
/// - the application handle used for uptime/config in reports
#[derive(Debug)]
pub struct StatisticsRegistry<C> {
    routes: DashMap<String, Arc<RouteStatistics>>,
    app: AppInfo<C>,
}

impl<C> StatisticsRegistry<C> {
    pub fn new(app: AppInfo<C>) -> Self {
        Self {
            routes: DashMap::new(),
            app,
        }
    }

    pub fn app(&self) -> &AppInfo<C> {
        &self.app
    }

    /// Return the entry for `path`, inserting a zeroed one on first sight.
    ///
    /// Concurrent first access to the same path yields one shared entry.
    pub fn get_or_create(&self, path: &str) -> Arc<RouteStatistics> {
        let key = normalize_path(path);

        // Fast path: shared shard lock only.
        if let Some(existing) = self.routes.get(&*key) {
            return Arc::clone(existing.value());
        }

        let entry = self
            .routes
            .entry(key.into_owned())
            .or_insert_with(|| Arc::new(RouteStatistics::new()));
        Arc::clone(entry.value())
    }

    pub fn get(&self, path: &str) -> Option<Arc<RouteStatistics>> {
        let key = normalize_path(path);
        self.routes.get(&*key).map(|r| Arc::clone(r.value()))
    }

    /// Sum of request counts over every registered route.
    ///
    /// Weakly consistent: counters keep moving while the shards are walked, so
    /// the total need not match any single instant.
    pub fn total_request_count(&self) -> u64 {
        self.routes
            .iter()
            .map(|r| r.value().request_count())
            .fold(0u64, u64::saturating_add)
    }

    /// Copy out `(path, stats)` pairs so callers never hold shard locks while
    /// reading counters.
    pub fn routes(&self) -> Vec<(String, Arc<RouteStatistics>)> {
        self.routes
            .iter()
            .map(|r| (r.key().clone(), Arc::clone(r.value())))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Normalize a route path: ensure a leading `/` and drop trailing slashes
/// (the root path stays `/`).
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return Cow::Borrowed("/");
    }
    if trimmed.starts_with('/') {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("/{trimmed}"))
    }
}
