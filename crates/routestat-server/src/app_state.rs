//! Shared application state for the routestat server.
//!
//! Everything the handlers and the timing middleware need is injected here at
//! construction: the validated config, the route registry (which also carries
//! the start time), and the host metrics probe.

use std::sync::Arc;

use routestat_core::error::Result;
use routestat_core::{AppInfo, StatisticsRegistry};

use crate::config::ServerConfig;
use crate::obs::{HostProbe, SysinfoProbe};
use crate::report::SnapshotBuilder;

/// Registry type used by the server: the embedded app config is `ServerConfig`.
pub type Registry = StatisticsRegistry<ServerConfig>;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    registry: Arc<Registry>,
    probe: Arc<dyn HostProbe>,
}

struct AppStateInner {
    cfg: Arc<ServerConfig>,
    snapshot: SnapshotBuilder,
}

impl AppState {
    /// Build application state with the `sysinfo`-backed probe.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        Self::with_probe(cfg, Arc::new(SysinfoProbe::new()))
    }

    /// Build application state with an explicit metrics probe.
    pub fn with_probe(cfg: ServerConfig, probe: Arc<dyn HostProbe>) -> Result<Self> {
        cfg.validate()?;

        let cfg = Arc::new(cfg);
        let snapshot = SnapshotBuilder::new(cfg.stats.thresholds());
        let registry = Arc::new(StatisticsRegistry::new(AppInfo::new(Arc::clone(&cfg))));

        tracing::debug!(
            slow_ms = cfg.stats.slow_threshold_ms,
            popular = cfg.stats.popular_min_requests,
            "route statistics enabled"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, snapshot }),
            registry,
            probe,
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn snapshot(&self) -> &SnapshotBuilder {
        &self.inner.snapshot
    }

    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    pub fn probe(&self) -> &dyn HostProbe {
        self.probe.as_ref()
    }
}
