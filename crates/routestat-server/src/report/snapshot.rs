//! SnapshotBuilder: one fully-materialized report per stats request.
//!
//! Host/process sampling runs first and is all-or-nothing; route rows are read
//! field by field from live counters, so the report is best-effort rather than
//! a single-instant snapshot.

use serde::Serialize;

use routestat_core::error::Result;
use routestat_core::{format, Route, RouteSummary, StatisticsRegistry, Thresholds};

use crate::obs::{HostProbe, HostSample, LoadAverage, ProcessSample};

/// Compiler version reported as `App.Go`, the report's runtime-version key.
pub const RUNTIME_VERSION: &str = env!("ROUTESTAT_RUSTC_VERSION");
/// Package version reported as `App.Version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemMemory {
    pub total: String,
    pub free: String,
    pub cache: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemStats {
    pub uptime: String,
    #[serde(rename = "CPUs")]
    pub cpus: usize,
    pub load_average: LoadAverage,
    pub memory: SystemMemory,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppMemory {
    /// Live heap bytes; resident set size when the heap is not tracked.
    pub allocated: String,
    /// Heap high-water mark; resident set size when the heap is not tracked.
    #[serde(rename = "GCThreshold")]
    pub gc_threshold: String,
    /// Live heap allocations; zero when the heap is not tracked.
    pub objects: u64,
    pub resident: String,
    #[serde(rename = "Virtual")]
    pub virtual_mem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppStats<'a, C> {
    #[serde(rename = "Go")]
    pub runtime: &'static str,
    pub version: &'static str,
    pub uptime: String,
    pub requests: u64,
    pub memory: AppMemory,
    pub config: &'a C,
}

/// Composite report rendered by the stats endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report<'a, C> {
    pub system: SystemStats,
    pub app: AppStats<'a, C>,
    pub routes: RouteSummary,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotBuilder {
    thresholds: Thresholds,
}

impl SnapshotBuilder {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Gather host, process, and route data into a report.
    ///
    /// Any probe failure aborts the build; no partially zeroed report is returned.
    pub fn build<'a, C>(
        &self,
        registry: &'a StatisticsRegistry<C>,
        probe: &dyn HostProbe,
    ) -> Result<Report<'a, C>> {
        let host = probe.host().map_err(|e| {
            tracing::warn!(error = %e, "host metrics unavailable");
            e
        })?;
        let process = probe.process().map_err(|e| {
            tracing::warn!(error = %e, "process metrics unavailable");
            e
        })?;

        let app = registry.app();
        Ok(Report {
            system: system_stats(&host),
            app: AppStats {
                runtime: RUNTIME_VERSION,
                version: VERSION,
                uptime: format::duration(app.uptime()),
                requests: registry.total_request_count(),
                memory: app_memory(&process),
                config: app.config(),
            },
            routes: self.route_summary(registry),
        })
    }

    /// Snapshot every registered route and classify it.
    pub fn route_summary<C>(&self, registry: &StatisticsRegistry<C>) -> RouteSummary {
        let rows = registry
            .routes()
            .into_iter()
            .map(|(path, stats)| Route::from_stats(path, &stats));
        RouteSummary::classify(rows, self.thresholds)
    }
}

fn system_stats(host: &HostSample) -> SystemStats {
    SystemStats {
        uptime: format::uptime(std::time::Duration::from_secs(host.uptime_secs)),
        cpus: host.cpus,
        load_average: host.load,
        memory: SystemMemory {
            total: format::bytes(host.mem_total),
            free: format::bytes(host.mem_free),
            cache: format::bytes(host.mem_cache),
        },
    }
}

fn app_memory(process: &ProcessSample) -> AppMemory {
    let (allocated, peak, objects) = match process.heap {
        Some(heap) => (heap.live_bytes, heap.peak_bytes, heap.live_objects),
        None => (process.resident, process.resident, 0),
    };
    AppMemory {
        allocated: format::bytes(allocated),
        gc_threshold: format::bytes(peak),
        objects,
        resident: format::bytes(process.resident),
        virtual_mem: format::bytes(process.virtual_mem),
    }
}
