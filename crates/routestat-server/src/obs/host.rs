use std::sync::Mutex;

use serde::Serialize;
use sysinfo::System;

use routestat_core::error::{Result, StatsError};

use super::alloc::{heap_stats, HeapStats};

/// 1/5/15 minute load averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// Host-wide values. Memory is in bytes, uptime in seconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostSample {
    pub cpus: usize,
    pub load: LoadAverage,
    pub uptime_secs: u64,
    pub mem_total: u64,
    pub mem_free: u64,
    /// Reclaimable page cache and buffers.
    pub mem_cache: u64,
}

/// Current process memory, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSample {
    pub resident: u64,
    pub virtual_mem: u64,
    /// Present only when `TrackingAllocator` is the global allocator.
    pub heap: Option<HeapStats>,
}

/// Synchronous provider of host/process metrics. Calls are expected to be fast.
pub trait HostProbe: Send + Sync {
    fn host(&self) -> Result<HostSample>;
    fn process(&self) -> Result<ProcessSample>;
}

/// `HostProbe` backed by the `sysinfo` crate.
pub struct SysinfoProbe {
    sys: Mutex<System>,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        Self {
            sys: Mutex::new(System::new()),
        }
    }

    fn with_system<T>(&self, f: impl FnOnce(&mut System) -> Result<T>) -> Result<T> {
        let mut sys = self
            .sys
            .lock()
            .map_err(|_| StatsError::MetricsUnavailable("sysinfo state poisoned".into()))?;
        f(&mut sys)
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HostProbe for SysinfoProbe {
    fn host(&self) -> Result<HostSample> {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .map_err(|e| StatsError::MetricsUnavailable(format!("cpu count: {e}")))?;

        let (mem_total, mem_free, mem_available) = self.with_system(|sys| {
            sys.refresh_memory();
            Ok((sys.total_memory(), sys.free_memory(), sys.available_memory()))
        })?;
        if mem_total == 0 {
            return Err(StatsError::MetricsUnavailable(
                "host reported zero total memory".into(),
            ));
        }

        let load = System::load_average();

        Ok(HostSample {
            cpus,
            load: LoadAverage {
                one: load.one,
                five: load.five,
                fifteen: load.fifteen,
            },
            uptime_secs: System::uptime(),
            mem_total,
            mem_free,
            mem_cache: mem_available.saturating_sub(mem_free),
        })
    }

    fn process(&self) -> Result<ProcessSample> {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| StatsError::MetricsUnavailable(format!("current pid: {e}")))?;

        self.with_system(|sys| {
            if !sys.refresh_process(pid) {
                return Err(StatsError::MetricsUnavailable(format!(
                    "process {pid} not found"
                )));
            }
            let process = sys.process(pid).ok_or_else(|| {
                StatsError::MetricsUnavailable(format!("process {pid} not found"))
            })?;
            Ok(ProcessSample {
                resident: process.memory(),
                virtual_mem: process.virtual_memory(),
                heap: heap_stats(),
            })
        })
    }
}
