//! Shared test doubles for server integration tests.

#![allow(dead_code)]

use routestat_core::error::{Result, StatsError};
use routestat_server::obs::{HeapStats, HostProbe, HostSample, LoadAverage, ProcessSample};

/// Probe returning fixed values.
pub struct FixedProbe;

impl HostProbe for FixedProbe {
    fn host(&self) -> Result<HostSample> {
        Ok(HostSample {
            cpus: 4,
            load: LoadAverage {
                one: 0.5,
                five: 0.25,
                fifteen: 0.125,
            },
            uptime_secs: 2 * 86_400,
            mem_total: 8_000_000_000,
            mem_free: 2_000_000_000,
            mem_cache: 1_500_000,
        })
    }

    fn process(&self) -> Result<ProcessSample> {
        Ok(ProcessSample {
            resident: 42_000_000,
            virtual_mem: 1_200_000_000,
            heap: Some(HeapStats {
                live_bytes: 3_000_000,
                peak_bytes: 9_000_000,
                live_objects: 1_234,
            }),
        })
    }
}

/// Probe whose host query always fails.
pub struct FailingProbe;

impl HostProbe for FailingProbe {
    fn host(&self) -> Result<HostSample> {
        Err(StatsError::MetricsUnavailable("probe offline".into()))
    }

    fn process(&self) -> Result<ProcessSample> {
        FixedProbe.process()
    }
}
