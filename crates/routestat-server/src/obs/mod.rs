//! Host and process metrics.
//!
//! The report reads these through the `HostProbe` seam so the OS-facing
//! provider can be swapped out (tests use fixed or failing probes).

pub mod alloc;
pub mod host;

pub use alloc::{heap_stats, HeapStats, TrackingAllocator};
pub use host::{HostProbe, HostSample, LoadAverage, ProcessSample, SysinfoProbe};
