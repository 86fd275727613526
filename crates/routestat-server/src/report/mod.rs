//! Stats report assembly.

pub mod snapshot;

pub use snapshot::{AppMemory, AppStats, Report, SnapshotBuilder, SystemMemory, SystemStats};
