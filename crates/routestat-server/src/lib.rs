//! routestat server library entry.
//!
//! Wires configuration, the route registry, the host metrics probe, the
//! per-route timing middleware, and the stats endpoint into an axum router.
//! Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod report;
pub mod router;
pub mod track;
