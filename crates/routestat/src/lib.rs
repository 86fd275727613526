//! Top-level facade crate for routestat.
//!
//! Re-exports the core statistics types and the server library so users can depend on a single crate.

pub mod core {
    pub use routestat_core::*;
}

pub mod server {
    pub use routestat_server::*;
}
