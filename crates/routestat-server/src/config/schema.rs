use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use routestat_core::error::{Result, StatsError};
use routestat_core::summary::{DEFAULT_POPULAR_MIN_REQUESTS, DEFAULT_SLOW_THRESHOLD_MS};
use routestat_core::Thresholds;

/// Liveness route; always registered, so no other route may claim it.
pub const HEALTHZ_PATH: &str = "/healthz";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub stats: StatsSection,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StatsError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.stats.validate()?;

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            stats: StatsSection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            StatsError::BadRequest(format!("server.listen must be a socket address: {e}"))
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StatsSection {
    /// Path the JSON report is served on.
    #[serde(default = "default_stats_path")]
    pub path: String,

    #[serde(default = "default_slow_threshold_ms")]
    pub slow_threshold_ms: u64,

    #[serde(default = "default_popular_min_requests")]
    pub popular_min_requests: u64,

    /// Leave the report route out of its own statistics.
    #[serde(default = "default_exclude_self")]
    pub exclude_self: bool,
}

impl Default for StatsSection {
    fn default() -> Self {
        Self {
            path: default_stats_path(),
            slow_threshold_ms: default_slow_threshold_ms(),
            popular_min_requests: default_popular_min_requests(),
            exclude_self: default_exclude_self(),
        }
    }
}

impl StatsSection {
    pub fn validate(&self) -> Result<()> {
        if !self.path.starts_with('/') {
            return Err(StatsError::BadRequest("stats.path must start with '/'".into()));
        }
        if self.path.contains(':') || self.path.contains('*') {
            return Err(StatsError::BadRequest(
                "stats.path must be a static path (no ':' or '*' segments)".into(),
            ));
        }
        if self.path == HEALTHZ_PATH {
            return Err(StatsError::BadRequest(format!(
                "stats.path must not be {HEALTHZ_PATH}"
            )));
        }
        if self.popular_min_requests == 0 {
            return Err(StatsError::BadRequest(
                "stats.popular_min_requests must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            slow_ms: self.slow_threshold_ms,
            popular_requests: self.popular_min_requests,
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_stats_path() -> String {
    "/stats".into()
}
fn default_slow_threshold_ms() -> u64 {
    DEFAULT_SLOW_THRESHOLD_MS
}
fn default_popular_min_requests() -> u64 {
    DEFAULT_POPULAR_MIN_REQUESTS
}
fn default_exclude_self() -> bool {
    true
}
