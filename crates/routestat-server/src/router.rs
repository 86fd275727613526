//! Axum router wiring.
//!
//! Application routes are wrapped in the timing middleware; the stats route
//! and `/healthz` are added afterwards so they are not timed unless
//! `stats.exclude_self` is turned off.

use axum::{middleware, routing::get, routing::MethodRouter, Router};

use routestat_core::error::{Result, StatsError};

use crate::config::HEALTHZ_PATH;
use crate::{app_state::AppState, ops, track};

/// Application routes plus the paths they were registered under.
///
/// axum panics on overlapping routes, so the paths are kept to check them
/// against the stats and health routes before merging.
#[derive(Default)]
pub struct AppRoutes {
    router: Router<AppState>,
    paths: Vec<String>,
}

impl AppRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: &str, method_router: MethodRouter<AppState>) -> Self {
        self.router = self.router.route(path, method_router);
        self.paths.push(path.to_string());
        self
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

/// Build the full router: the caller's routes plus the stats endpoint.
///
/// Fails if an application route claims the stats path or `/healthz`.
pub fn build_router(state: AppState, app_routes: AppRoutes) -> Result<Router> {
    let stats_path = state.cfg().stats.path.clone();
    let exclude_self = state.cfg().stats.exclude_self;

    if let Some(clash) = app_routes
        .paths
        .iter()
        .find(|p| **p == stats_path || p.as_str() == HEALTHZ_PATH)
    {
        return Err(StatsError::BadRequest(format!(
            "application route {clash} overlaps a built-in route"
        )));
    }

    let timing = middleware::from_fn_with_state(state.clone(), track::track_route);
    let app_router = app_routes.router;

    let router = if exclude_self {
        app_router
            .layer(timing)
            .route(&stats_path, get(ops::stats))
    } else {
        app_router
            .route(&stats_path, get(ops::stats))
            .layer(timing)
    };

    tracing::info!(path = %stats_path, "stats endpoint registered");

    Ok(router
        .route(HEALTHZ_PATH, get(ops::healthz))
        .with_state(state))
}
