//! Per-route timing middleware.
//!
//! Requests without a `MatchedPath` (fallbacks, 404s) pass through untimed.
//! The matched pattern (e.g. `/users/:id`) is the statistics key, not the raw URI.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

pub async fn track_route(
    State(state): State<AppState>,
    matched: Option<MatchedPath>,
    req: Request,
    next: Next,
) -> Response {
    let Some(matched) = matched else {
        return next.run(req).await;
    };

    // Resolve the entry before running the handler so the first request to a
    // route is visible in reports while it is still in flight.
    let stats = state.registry().get_or_create(matched.as_str());

    let started = Instant::now();
    let response = next.run(req).await;
    stats.record_request(started.elapsed());

    response
}
