//! Operational HTTP endpoints.
//!
//! - `/healthz`     : liveness
//! - `<stats.path>` : JSON stats report (system, app, routes)

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use routestat_core::StatsError;

use crate::app_state::AppState;

/// Body written when the report cannot be encoded.
pub const SERIALIZATION_FALLBACK: &str = "Error serializing to JSON";

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn stats(State(state): State<AppState>) -> Response {
    let registry = state.registry();
    match state.snapshot().build(&*registry, state.probe()) {
        Ok(report) => render_json(&report),
        Err(e) => error_response(&e),
    }
}

/// Encode `value` as an `application/json` 200 response.
///
/// The content type is fixed before encoding; if encoding fails the body is
/// replaced by `SERIALIZATION_FALLBACK` and the status stays 200.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Response {
    let headers = [(header::CONTENT_TYPE, "application/json")];
    match serde_json::to_vec(value) {
        Ok(body) => (StatusCode::OK, headers, body).into_response(),
        Err(e) => {
            let err = StatsError::Serialization(e.to_string());
            tracing::error!(
                error = %err,
                code = err.client_code().as_str(),
                "stats report serialization failed"
            );
            (StatusCode::OK, headers, SERIALIZATION_FALLBACK).into_response()
        }
    }
}

/// Plain-text error response; the report is never partially rendered.
pub fn error_response(err: &StatsError) -> Response {
    let status = match err {
        StatsError::BadRequest(_) | StatsError::UnsupportedVersion => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = format!("{}: {err}", err.client_code().as_str());
    (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}
