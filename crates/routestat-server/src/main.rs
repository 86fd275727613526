//! routestat server binary.
//!
//! Serves a couple of sample routes behind the timing middleware plus the JSON
//! stats endpoint. Config path comes from `ROUTESTAT_CONFIG` (default
//! `routestat.yaml`).

use axum::{extract::Path, routing::get};
use tracing_subscriber::{fmt, EnvFilter};

use routestat_server::app_state::AppState;
use routestat_server::router::{self, AppRoutes};
use routestat_server::config;
use routestat_server::obs::TrackingAllocator;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

const DEFAULT_CONFIG_PATH: &str = "routestat.yaml";

async fn index() -> &'static str {
    "routestat"
}

async fn hello(Path(name): Path<String>) -> String {
    format!("hello, {name}")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("ROUTESTAT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg)?;
    let app_routes = AppRoutes::new()
        .route("/", get(index))
        .route("/hello/:name", get(hello));
    let app = router::build_router(state, app_routes)?;

    tracing::info!(%listen, config = %path, "routestat-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
