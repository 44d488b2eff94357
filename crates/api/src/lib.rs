//! Climate API Server
//!
//! Read-only REST API over station precipitation and temperature
//! observations. Every handler borrows one pooled connection for the length
//! of the request and returns it when the response is built.

use axum::{extract::State, http::Method, routing::get, Json, Router};
use climate_storage::ClimateStore;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
mod error;
pub mod routes;

pub use config::Settings;
pub use error::ApiError;

/// Application state shared across handlers
pub struct AppState {
    /// Read-only dataset
    pub store: ClimateStore,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(store: ClimateStore) -> Self {
        Self {
            store,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub database: String,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    Router::new()
        .route("/", get(routes::welcome::welcome))
        .route("/health", get(health_handler))
        .route("/api/v1.0/precipitation", get(routes::precipitation::get_precipitation))
        .route(
            "/api/v1.0/precipitation/by-station",
            get(routes::precipitation::get_precipitation_by_station),
        )
        .route("/api/v1.0/stations", get(routes::stations::get_stations))
        .route("/api/v1.0/stations/details", get(routes::stations::get_station_details))
        .route("/api/v1.0/tobs", get(routes::tobs::get_tobs))
        .route("/api/v1.0/:start", get(routes::temperature::get_stats_from))
        .route("/api/v1.0/:start/:end", get(routes::temperature::get_stats_between))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let database = if state.store.ping().await {
        "ok"
    } else {
        "unavailable"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        database: database.to_string(),
    })
}

/// Initialize logging
pub fn init_logging(level: Level) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}

/// Open the dataset and serve until interrupted
pub async fn run_server(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let store = ClimateStore::open(&settings.database.store_options()).await?;
    let state = Arc::new(AppState::new(store.clone()));
    let app = create_router(state);

    let addr = settings.server.addr();
    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Server stopped");

    Ok(())
}
