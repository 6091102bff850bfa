//! Air Quality API Server
//!
//! REST API server composing the forecast engine, alert evaluator, and
//! bounded in-memory store behind versioned routes.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_governor::GovernorLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod demo;
mod rate_limit;
mod routes;
mod settings;

pub use rate_limit::RateLimitConfig;
pub use settings::Settings;

use alerting::AlertEvaluator;
use forecast_engine::Forecaster;
use storage::Repository;

/// Application state shared across handlers
pub struct AppState {
    /// Sample and alert store
    pub repository: Repository,
    /// Stateless forecaster
    pub forecaster: Forecaster,
    /// Stateless threshold evaluator
    pub evaluator: AlertEvaluator,
    /// Server settings
    pub settings: Settings,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings) -> Self {
        Self {
            repository: Repository::with_retention(
                settings.max_sample_records,
                settings.max_alert_records,
            ),
            forecaster: Forecaster::new(),
            evaluator: AlertEvaluator::new(),
            settings,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Shared handle to application state
pub type SharedState = Arc<RwLock<AppState>>;

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub metrics: StoreMetrics,
}

/// Store metrics
#[derive(Debug, Serialize)]
pub struct StoreMetrics {
    pub sample_count: usize,
    pub alert_count: usize,
}

/// Create the application router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/samples", post(routes::samples::ingest_sample))
        .route("/api/v1/history", get(routes::samples::get_history))
        .route("/api/v1/forecast", get(routes::forecast::get_forecast))
        .route("/api/v1/alerts", get(routes::alerts::get_alerts))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    let state = state.read().await;
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        metrics: StoreMetrics {
            sample_count: state.repository.sample_count(),
            alert_count: state.repository.alert_count(),
        },
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let bind_addr = settings.bind_addr.clone();
    let governor = rate_limit::create_governor_config(&RateLimitConfig::from_settings(&settings));
    let state: SharedState = Arc::new(RwLock::new(AppState::new(settings)));

    let app = create_router(state).layer(GovernorLayer { config: governor });

    info!("Starting API server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
