//! Forecast Routes

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::{demo, SharedState};
use forecast_engine::{ForecastError, DEFAULT_HORIZON};
use sample_window::{Sample, SampleWindow};

/// Longest horizon the API will compute
const MAX_HORIZON: usize = 72;

/// Query parameters for the forecast endpoint
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    /// City to forecast for
    pub city: String,
    /// Forecast horizon in hours
    #[serde(default = "default_horizon")]
    pub hours: usize,
}

fn default_horizon() -> usize {
    DEFAULT_HORIZON
}

/// Generate a forecast from the city's stored history
pub async fn get_forecast(
    State(state): State<SharedState>,
    Query(params): Query<ForecastQuery>,
) -> Response {
    let state = state.read().await;
    let hours = params.hours.clamp(1, MAX_HORIZON);

    let mut records = state
        .repository
        .get_samples(&params.city, state.settings.history_hours)
        .unwrap_or_default();

    let mut note = None;
    if records.is_empty() {
        records = demo::synthetic_history(&params.city, state.settings.history_hours, Utc::now());
        note = Some("Sample data - no stored history available");
    }

    // Bound the fitting window to the configured span, newest samples kept
    let mut window = SampleWindow::new(state.settings.history_hours);
    for record in &records {
        window.push(Sample::new(record.pm25, record.no2, record.o3));
    }
    let samples = window.to_vec();

    debug!(city = %params.city, samples = samples.len(), hours, "generating forecast");

    match state.forecaster.forecast(&samples, hours) {
        Ok(result) => Json(json!({
            "success": true,
            "city": params.city,
            "forecast": result.predictions,
            "models": result.models,
            "accuracy": result.accuracy,
            "algorithm": "linear_regression",
            "note": note,
        }))
        .into_response(),
        Err(e @ ForecastError::InsufficientData { .. }) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}
