//! Sample Ingest and History Routes

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::{demo, SharedState};
use alerting::{dispatch_all, Alert, AqiLevel, LogSink};
use sample_window::Measurement;
use storage::{AlertRecord, SampleRecord};

/// Body for the sample ingest endpoint
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    /// City the observation belongs to
    pub city: String,
    /// Observation time (unix millis); defaults to now
    #[serde(default)]
    pub timestamp_ms: Option<i64>,
    /// PM2.5 concentration (µg/m³)
    #[serde(default)]
    pub pm25: f64,
    /// NO2 concentration (µg/m³)
    #[serde(default)]
    pub no2: f64,
    /// O3 concentration (µg/m³)
    #[serde(default)]
    pub o3: f64,
}

/// Response for the sample ingest endpoint
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub success: bool,
    pub triggered: bool,
    pub alerts: Vec<Alert>,
    pub sample_count: usize,
}

/// Ingest one observation: store it, evaluate instantaneous thresholds,
/// and fan any fired alerts out to the store and the log sink.
pub async fn ingest_sample(
    State(state): State<SharedState>,
    Json(request): Json<IngestRequest>,
) -> Json<IngestResponse> {
    let state = state.read().await;
    let timestamp_ms = request
        .timestamp_ms
        .unwrap_or_else(|| Utc::now().timestamp_millis());

    if let Err(e) = state.repository.insert_sample(SampleRecord {
        city: request.city.clone(),
        timestamp_ms,
        pm25: request.pm25,
        no2: request.no2,
        o3: request.o3,
    }) {
        warn!(city = %request.city, error = %e, "failed to store sample");
    }

    let measurements = [
        Measurement::new("pm25", request.pm25),
        Measurement::new("no2", request.no2),
        Measurement::new("o3", request.o3),
    ];
    let report = state.evaluator.evaluate(&measurements);

    // Best-effort fan-out: a failed store or delivery never blocks the rest
    for alert in &report.alerts {
        if let Err(e) = state.repository.insert_alert(AlertRecord {
            id: 0,
            city: request.city.clone(),
            timestamp_ms,
            parameter: alert.pollutant.as_str().to_string(),
            value: alert.value,
            threshold: alert.threshold,
            message: alert.message.clone(),
            severity: alert.severity.as_str().to_string(),
        }) {
            warn!(city = %request.city, error = %e, "failed to store alert");
        }
    }
    dispatch_all(&LogSink, &report.alerts);

    Json(IngestResponse {
        success: true,
        triggered: report.triggered,
        alerts: report.alerts,
        sample_count: state.repository.sample_count(),
    })
}

/// Query parameters for the history endpoint
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// City to fetch history for
    pub city: String,
    /// Window span in hours
    #[serde(default = "default_history_hours")]
    pub hours: usize,
}

fn default_history_hours() -> usize {
    168
}

/// Get stored history for a city, falling back to synthetic samples when
/// the store has none (prototype behavior, flagged by `note`).
pub async fn get_history(
    State(state): State<SharedState>,
    Query(params): Query<HistoryQuery>,
) -> Json<serde_json::Value> {
    let state = state.read().await;
    let hours = params.hours.min(state.settings.history_hours);

    let mut data = state
        .repository
        .get_samples(&params.city, hours)
        .unwrap_or_default();

    let mut note = None;
    if data.is_empty() {
        data = demo::synthetic_history(&params.city, hours, Utc::now());
        note = Some("Sample data - no stored history available");
    }

    let mean_pm25 = data.iter().map(|r| r.pm25).sum::<f64>() / data.len().max(1) as f64;
    let aqi = AqiLevel::from_pm25(mean_pm25);

    Json(json!({
        "success": true,
        "city": params.city,
        "data": data,
        "aqi": {
            "level": aqi,
            "label": aqi.label(),
            "description": aqi.description(),
            "mean_pm25": mean_pm25,
        },
        "note": note,
    }))
}
