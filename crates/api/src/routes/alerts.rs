//! Alert Routes

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::SharedState;
use storage::AlertRecord;

/// Query parameters for the alerts endpoint
#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    /// Filter by city
    pub city: Option<String>,
    /// Filter by severity tag
    pub severity: Option<String>,
    /// Maximum number of records
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

/// Response for the alerts endpoint
#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub data: Vec<AlertRecord>,
    pub count: usize,
}

/// Get stored alerts, newest first
pub async fn get_alerts(
    State(state): State<SharedState>,
    Query(params): Query<AlertQuery>,
) -> Json<AlertResponse> {
    let state = state.read().await;
    let limit = params.limit.min(500);

    let data = state
        .repository
        .get_alerts(params.city.as_deref(), params.severity.as_deref(), limit)
        .unwrap_or_default();

    Json(AlertResponse {
        count: data.len(),
        data,
    })
}
