//! Temperature Statistics Routes

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::require_date;
use crate::{ApiError, AppState};
use climate_storage::TemperatureStats;

/// Aggregates over a date range; null when nothing matched
#[derive(Debug, Serialize)]
pub struct TemperatureStatsResponse {
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

impl TemperatureStatsResponse {
    fn new(start_date: String, end_date: Option<String>, stats: TemperatureStats) -> Self {
        Self {
            start_date,
            end_date,
            tmin: stats.tmin,
            tavg: stats.tavg,
            tmax: stats.tmax,
        }
    }
}

/// Stats for every measurement on or after `start`
pub async fn get_stats_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStatsResponse>, ApiError> {
    require_date("start", &start)?;

    let mut session = state.store.session().await?;
    let stats = session.temperature_stats(&start, None).await?;

    Ok(Json(TemperatureStatsResponse::new(start, None, stats)))
}

/// Stats for measurements between `start` and `end`, both inclusive
pub async fn get_stats_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStatsResponse>, ApiError> {
    require_date("start", &start)?;
    require_date("end", &end)?;

    let mut session = state.store.session().await?;
    let stats = session.temperature_stats(&start, Some(&end)).await?;

    Ok(Json(TemperatureStatsResponse::new(start, Some(end), stats)))
}
