//! Station Routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{ApiError, AppState};
use climate_storage::{StationDetail, StationRecord};

/// List every station code and name
pub async fn get_stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StationRecord>>, ApiError> {
    let mut session = state.store.session().await?;
    Ok(Json(session.stations().await?))
}

/// List every station with latitude, longitude and elevation
pub async fn get_station_details(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StationDetail>>, ApiError> {
    let mut session = state.store.session().await?;
    Ok(Json(session.station_details().await?))
}
