//! Temperature Observation Routes

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

use crate::{ApiError, AppState};
use climate_storage::TobsRecord;

/// Last twelve months of temperature observations from the most active station
pub async fn get_tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TobsRecord>>, ApiError> {
    let mut session = state.store.session().await?;
    let Some(window) = session.last_twelve_months().await? else {
        return Ok(Json(Vec::new()));
    };
    let Some(active) = session.most_active_station().await? else {
        return Ok(Json(Vec::new()));
    };

    debug!(
        "Serving tobs for {} ({} observations) since {}",
        active.station, active.observations, window.cutoff
    );

    Ok(Json(
        session
            .tobs_for_station_since(&active.station, &window.cutoff_str())
            .await?,
    ))
}
