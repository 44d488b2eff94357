//! Precipitation Routes

use axum::{extract::State, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{ApiError, AppState};
use climate_storage::StationPrecipitationRecord;

/// Precipitation keyed by date; keys serialize in ascending order
pub type PrecipitationByDate = BTreeMap<String, Option<f64>>;

/// Last twelve months of precipitation as a date → amount mapping.
///
/// When several stations report on the same date the row read last wins.
pub async fn get_precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PrecipitationByDate>, ApiError> {
    let mut session = state.store.session().await?;
    let Some(window) = session.last_twelve_months().await? else {
        return Ok(Json(PrecipitationByDate::new()));
    };

    let rows = session.precipitation_since(&window.cutoff_str()).await?;
    // rows are consumed in store order, so later duplicates overwrite
    let by_date: PrecipitationByDate = rows.into_iter().map(|r| (r.date, r.prcp)).collect();

    Ok(Json(by_date))
}

/// Last twelve months of precipitation, one entry per station and date
pub async fn get_precipitation_by_station(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StationPrecipitationRecord>>, ApiError> {
    let mut session = state.store.session().await?;
    let Some(window) = session.last_twelve_months().await? else {
        return Ok(Json(Vec::new()));
    };

    Ok(Json(
        session
            .precipitation_by_station_since(&window.cutoff_str())
            .await?,
    ))
}
