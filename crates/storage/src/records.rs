//! Row Types

use serde::Serialize;
use sqlx::FromRow;

/// Station listing entry
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct StationRecord {
    pub station: String,
    pub name: Option<String>,
}

/// Full station row, coordinates included
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct StationDetail {
    pub station: String,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// Precipitation reading keyed by date only
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PrecipitationRecord {
    pub date: String,
    pub prcp: Option<f64>,
}

/// Precipitation reading with its reporting station
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct StationPrecipitationRecord {
    pub date: String,
    pub station: String,
    pub prcp: Option<f64>,
}

/// Temperature observation
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TobsRecord {
    pub date: String,
    pub tobs: f64,
}

/// MIN / AVG / MAX of `tobs` over a date range.
///
/// All fields are `None` when no measurement falls in the range.
#[derive(Debug, Clone, Copy, PartialEq, Default, FromRow, Serialize)]
pub struct TemperatureStats {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}

impl TemperatureStats {
    /// True when the range matched no rows
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.tmin.is_none() && self.tavg.is_none() && self.tmax.is_none()
    }
}

/// Station with the most measurement rows
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ActiveStation {
    pub station: String,
    pub observations: i64,
}
