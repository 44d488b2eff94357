//! Storage Layer
//!
//! Read-only SQLite access to the climate dataset. The dataset is produced
//! elsewhere; this crate only declares its fixed schema and queries it.

mod dates;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
mod records;
mod repository;
pub mod schema;

pub use dates::{parse_date, ObservationWindow};
pub use records::{
    ActiveStation, PrecipitationRecord, StationDetail, StationPrecipitationRecord, StationRecord,
    TemperatureStats, TobsRecord,
};
pub use repository::{ClimateStore, Session, StoreOptions};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
