//! In-memory datasets for tests
//!
//! Built from the same table declarations as the real dataset, so foreign
//! keys and column affinities behave identically.

use crate::{schema, ClimateStore, StorageError};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// (station, name, latitude, longitude, elevation)
pub type StationRow<'a> = (&'a str, &'a str, f64, f64, f64);

/// (station, date, prcp, tobs)
pub type MeasurementRow<'a> = (&'a str, &'a str, Option<f64>, f64);

pub const STATIONS: [StationRow<'static>; 3] = [
    ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
];

/// Latest date 2017-08-23; USC00519281 has the most rows
pub const MEASUREMENTS: [MeasurementRow<'static>; 10] = [
    ("USC00519397", "2016-08-22", Some(0.5), 77.0),
    ("USC00519397", "2016-08-23", Some(0.0), 81.0),
    ("USC00519397", "2017-01-15", None, 66.0),
    ("USC00519397", "2017-08-23", Some(0.0), 81.0),
    ("USC00519281", "2016-08-23", Some(1.79), 77.0),
    ("USC00519281", "2017-01-10", Some(0.02), 62.0),
    ("USC00519281", "2017-01-31", Some(0.0), 68.0),
    ("USC00519281", "2017-08-18", Some(0.06), 79.0),
    ("USC00519281", "2017-08-23", None, 76.0),
    ("USC00513117", "2010-01-01", Some(0.28), 67.0),
];

/// Single-connection in-memory pool holding the schema and [`STATIONS`].
///
/// One connection that never expires keeps the in-memory database alive for
/// the lifetime of the pool.
pub async fn memory_pool() -> Result<SqlitePool, StorageError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    for table in schema::TABLES {
        sqlx::query(table).execute(&pool).await?;
    }
    for (station, name, latitude, longitude, elevation) in STATIONS {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(station)
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .bind(elevation)
        .execute(&pool)
        .await?;
    }

    Ok(pool)
}

/// Insert measurement rows in the given order
pub async fn insert_measurements(
    pool: &SqlitePool,
    rows: &[MeasurementRow<'_>],
) -> Result<(), StorageError> {
    for (station, date, prcp, tobs) in rows {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(pool)
            .await?;
    }
    Ok(())
}

/// Store over [`STATIONS`] and the given measurements
pub async fn seeded_store(rows: &[MeasurementRow<'_>]) -> Result<ClimateStore, StorageError> {
    let pool = memory_pool().await?;
    insert_measurements(&pool, rows).await?;
    Ok(ClimateStore::from_pool(pool))
}
