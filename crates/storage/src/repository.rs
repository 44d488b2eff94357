//! Repository Implementation

use crate::dates::{parse_date, ObservationWindow};
use crate::records::{
    ActiveStation, PrecipitationRecord, StationDetail, StationPrecipitationRecord, StationRecord,
    TemperatureStats, TobsRecord,
};
use crate::StorageError;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use std::path::PathBuf;
use tracing::{debug, info};

/// How to open the dataset
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Path to the SQLite file
    pub path: PathBuf,
    /// Upper bound on pooled read connections
    pub max_connections: u32,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("Resources/hawaii.sqlite"),
            max_connections: 5,
        }
    }
}

/// Read-only handle on the climate dataset
#[derive(Debug, Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Open an existing dataset file read-only.
    ///
    /// Fails if the file does not exist; it is never created.
    pub async fn open(options: &StoreOptions) -> Result<Self, StorageError> {
        info!(
            "Opening climate dataset {} (max {} connections)",
            options.path.display(),
            options.max_connections
        );

        let connect = SqliteConnectOptions::new()
            .filename(&options.path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections)
            .connect_with(connect)
            .await?;

        Ok(Self::from_pool(pool))
    }

    /// Wrap an already configured pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Acquire a connection for the lifetime of one request.
    ///
    /// The connection goes back to the pool when the session is dropped.
    pub async fn session(&self) -> Result<Session, StorageError> {
        let conn = self.pool.acquire().await?;
        Ok(Session { conn })
    }

    /// Whether a connection can be acquired and a trivial query runs
    pub async fn ping(&self) -> bool {
        let Ok(mut session) = self.session().await else {
            return false;
        };
        sqlx::query("SELECT 1")
            .execute(&mut *session.conn)
            .await
            .is_ok()
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// One borrowed connection and the queries the API issues over it
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    /// Latest measurement date, if any measurement exists
    pub async fn most_recent_date(&mut self) -> Result<Option<String>, StorageError> {
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&mut *self.conn)
            .await?;
        debug!("Most recent measurement date: {:?}", latest);
        Ok(latest)
    }

    /// Twelve months ending at the latest measurement
    pub async fn last_twelve_months(&mut self) -> Result<Option<ObservationWindow>, StorageError> {
        match self.most_recent_date().await? {
            Some(latest) => Ok(Some(ObservationWindow::ending_at(parse_date(&latest)?))),
            None => Ok(None),
        }
    }

    /// Precipitation readings on or after `cutoff`, in store order
    pub async fn precipitation_since(
        &mut self,
        cutoff: &str,
    ) -> Result<Vec<PrecipitationRecord>, StorageError> {
        let rows = sqlx::query_as::<_, PrecipitationRecord>(
            "SELECT date, prcp FROM measurement WHERE date >= ?",
        )
        .bind(cutoff)
        .fetch_all(&mut *self.conn)
        .await?;
        debug!("{} precipitation rows since {}", rows.len(), cutoff);
        Ok(rows)
    }

    /// Precipitation readings on or after `cutoff` with their station,
    /// ordered by date then station
    pub async fn precipitation_by_station_since(
        &mut self,
        cutoff: &str,
    ) -> Result<Vec<StationPrecipitationRecord>, StorageError> {
        let rows = sqlx::query_as::<_, StationPrecipitationRecord>(
            "SELECT date, station, prcp FROM measurement \
             WHERE date >= ? ORDER BY date ASC, station ASC",
        )
        .bind(cutoff)
        .fetch_all(&mut *self.conn)
        .await?;
        debug!("{} per-station precipitation rows since {}", rows.len(), cutoff);
        Ok(rows)
    }

    /// Every station code and name, in store order
    pub async fn stations(&mut self) -> Result<Vec<StationRecord>, StorageError> {
        let rows = sqlx::query_as::<_, StationRecord>("SELECT station, name FROM station")
            .fetch_all(&mut *self.conn)
            .await?;
        debug!("{} stations", rows.len());
        Ok(rows)
    }

    /// Every station with its coordinates, in store order
    pub async fn station_details(&mut self) -> Result<Vec<StationDetail>, StorageError> {
        let rows = sqlx::query_as::<_, StationDetail>(
            "SELECT station, name, latitude, longitude, elevation FROM station",
        )
        .fetch_all(&mut *self.conn)
        .await?;
        debug!("{} station details", rows.len());
        Ok(rows)
    }

    /// Station with the most measurement rows.
    ///
    /// Equal counts resolve to the lowest station code.
    pub async fn most_active_station(&mut self) -> Result<Option<ActiveStation>, StorageError> {
        let station = sqlx::query_as::<_, ActiveStation>(
            "SELECT station, COUNT(*) AS observations FROM measurement \
             GROUP BY station ORDER BY observations DESC, station ASC LIMIT 1",
        )
        .fetch_optional(&mut *self.conn)
        .await?;
        debug!("Most active station: {:?}", station);
        Ok(station)
    }

    /// Temperature observations of one station on or after `cutoff`
    pub async fn tobs_for_station_since(
        &mut self,
        station: &str,
        cutoff: &str,
    ) -> Result<Vec<TobsRecord>, StorageError> {
        let rows = sqlx::query_as::<_, TobsRecord>(
            "SELECT date, tobs FROM measurement WHERE station = ? AND date >= ?",
        )
        .bind(station)
        .bind(cutoff)
        .fetch_all(&mut *self.conn)
        .await?;
        debug!("{} tobs rows for {} since {}", rows.len(), station, cutoff);
        Ok(rows)
    }

    /// MIN / AVG / MAX of `tobs` for `start <= date` and, when given,
    /// `date <= end`
    pub async fn temperature_stats(
        &mut self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureStats, StorageError> {
        const FROM_START: &str = "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax \
             FROM measurement WHERE date >= ?";
        const IN_RANGE: &str = "SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax \
             FROM measurement WHERE date >= ? AND date <= ?";

        let stats = match end {
            Some(end) => {
                sqlx::query_as::<_, TemperatureStats>(IN_RANGE)
                    .bind(start)
                    .bind(end)
                    .fetch_one(&mut *self.conn)
                    .await?
            }
            None => {
                sqlx::query_as::<_, TemperatureStats>(FROM_START)
                    .bind(start)
                    .fetch_one(&mut *self.conn)
                    .await?
            }
        };
        debug!("Temperature stats {}..{:?}: {:?}", start, end, stats);
        Ok(stats)
    }
}
