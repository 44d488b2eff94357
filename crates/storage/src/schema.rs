//! Fixed schema of the climate dataset
//!
//! Mirrors the tables of the pre-built `hawaii.sqlite` file. The API never
//! creates these tables itself; the statements exist so fixtures and tooling
//! can build a dataset with the exact same column declarations.

/// Station reference data
pub const CREATE_STATION: &str = "CREATE TABLE station (
    id INTEGER NOT NULL,
    station TEXT UNIQUE,
    name TEXT,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT,
    PRIMARY KEY (id)
)";

/// Daily readings, one row per station and date
pub const CREATE_MEASUREMENT: &str = "CREATE TABLE measurement (
    id INTEGER NOT NULL,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT,
    PRIMARY KEY (id),
    FOREIGN KEY(station) REFERENCES station (station)
)";

/// Both tables in dependency order
pub const TABLES: [&str; 2] = [CREATE_STATION, CREATE_MEASUREMENT];
