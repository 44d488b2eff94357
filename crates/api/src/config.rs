//! Settings
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! settings file, then `CLIMATE__*` environment variables.

use climate_storage::StoreOptions;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

/// Settings file used when `CLIMATE_CONFIG` is not set
pub const DEFAULT_CONFIG_FILE: &str = "config/climate";

/// Top-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub log: LogSettings,
}

/// Listener address
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// `host:port` for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dataset location
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: PathBuf,
    pub max_connections: u32,
}

impl DatabaseSettings {
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            path: self.path.clone(),
            max_connections: self.max_connections,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub level: String,
}

impl LogSettings {
    /// Parsed level, falling back to INFO for unknown names
    pub fn level(&self) -> Level {
        Level::from_str(&self.level).unwrap_or(Level::INFO)
    }
}

impl Settings {
    /// Load settings from `CLIMATE_CONFIG` (must exist) or the default
    /// file (may be absent)
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var("CLIMATE_CONFIG") {
            Ok(path) => Self::load_from(&path, true),
            Err(_) => Self::load_from(DEFAULT_CONFIG_FILE, false),
        }
    }

    /// Load settings from the given file path, with or without extension
    pub fn load_from(path: &str, required: bool) -> Result<Self, ConfigError> {
        let defaults = StoreOptions::default();

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("database.path", defaults.path.to_string_lossy().into_owned())?
            .set_default("database.max_connections", i64::from(defaults.max_connections))?
            .set_default("log.level", "info")?
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix("CLIMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::load_from("does/not/exist/climate", false).unwrap();
        assert_eq!(settings.server.addr(), "0.0.0.0:8080");
        assert_eq!(settings.database.path, PathBuf::from("Resources/hawaii.sqlite"));
        assert_eq!(settings.database.max_connections, 5);
        assert_eq!(settings.log.level(), Level::INFO);
    }

    #[test]
    fn test_missing_required_file_fails() {
        assert!(Settings::load_from("does/not/exist/climate", true).is_err());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("climate.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 5000\n\n[database]\npath = \"/data/hawaii.sqlite\"\n\n[log]\nlevel = \"debug\""
        )
        .unwrap();

        let settings = Settings::load_from(path.to_str().unwrap(), true).unwrap();
        assert_eq!(settings.server.addr(), "0.0.0.0:5000");
        assert_eq!(settings.database.path, PathBuf::from("/data/hawaii.sqlite"));
        assert_eq!(settings.database.max_connections, 5);
        assert_eq!(settings.log.level(), Level::DEBUG);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let log = LogSettings { level: "chatty".into() };
        assert_eq!(log.level(), Level::INFO);
    }

    #[test]
    fn test_store_options_from_settings() {
        let db = DatabaseSettings {
            path: PathBuf::from("climate.sqlite"),
            max_connections: 2,
        };
        let options = db.store_options();
        assert_eq!(options.path, PathBuf::from("climate.sqlite"));
        assert_eq!(options.max_connections, 2);
    }
}
