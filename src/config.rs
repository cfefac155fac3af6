use std::{env, path::PathBuf};

pub const DATABASE_ENV: &str = "GEOIP_DATABASE";

/// City database shipped next to the crate.
pub const DEFAULT_DATABASE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/db/GeoLite2-City.mmdb");

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE),
        }
    }
}

impl Config {
    /// Default config, with the database path taken from `GEOIP_DATABASE`
    /// when it is set and non-empty.
    pub fn from_env() -> Self {
        match env::var(DATABASE_ENV) {
            Ok(path) if !path.trim().is_empty() => Self {
                database_path: PathBuf::from(path.trim()),
            },
            _ => Self::default(),
        }
    }
}
