use maxminddb::{geoip2, Reader};
use once_cell::sync::OnceCell;
use std::{net::IpAddr, path::Path};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{GeoError, Result};
use crate::lookup::GeoLookup;
use crate::record::GeoRecord;

static GLOBAL: OnceCell<Result<LookupService>> = OnceCell::new();

/// Summary of the opened database file.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseInfo {
    pub database_type: String,
    pub build_epoch: u64,
    pub ip_version: u16,
}

/// Handle to a MaxMind city database.
///
/// The reader holds the whole search tree in memory, so repeated lookups
/// never touch the file again. Lookups only read, so one handle can be
/// shared across threads.
pub struct LookupService {
    reader: Reader<Vec<u8>>,
}

impl LookupService {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = Reader::open_readfile(path).map_err(|e| GeoError::Initialization {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        info!(
            "Opened geo database {:?} ({})",
            path, reader.metadata.database_type
        );
        Ok(Self { reader })
    }

    pub fn from_bytes(buf: Vec<u8>) -> Result<Self> {
        let reader = Reader::from_source(buf).map_err(|e| GeoError::Initialization {
            path: "<memory>".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { reader })
    }

    /// Process-wide handle, opened on first use from [`Config::from_env`].
    ///
    /// The open is attempted once; if it failed, every call returns that
    /// same initialization error.
    pub fn global() -> Result<&'static LookupService> {
        GLOBAL
            .get_or_init(|| LookupService::open(Config::from_env().database_path))
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn metadata(&self) -> DatabaseInfo {
        let metadata = &self.reader.metadata;
        DatabaseInfo {
            database_type: metadata.database_type.clone(),
            build_epoch: metadata.build_epoch,
            ip_version: metadata.ip_version,
        }
    }

    fn lookup_record(&self, ip_str: &str) -> Result<Option<GeoRecord>> {
        let ip: IpAddr = match ip_str.parse() {
            Ok(ip) => ip,
            Err(_) => {
                debug!("Not an IP address: {}", ip_str);
                return Ok(None);
            }
        };

        debug!("Looking up IP: {}", ip);

        let city_record: geoip2::City = match self.reader.lookup(ip) {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("No record for {}", ip);
                return Ok(None);
            }
            Err(e) => {
                warn!("Database lookup failed for {}: {}", ip, e);
                return Err(GeoError::Database {
                    ip: ip_str.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let subdivision = city_record
            .subdivisions
            .as_ref()
            .and_then(|subdivisions| subdivisions.first());

        let record = GeoRecord {
            country_code: city_record
                .country
                .as_ref()
                .and_then(|country| country.iso_code)
                .map(|code| code.to_string()),
            country_name: city_record
                .country
                .as_ref()
                .and_then(|country| country.names.as_ref())
                .and_then(|names| names.get("en"))
                .map(|name| name.to_string()),
            region_code: subdivision
                .and_then(|subdivision| subdivision.iso_code)
                .map(|code| code.to_string()),
            region_name: subdivision
                .and_then(|subdivision| subdivision.names.as_ref())
                .and_then(|names| names.get("en"))
                .map(|name| name.to_string()),
            city: city_record
                .city
                .as_ref()
                .and_then(|city| city.names.as_ref())
                .and_then(|names| names.get("en"))
                .map(|name| name.to_string()),
            latitude: city_record.location.as_ref().and_then(|loc| loc.latitude),
            longitude: city_record.location.as_ref().and_then(|loc| loc.longitude),
            time_zone: city_record
                .location
                .as_ref()
                .and_then(|loc| loc.time_zone)
                .map(|tz| tz.to_string()),
            postal_code: city_record
                .postal
                .as_ref()
                .and_then(|postal| postal.code)
                .map(|code| code.to_string()),
            continent_code: city_record
                .continent
                .as_ref()
                .and_then(|continent| continent.code)
                .map(|code| code.to_string()),
            accuracy_radius: city_record
                .location
                .as_ref()
                .and_then(|loc| loc.accuracy_radius),
        };

        debug!(
            "Lookup result: city={:?}, country={:?}",
            record.city, record.country_name
        );
        Ok(Some(record))
    }
}

impl GeoLookup for LookupService {
    fn get_location(&self, ip: &str) -> Result<Option<GeoRecord>> {
        self.lookup_record(ip)
    }
}

impl std::fmt::Debug for LookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupService")
            .field("database_type", &self.reader.metadata.database_type)
            .finish_non_exhaustive()
    }
}
