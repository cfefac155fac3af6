//! Geo attributes of a single resolved address.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{GeoError, Result};
use crate::lookup::GeoLookup;
use crate::record::GeoRecord;

/// An address resolved to its database record.
///
/// Construction does the lookup, so a `Location` always holds a record.
/// `region` and `timezone` are derived from that record on every call.
#[derive(Clone)]
pub struct Location<'a> {
    ip: String,
    record: GeoRecord,
    lookup: &'a dyn GeoLookup,
}

impl<'a> Location<'a> {
    /// Resolves `ip`, failing with [`GeoError::Resolution`] if the database
    /// has no record for it.
    pub fn new(lookup: &'a dyn GeoLookup, ip: &str) -> Result<Self> {
        let record = lookup
            .get_location(ip)?
            .ok_or_else(|| GeoError::unresolved(ip))?;
        Ok(Self {
            ip: ip.to_string(),
            record,
            lookup,
        })
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn record(&self) -> &GeoRecord {
        &self.record
    }

    pub fn country(&self) -> Option<&str> {
        self.record.country_name.as_deref()
    }

    pub fn country_code(&self) -> Option<&str> {
        self.record.country_code.as_deref()
    }

    pub fn region_code(&self) -> Option<&str> {
        self.record.region_code.as_deref()
    }

    pub fn region(&self) -> Option<String> {
        self.lookup.region_name(&self.record)
    }

    pub fn city(&self) -> Option<&str> {
        self.record.city.as_deref()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.record.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.record.longitude
    }

    /// IANA zone name, e.g. `Europe/Vienna`.
    pub fn timezone(&self) -> Option<String> {
        self.lookup.time_zone(&self.record)
    }

    /// Kilometers to `other`, `None` if either side has no coordinates.
    pub fn distance_to(&self, other: &Location<'_>) -> Option<f64> {
        self.lookup.distance_between(&self.record, &other.record)
    }
}

impl std::fmt::Debug for Location<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Location")
            .field("ip", &self.ip)
            .field("record", &self.record)
            .finish()
    }
}

impl Serialize for Location<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Location", 8)?;
        state.serialize_field("ip", &self.ip)?;
        state.serialize_field("country", &self.country())?;
        state.serialize_field("region", &self.region())?;
        state.serialize_field("city", &self.city())?;
        state.serialize_field("latitude", &self.latitude())?;
        state.serialize_field("longitude", &self.longitude())?;
        state.serialize_field("timezone", &self.timezone())?;
        state.serialize_field("record", &self.record)?;
        state.end()
    }
}
