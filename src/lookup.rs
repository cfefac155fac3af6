use crate::distance::great_circle_km;
use crate::error::Result;
use crate::record::GeoRecord;
use crate::tables::country_time_zone;

/// A geo database that can resolve addresses.
///
/// The derived lookups only read the record they are given, so the same
/// record always yields the same answer regardless of earlier lookups.
pub trait GeoLookup: Send + Sync {
    /// Resolves `ip`. Unparsable input and unknown addresses both give
    /// `Ok(None)`.
    fn get_location(&self, ip: &str) -> Result<Option<GeoRecord>>;

    /// Name of the record's region, as the database spells it.
    fn region_name(&self, record: &GeoRecord) -> Option<String> {
        record.region_name.clone()
    }

    /// The record's own zone, or the country's zone when it only has one.
    fn time_zone(&self, record: &GeoRecord) -> Option<String> {
        record.time_zone.clone().or_else(|| {
            country_time_zone(record.country_code.as_deref()?).map(str::to_string)
        })
    }

    /// Kilometers between two records, `None` if either lacks coordinates.
    fn distance_between(&self, a: &GeoRecord, b: &GeoRecord) -> Option<f64> {
        let (lat_a, lon_a) = a.coordinates()?;
        let (lat_b, lon_b) = b.coordinates()?;
        Some(great_circle_km(lat_a, lon_a, lat_b, lon_b))
    }
}
