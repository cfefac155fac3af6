use tracing::debug;

use crate::error::{GeoError, Result};
use crate::lookup::GeoLookup;

/// Earth radius used by the GeoIP distance tables, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6378.2;

/// Great-circle distance using the haversine formula.
/// Input lat/lon in degrees. Output in kilometers.
pub fn great_circle_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Distance in kilometers between the locations of two addresses.
///
/// Both addresses are resolved independently. If either has no record, or
/// a record without coordinates, the error names every address that failed.
pub fn distance(lookup: &dyn GeoLookup, ipa: &str, ipb: &str) -> Result<f64> {
    let a = lookup
        .get_location(ipa)?
        .filter(|record| record.coordinates().is_some());
    let b = lookup
        .get_location(ipb)?
        .filter(|record| record.coordinates().is_some());

    match (a, b) {
        (Some(a), Some(b)) => {
            let km = lookup
                .distance_between(&a, &b)
                .ok_or_else(|| GeoError::Resolution {
                    ips: vec![ipa.to_string(), ipb.to_string()],
                })?;
            debug!("Distance {} -> {}: {:.3} km", ipa, ipb, km);
            Ok(km)
        }
        (a, b) => {
            let ips = [(ipa, a.is_none()), (ipb, b.is_none())]
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(ip, _)| ip.to_string())
                .collect();
            Err(GeoError::Resolution { ips })
        }
    }
}
