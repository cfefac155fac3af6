use std::collections::HashMap;

use geoip_location::{GeoLookup, GeoRecord, Result};

/// In-memory database holding the records of the GeoLite City snapshot the
/// examples were taken from.
pub struct SnapshotLookup {
    records: HashMap<String, GeoRecord>,
}

impl SnapshotLookup {
    pub fn new() -> Self {
        let mut records = HashMap::new();
        records.insert(
            "194.232.104.21".to_string(),
            GeoRecord {
                country_code: Some("AT".to_string()),
                country_name: Some("Austria".to_string()),
                region_code: Some("09".to_string()),
                region_name: Some("Wien".to_string()),
                city: Some("Vienna".to_string()),
                latitude: Some(48.19999694824219),
                longitude: Some(16.36669921875),
                time_zone: Some("Europe/Vienna".to_string()),
                continent_code: Some("EU".to_string()),
                ..Default::default()
            },
        );
        records.insert(
            "91.197.28.69".to_string(),
            GeoRecord {
                country_code: Some("DE".to_string()),
                country_name: Some("Germany".to_string()),
                region_code: Some("08".to_string()),
                region_name: Some("Rheinland-Pfalz".to_string()),
                city: Some("Mainz".to_string()),
                latitude: Some(50.0),
                longitude: Some(8.271099090576172),
                time_zone: Some("Europe/Berlin".to_string()),
                postal_code: Some("55116".to_string()),
                continent_code: Some("EU".to_string()),
                ..Default::default()
            },
        );
        records.insert(
            "192.0.2.7".to_string(),
            GeoRecord {
                country_code: Some("DE".to_string()),
                country_name: Some("Germany".to_string()),
                ..Default::default()
            },
        );

        for (ip, city, zone) in [
            ("1.1.1.1", "Miami", "America/New_York"),
            ("2.2.2.2", "Pensacola", "America/Chicago"),
        ] {
            records.insert(
                ip.to_string(),
                GeoRecord {
                    country_code: Some("US".to_string()),
                    country_name: Some("United States".to_string()),
                    region_code: Some("FL".to_string()),
                    region_name: Some("Florida".to_string()),
                    city: Some(city.to_string()),
                    time_zone: Some(zone.to_string()),
                    ..Default::default()
                },
            );
        }

        Self { records }
    }
}

impl GeoLookup for SnapshotLookup {
    fn get_location(&self, ip: &str) -> Result<Option<GeoRecord>> {
        Ok(self.records.get(ip).cloned())
    }
}
