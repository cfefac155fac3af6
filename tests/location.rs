mod common;

use approx::assert_abs_diff_eq;
use common::SnapshotLookup;
use geoip_location::{distance, GeoError, Location};

#[test]
fn vienna_resolves_every_field() {
    let db = SnapshotLookup::new();
    let loc = Location::new(&db, "194.232.104.21").unwrap();

    assert_eq!(loc.country(), Some("Austria"));
    assert_eq!(loc.region().as_deref(), Some("Wien"));
    assert_eq!(loc.city(), Some("Vienna"));
    assert_eq!(loc.timezone().as_deref(), Some("Europe/Vienna"));
    assert_abs_diff_eq!(loc.latitude().unwrap(), 48.2, epsilon = 0.01);
    assert_abs_diff_eq!(loc.longitude().unwrap(), 16.37, epsilon = 0.01);
}

#[test]
fn sparse_record_passes_missing_fields_through() {
    let db = SnapshotLookup::new();
    let loc = Location::new(&db, "192.0.2.7").unwrap();

    assert_eq!(loc.country(), Some("Germany"));
    assert_eq!(loc.city(), None);
    assert_eq!(loc.latitude(), None);
    assert_eq!(loc.region(), None);
    assert_eq!(loc.timezone(), None);
}

#[test]
fn timezone_does_not_depend_on_earlier_lookups() {
    let fresh = SnapshotLookup::new();
    let alone = Location::new(&fresh, "2.2.2.2").unwrap().timezone();

    let db = SnapshotLookup::new();
    let miami = Location::new(&db, "1.1.1.1").unwrap();
    let pensacola = Location::new(&db, "2.2.2.2").unwrap();

    assert_eq!(alone.as_deref(), Some("America/Chicago"));
    assert_eq!(pensacola.timezone(), alone);
    assert_eq!(miami.timezone().as_deref(), Some("America/New_York"));
    assert_eq!(miami.region(), pensacola.region());
}

#[test]
fn invalid_ip_fails_with_the_input() {
    let db = SnapshotLookup::new();
    for ip in ["invalid.ip", "10.1.2.3", "", "999.1.1.1"] {
        let err = Location::new(&db, ip).unwrap_err();
        assert!(err.is_resolution());
        assert_eq!(err.failed_ips(), [ip.to_string()]);
        assert!(err.to_string().contains(ip));
    }
}

#[test]
fn distance_vienna_to_mainz() {
    let db = SnapshotLookup::new();
    let km = distance(&db, "194.232.104.21", "91.197.28.69").unwrap();
    assert_abs_diff_eq!(km, 622.77, epsilon = 1.0);
}

#[test]
fn distance_is_symmetric_and_zero_on_itself() {
    let db = SnapshotLookup::new();
    let there = distance(&db, "194.232.104.21", "91.197.28.69").unwrap();
    let back = distance(&db, "91.197.28.69", "194.232.104.21").unwrap();
    assert_abs_diff_eq!(there, back, epsilon = 1e-9);

    let same = distance(&db, "194.232.104.21", "194.232.104.21").unwrap();
    assert_abs_diff_eq!(same, 0.0, epsilon = 1e-9);
}

#[test]
fn distance_with_unresolvable_ip_is_an_error() {
    let db = SnapshotLookup::new();
    let err = distance(&db, "invalid.ip", "194.232.104.21").unwrap_err();
    assert_eq!(
        err,
        GeoError::Resolution {
            ips: vec!["invalid.ip".to_string()]
        }
    );
}

#[test]
fn distance_names_both_ips_when_both_fail() {
    let db = SnapshotLookup::new();
    let err = distance(&db, "invalid.ip", "also.invalid").unwrap_err();
    assert_eq!(err.to_string(), "could not lookup ip invalid.ip, also.invalid");
}

#[test]
fn distance_needs_coordinates() {
    let db = SnapshotLookup::new();
    let err = distance(&db, "194.232.104.21", "192.0.2.7").unwrap_err();
    assert_eq!(err.failed_ips(), ["192.0.2.7".to_string()]);
}

#[test]
fn location_distance_matches_free_function() {
    let db = SnapshotLookup::new();
    let vienna = Location::new(&db, "194.232.104.21").unwrap();
    let mainz = Location::new(&db, "91.197.28.69").unwrap();

    let km = distance(&db, "194.232.104.21", "91.197.28.69").unwrap();
    assert_abs_diff_eq!(vienna.distance_to(&mainz).unwrap(), km, epsilon = 1e-9);
}
