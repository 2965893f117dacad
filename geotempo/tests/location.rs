use chrono::FixedOffset;
use geotempo::common::geography::{GeoPosition, Location};
use geotempo::{Metadata, Record, Value};

mod utils;
use utils::*;

#[test]
fn coordinate_round_trip() {
    let coordinates = [
        (37.7749, -122.4194),
        (0., 0.),
        (-33.8688, 151.2093),
        (51.5072, -0.1276),
        (-89.99, 179.99),
        (89.9999, -179.9999),
    ];

    for (lat, lon) in coordinates {
        let mut metadata = Metadata::from_record(Record::new(), None);
        metadata.set_coordinate(Location::new(lat, lon));

        let decoded = metadata.coordinate().unwrap();
        assert!((decoded.lat.0 - lat).abs() < 1e-7, "lat {lat} -> {}", decoded.lat.0);
        assert!((decoded.lon.0 - lon).abs() < 1e-7, "lon {lon} -> {}", decoded.lon.0);
    }
}

#[test]
fn reference_matches_sign() {
    let mut metadata = Metadata::from_record(Record::new(), None);
    metadata.set_coordinate(Location::new(-33.8688, 151.2093));

    let gps = metadata.subrecord("gps").unwrap();
    assert_eq!(gps.get("LatitudeRef").unwrap(), &Value::from("S"));
    assert_eq!(gps.get("LongitudeRef").unwrap(), &Value::from("E"));
    // Triples hold magnitudes only
    let (deg, _, _) = gps.get("Latitude").unwrap().as_triple().unwrap();
    assert!(deg >= 0.);
}

#[test]
fn zero_coordinate_defaults_to_north_east() {
    let mut metadata = Metadata::from_record(Record::new(), None);
    metadata.set_coordinate(Location::new(0., 0.));

    let gps = metadata.subrecord("gps").unwrap();
    assert_eq!(gps.get("LatitudeRef").unwrap(), &Value::from("N"));
    assert_eq!(gps.get("LongitudeRef").unwrap(), &Value::from("E"));
}

#[test]
fn lowercase_references_are_tolerated() {
    let mut gps = san_francisco_gps();
    gps.insert("LatitudeRef".to_string(), Value::from("n"));
    gps.insert("LongitudeRef".to_string(), Value::from("w"));

    let metadata = Metadata::from_record(root_with(&[("gps", gps)]), None);
    let location = metadata.coordinate().unwrap();
    assert!(location.lat.0 > 0.);
    assert!(location.lon.0 < 0.);
}

#[test]
fn malformed_coordinates_surface_as_absent() {
    // Minute out of range
    let mut gps = san_francisco_gps();
    gps.insert("Latitude".to_string(), Value::triple((37., 75., 0.)));
    let metadata = Metadata::from_record(root_with(&[("gps", gps)]), None);
    assert!(metadata.coordinate().is_none());

    // Wrong value shape
    let mut gps = san_francisco_gps();
    gps.insert("Longitude".to_string(), Value::from("122.42"));
    let metadata = Metadata::from_record(root_with(&[("gps", gps)]), None);
    assert!(metadata.coordinate().is_none());

    // Unknown reference character
    let mut gps = san_francisco_gps();
    gps.insert("LatitudeRef".to_string(), Value::from("Q"));
    let metadata = Metadata::from_record(root_with(&[("gps", gps)]), None);
    assert!(metadata.coordinate().is_none());

    // Missing reference
    let mut gps = san_francisco_gps();
    gps.remove("LongitudeRef");
    let metadata = Metadata::from_record(root_with(&[("gps", gps)]), None);
    assert!(metadata.coordinate().is_none());

    // No GPS sub-record at all
    let metadata = Metadata::from_record(Record::new(), None);
    assert!(metadata.coordinate().is_none());
}

#[test]
fn location_never_decodes_motion_fields() {
    let mut gps = san_francisco_gps();
    gps.insert("Altitude".to_string(), Value::Number(12.));
    gps.insert("Speed".to_string(), Value::Number(36.));
    gps.insert("ImgDirection".to_string(), Value::Number(90.));

    let metadata = Metadata::from_record(root_with(&[("gps", gps)]), None);
    let position = metadata.location().unwrap();
    assert!(position.altitude.is_none());
    assert!(position.speed.is_none());
    assert!(position.bearing.is_none());
}

#[test]
fn set_location_without_assumptions_skips_motion_fields() {
    let position = GeoPosition {
        location: Location::new(37.7749, -122.4194),
        altitude: Some(16.),
        speed: Some(10.),
        bearing: Some(90.),
    };

    let mut metadata = Metadata::from_record(Record::new(), None);
    metadata.set_location(Some(position));

    let gps = metadata.subrecord("gps").unwrap();
    assert!(gps.contains_key("Latitude"));
    assert!(!gps.contains_key("Altitude"));
    assert!(!gps.contains_key("Speed"));
    assert!(!gps.contains_key("ImgDirection"));
}

#[test]
fn set_location_with_assumptions_writes_motion_fields() {
    let position = GeoPosition {
        location: Location::new(37.7749, -122.4194),
        altitude: Some(-16.),
        speed: Some(10.),
        bearing: Some(90.),
    };

    let mut metadata = Metadata::from_record(Record::new(), None);
    metadata.set_location_with_assumptions(Some(position), true);

    let gps = metadata.subrecord("gps").unwrap();
    assert_eq!(gps.get("Altitude").unwrap(), &Value::Number(16.));
    assert_eq!(gps.get("AltitudeRef").unwrap(), &Value::Number(1.));
    assert_eq!(gps.get("Speed").unwrap(), &Value::Number(36.));
    assert_eq!(gps.get("SpeedRef").unwrap(), &Value::from("K"));
    assert_eq!(gps.get("ImgDirection").unwrap(), &Value::Number(90.));
    assert_eq!(gps.get("ImgDirectionRef").unwrap(), &Value::from("M"));
}

#[test]
fn clearing_location_keeps_subrecord_and_dates() {
    let mut gps = san_francisco_gps();
    gps.insert("DateStamp".to_string(), Value::from("2021:06:15"));
    gps.insert("TimeStamp".to_string(), Value::triple((8., 0., 0.)));

    let mut metadata = Metadata::from_record(root_with(&[("gps", gps)]), None);
    metadata.set_location_with_assumptions(
        Some(GeoPosition {
            location: Location::new(1., 2.),
            altitude: Some(3.),
            speed: Some(4.),
            bearing: Some(5.),
        }),
        true,
    );
    metadata.set_location(None);

    assert!(metadata.coordinate().is_none());
    let gps = metadata.subrecord("gps").unwrap();
    assert!(!gps.contains_key("Altitude"));
    assert!(!gps.contains_key("Speed"));
    assert!(!gps.contains_key("ImgDirection"));
    // The GPS date pair is untouched
    assert!(metadata.gps_date().is_some());
}

#[test]
fn coordinate_timezone_needs_resolver_and_coordinate() {
    // No resolver
    let metadata = Metadata::from_record(root_with(&[("gps", san_francisco_gps())]), None);
    assert!(metadata.coordinate_timezone().is_none());

    // Resolver but no coordinate
    let metadata = Metadata::from_record(
        Record::new(),
        Some(Box::new(|_: f64, _: f64| FixedOffset::west_opt(28_800))),
    );
    assert!(metadata.coordinate_timezone().is_none());

    // Both
    let metadata = Metadata::from_record(
        root_with(&[("gps", san_francisco_gps())]),
        Some(Box::new(|_: f64, _: f64| FixedOffset::west_opt(28_800))),
    );
    assert_eq!(
        metadata.coordinate_timezone(),
        FixedOffset::west_opt(28_800)
    );

    // Resolver failure
    let metadata = Metadata::from_record(
        root_with(&[("gps", san_francisco_gps())]),
        Some(Box::new(|_: f64, _: f64| None)),
    );
    assert!(metadata.coordinate_timezone().is_none());
}
