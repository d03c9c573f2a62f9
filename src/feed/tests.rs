//! Tests for the feed schema model

use super::*;
use crate::error::{Error, ErrorKind};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn sample_feature() -> Value {
    json!({
        "type": "Feature",
        "id": "us7000abcd",
        "properties": {
            "title": "M 6.5 - 42km SSE of Somewhere",
            "mag": 6.5,
            "place": "42km SSE of Somewhere",
            "time": 1_497_529_392_000_i64,
            "updated": 1_497_531_000_000_i64,
            "magType": "mww",
            "tsunami": 1,
            "detail": "https://earthquake.usgs.gov/earthquakes/feed/v1.0/detail/us7000abcd.geojson",
            "alert": "green",
            "status": "reviewed"
        },
        "geometry": {
            "type": "Point",
            "coordinates": [-122.4, 37.8, 10.5]
        }
    })
}

fn sample_feed() -> Value {
    json!({
        "type": "FeatureCollection",
        "metadata": {
            "generated": 1_497_540_000_000_i64,
            "title": "USGS Significant Earthquakes, Past Month",
            "count": 1
        },
        "features": [sample_feature()],
        "bbox": [-180.0, -90.0, -10.0, 180.0, 90.0, 700.0]
    })
}

fn decode_value(doc: &Value) -> crate::error::Result<EarthquakeFeed> {
    decode_feed(doc.to_string().as_bytes())
}

// ============================================================================
// Valid document
// ============================================================================

#[test]
fn test_decode_valid_document() {
    let feed = decode_value(&sample_feed()).unwrap();

    assert_eq!(feed.features.len(), 1);
    let feature = &feed.features[0];
    assert_eq!(feature.id, "us7000abcd");

    let props = &feature.properties;
    assert_eq!(props.title, "M 6.5 - 42km SSE of Somewhere");
    assert_eq!(props.mag, 6.5);
    assert_eq!(props.place, "42km SSE of Somewhere");
    assert_eq!(props.time, 1_497_529_392_000);
    assert_eq!(props.updated, 1_497_531_000_000);
    assert_eq!(props.mag_type, "mww");
    assert_eq!(props.tsunami, Tsunami::Possible);
    assert_eq!(
        props.detail,
        "https://earthquake.usgs.gov/earthquakes/feed/v1.0/detail/us7000abcd.geojson"
    );
    assert_eq!(props.alert, Some(Alert::Green));
    assert_eq!(props.status, Status::Reviewed);
}

#[test]
fn test_unknown_keys_are_ignored() {
    // `type`, `metadata` and per-feature extras are not part of the model
    let mut doc = sample_feed();
    doc["features"][0]["properties"]["sig"] = json!(712);

    assert!(decode_value(&doc).is_ok());
}

// ============================================================================
// Required fields
// ============================================================================

#[test_case("mag")]
#[test_case("title")]
#[test_case("time")]
#[test_case("status")]
#[test_case("tsunami")]
fn test_missing_required_property_fails(field: &str) {
    let mut doc = sample_feed();
    doc["features"][0]["properties"]
        .as_object_mut()
        .unwrap()
        .remove(field);

    let err = decode_value(&doc).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_missing_bbox_fails() {
    let mut doc = sample_feed();
    doc.as_object_mut().unwrap().remove("bbox");

    assert!(decode_value(&doc).is_err());
}

#[test]
fn test_wrong_type_for_required_field_fails() {
    let mut doc = sample_feed();
    doc["features"][0]["properties"]["mag"] = json!("6.5");

    let err = decode_value(&doc).unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn test_non_integer_time_fails() {
    let mut doc = sample_feed();
    doc["features"][0]["properties"]["time"] = json!(1.5);

    assert!(decode_value(&doc).is_err());
}

// ============================================================================
// Enumerated fields
// ============================================================================

#[test_case(0, Tsunami::None)]
#[test_case(1, Tsunami::Possible)]
fn test_tsunami_valid_raw_values(raw: i64, expected: Tsunami) {
    let mut doc = sample_feed();
    doc["features"][0]["properties"]["tsunami"] = json!(raw);

    let feed = decode_value(&doc).unwrap();
    assert_eq!(feed.features[0].properties.tsunami, expected);
}

#[test_case(2)]
#[test_case(-1)]
#[test_case(255)]
fn test_tsunami_out_of_range_fails(raw: i64) {
    let mut doc = sample_feed();
    doc["features"][0]["properties"]["tsunami"] = json!(raw);

    let err = decode_value(&doc).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_tsunami_rejects_string_encoding() {
    let mut doc = sample_feed();
    doc["features"][0]["properties"]["tsunami"] = json!("1");

    assert!(decode_value(&doc).is_err());
}

#[test_case("green", Alert::Green)]
#[test_case("yellow", Alert::Yellow)]
#[test_case("orange", Alert::Orange)]
#[test_case("red", Alert::Red)]
fn test_alert_valid_tokens(token: &str, expected: Alert) {
    let mut doc = sample_feed();
    doc["features"][0]["properties"]["alert"] = json!(token);

    let feed = decode_value(&doc).unwrap();
    assert_eq!(feed.features[0].properties.alert, Some(expected));
}

#[test_case("chartreuse")]
#[test_case("Green"; "mixed case green")]
#[test_case("GREEN"; "upper case green")]
#[test_case(""; "empty string")]
fn test_alert_invalid_token_fails(token: &str) {
    let mut doc = sample_feed();
    doc["features"][0]["properties"]["alert"] = json!(token);

    let err = decode_value(&doc).unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn test_absent_alert_decodes_to_none() {
    let mut doc = sample_feed();
    doc["features"][0]["properties"]
        .as_object_mut()
        .unwrap()
        .remove("alert");

    let feed = decode_value(&doc).unwrap();
    assert_eq!(feed.features[0].properties.alert, None);
    // Absent is a distinct state, not an alias for any real level
    assert_ne!(feed.features[0].properties.alert, Some(Alert::Green));
}

#[test_case("automatic", Status::Automatic)]
#[test_case("reviewed", Status::Reviewed)]
#[test_case("deleted", Status::Deleted)]
fn test_status_valid_tokens(token: &str, expected: Status) {
    let mut doc = sample_feed();
    doc["features"][0]["properties"]["status"] = json!(token);

    let feed = decode_value(&doc).unwrap();
    assert_eq!(feed.features[0].properties.status, expected);
}

#[test_case("verified")]
#[test_case("Reviewed")]
fn test_status_invalid_token_fails(token: &str) {
    let mut doc = sample_feed();
    doc["features"][0]["properties"]["status"] = json!(token);

    assert!(decode_value(&doc).is_err());
}

#[test]
fn test_enum_tokens_round_trip() {
    assert_eq!(Alert::Orange.as_str(), "orange");
    assert_eq!(Status::Automatic.as_str(), "automatic");
    assert_eq!(serde_json::to_value(Alert::Red).unwrap(), json!("red"));
    assert_eq!(serde_json::to_value(Tsunami::None).unwrap(), json!(0));
}

// ============================================================================
// Positional arrays
// ============================================================================

#[test]
fn test_coordinate_accessors() {
    let feed = decode_value(&sample_feed()).unwrap();
    let geometry = &feed.features[0].geometry;

    assert_eq!(geometry.longitude(), -122.4);
    assert_eq!(geometry.latitude(), 37.8);
    assert_eq!(geometry.depth(), 10.5);
    assert_eq!(geometry.coordinates, Coordinates::new(-122.4, 37.8, 10.5));
}

#[test_case(json!([-122.4, 37.8]))]
#[test_case(json!([-122.4, 37.8, 10.5, 0.0]))]
#[test_case(json!([]))]
fn test_wrong_coordinate_count_fails(coordinates: Value) {
    let mut doc = sample_feed();
    doc["features"][0]["geometry"]["coordinates"] = coordinates;

    let err = decode_value(&doc).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_bounding_box_accessors() {
    let feed = decode_value(&sample_feed()).unwrap();
    let bbox = &feed.bbox;

    assert_eq!(bbox.minimum_longitude(), -180.0);
    assert_eq!(bbox.minimum_latitude(), -90.0);
    assert_eq!(bbox.minimum_depth(), -10.0);
    assert_eq!(bbox.maximum_longitude(), 180.0);
    assert_eq!(bbox.maximum_latitude(), 90.0);
    assert_eq!(bbox.maximum_depth(), 700.0);
    assert_eq!(bbox.as_array(), &[-180.0, -90.0, -10.0, 180.0, 90.0, 700.0]);
}

#[test_case(json!([-180.0, -90.0, -10.0, 180.0, 90.0]))]
#[test_case(json!([-180.0, -90.0, -10.0, 180.0, 90.0, 700.0, 0.0]))]
fn test_wrong_bbox_count_fails(bbox: Value) {
    let mut doc = sample_feed();
    doc["bbox"] = bbox;

    assert!(decode_value(&doc).is_err());
}

// ============================================================================
// Totality and atomicity
// ============================================================================

#[test]
fn test_invalid_json_fails() {
    let err = decode_feed(b"{not json").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_one_bad_feature_fails_the_whole_document() {
    let mut broken = sample_feature();
    broken["properties"]["tsunami"] = json!(7);

    let mut doc = sample_feed();
    doc["features"] = json!([sample_feature(), broken]);

    // No partial result: the valid first feature does not survive
    assert!(decode_value(&doc).is_err());
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn test_semantic_round_trip() {
    let feed = decode_value(&sample_feed()).unwrap();

    let encoded = serde_json::to_vec(&feed).unwrap();
    let again = decode_feed(&encoded).unwrap();

    assert_eq!(feed, again);
}

#[test]
fn test_absent_alert_stays_absent_on_encode() {
    let mut doc = sample_feed();
    doc["features"][0]["properties"]
        .as_object_mut()
        .unwrap()
        .remove("alert");

    let feed = decode_value(&doc).unwrap();
    let encoded = serde_json::to_value(&feed).unwrap();

    assert!(encoded["features"][0]["properties"]
        .as_object()
        .unwrap()
        .get("alert")
        .is_none());
}
