use std::path::Path;
use std::sync::Arc;

use chrono::DateTime;
use serde_json::json;

use velomap::error::StationDataError;
use velomap::load::{DatasetCache, StationDocument};

#[test]
fn read_snapshot_from_file() {
    let document = StationDocument::read(Path::new("mock/gbfs_stations.json")).unwrap();

    assert_eq!(document.records.len(), 9);
    assert_eq!(
        document.meta.last_updated,
        DateTime::from_timestamp(1713744000, 0)
    );
    assert_eq!(document.meta.ttl, Some(60));
}

#[test]
fn missing_file_is_not_found() {
    let result = StationDocument::read(Path::new("mock/no_such_file.json"));
    assert!(matches!(result, Err(StationDataError::NotFound(_))));
}

#[test]
fn malformed_json_is_a_format_error() {
    let result = StationDocument::read(Path::new("mock/invalid.json"));
    assert!(matches!(result, Err(StationDataError::Format(_))));
}

#[test]
fn all_three_snapshot_shapes_resolve_to_the_same_records() {
    let stations = json!([
        {"name": "A", "latitude": 48.85, "longitude": 2.35, "is_virtual_station": false},
        {"name": "B", "latitude": 48.86, "longitude": 2.36, "is_virtual_station": true}
    ]);

    let bare = StationDocument::from_document(stations.clone());
    let wrapped = StationDocument::from_document(json!({ "data": stations.clone() }));
    let nested = StationDocument::from_document(json!({ "data": { "stations": stations } }));

    assert_eq!(bare.records.len(), 2);
    assert_eq!(bare.records, wrapped.records);
    assert_eq!(bare.records, nested.records);
}

#[test]
fn unsupported_shapes_resolve_to_zero_records() {
    for document in [
        json!(42),
        json!("stations"),
        json!({ "stations": [] }),
        json!({ "data": "not a list" }),
        json!({ "data": { "stations": "not a list" } }),
        json!({ "data": { "other": [] } }),
    ] {
        let resolved = StationDocument::from_document(document);
        assert!(resolved.records.is_empty());
    }
}

#[test]
fn cache_returns_the_same_snapshot_without_rereading() {
    let mut cache = DatasetCache::new();
    let path = Path::new("mock/gbfs_stations.json");

    let first = cache.load(path).unwrap();
    let second = cache.load(path).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    cache.invalidate();
    let third = cache.load(path).unwrap();
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(first.records, third.records);
}

#[test]
fn cache_misses_on_a_different_path() {
    let mut cache = DatasetCache::new();

    let first = cache.load(Path::new("mock/gbfs_stations.json")).unwrap();
    let missing = cache.load(Path::new("mock/no_such_file.json"));
    assert!(missing.is_err());

    // A failed load does not evict the existing entry's snapshot content.
    let again = cache.load(Path::new("mock/gbfs_stations.json")).unwrap();
    assert_eq!(first.records, again.records);
}
