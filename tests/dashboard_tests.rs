use std::path::Path;

use serde_json::json;

use velomap::dashboard::{self, DashboardFrame};
use velomap::encode::Category;
use velomap::filter::{CategoryFilter, FilterRange, FilterSettings};
use velomap::layer::{DOCKED_LAYER_ID, DOCKLESS_LAYER_ID};
use velomap::load::DatasetCache;

fn default_frame() -> DashboardFrame {
    let mut cache = DatasetCache::new();
    dashboard::refresh_with_defaults(&mut cache, Path::new("mock/gbfs_stations.json")).unwrap()
}

#[test]
fn default_refresh_renders_both_layers() {
    let frame = default_frame();

    // Default ranges hide the stations with no observable metric.
    assert_eq!(frame.summary.docked, 2);
    assert_eq!(frame.summary.dockless, 2);
    assert_eq!(frame.summary.total, 4);

    let scene = frame.scene.expect("scene should be present");
    assert_eq!(scene.layers.len(), 2);
    assert_eq!(scene.layers[0].id, DOCKED_LAYER_ID);
    assert_eq!(scene.layers[0].category, Category::Docked);
    assert_eq!(scene.layers[1].id, DOCKLESS_LAYER_ID);
    assert_eq!(scene.layers[1].category, Category::Dockless);

    assert_eq!(scene.view.zoom, 11.0);
    assert_eq!(scene.view.pitch, 0.0);
    // Centered within the snapshot's bounding box.
    assert!(scene.view.latitude > 48.8 && scene.view.latitude < 48.9);
    assert!(scene.view.longitude > 2.3 && scene.view.longitude < 2.4);
}

#[test]
fn layer_features_carry_display_properties() {
    let frame = default_frame();
    let scene = frame.scene.unwrap();

    let docked = &scene.layers[0].features.features;
    assert_eq!(docked.len(), 2);

    let opera = docked[0].properties.as_ref().unwrap();
    assert_eq!(opera["name"], json!("Opéra"));
    assert_eq!(opera["stationType"], json!("Docked"));
    assert_eq!(opera["tooltip"], json!("Available Ratio: 40%"));
    assert_eq!(opera["fillColor"], json!([153, 102, 0, 255]));
    assert_eq!(opera["radius"], json!(25.0));

    let dockless = &scene.layers[1].features.features;
    assert_eq!(dockless.len(), 2);

    let zone_sud = dockless[0].properties.as_ref().unwrap();
    assert_eq!(zone_sud["stationType"], json!("Dockless"));
    assert_eq!(zone_sud["tooltip"], json!("Available bikes: 3"));
    assert_eq!(zone_sud["fillColor"], json!([0, 120, 255, 180]));
    assert_eq!(zone_sud["radius"], json!(11.0));
}

#[test]
fn narrowing_a_range_drops_stations() {
    let mut cache = DatasetCache::new();
    let path = Path::new("mock/gbfs_stations.json");

    let settings = FilterSettings {
        docked: CategoryFilter::enabled_with(Some(FilterRange::new(80.0, 100.0))),
        dockless: CategoryFilter::enabled_with(Some(FilterRange::new(0.0, 20.0))),
    };

    let frame = dashboard::refresh(&mut cache, path, &settings).unwrap();
    assert_eq!(frame.summary.docked, 1);
    assert_eq!(frame.summary.dockless, 2);
    assert_eq!(frame.summary.total, 3);
}

#[test]
fn disabling_both_categories_leaves_nothing_to_display() {
    let mut cache = DatasetCache::new();
    let path = Path::new("mock/gbfs_stations.json");

    let settings = FilterSettings {
        docked: CategoryFilter::disabled(),
        dockless: CategoryFilter::disabled(),
    };

    let frame = dashboard::refresh(&mut cache, path, &settings).unwrap();
    assert!(frame.scene.is_none());
    assert_eq!(frame.summary.docked, 0);
    assert_eq!(frame.summary.dockless, 0);
    assert_eq!(frame.summary.total, 0);
}

#[test]
fn one_disabled_category_still_renders_the_other() {
    let mut cache = DatasetCache::new();
    let path = Path::new("mock/gbfs_stations.json");

    let settings = FilterSettings {
        docked: CategoryFilter::disabled(),
        dockless: CategoryFilter::enabled_with(None),
    };

    let frame = dashboard::refresh(&mut cache, path, &settings).unwrap();
    assert_eq!(frame.summary.docked, 0);
    assert_eq!(frame.summary.dockless, 3);

    let scene = frame.scene.unwrap();
    assert_eq!(scene.layers.len(), 1);
    assert_eq!(scene.layers[0].id, DOCKLESS_LAYER_ID);
}

#[test]
fn frame_carries_snapshot_metadata() {
    let frame = default_frame();
    assert_eq!(
        frame.meta.last_updated,
        chrono::DateTime::from_timestamp(1713744000, 0)
    );
    assert_eq!(frame.meta.ttl, Some(60));
}

#[test]
fn frame_serializes_for_the_display_side() {
    let frame = default_frame();
    let value = serde_json::to_value(&frame).unwrap();

    assert_eq!(value["summary"]["total"], json!(4));
    assert_eq!(value["scene"]["layers"][0]["id"], json!("docked_stations"));
    assert_eq!(
        value["scene"]["tooltip_template"],
        json!("<b>{name}</b><br/>Type: {stationType} Station<br/>{tooltip}")
    );
}
