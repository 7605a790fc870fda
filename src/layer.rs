use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use serde::Serialize;

use crate::encode::{
    Category, CategoryEncoding, EncodedStation, DOCKED_RADIUS, DOCKLESS_FILL,
};
use crate::filter::VisibleDataset;

/// Stable layer ids the display collaborator keys hover state on.
pub const DOCKED_LAYER_ID: &str = "docked_stations";
pub const DOCKLESS_LAYER_ID: &str = "dockless_stations";

/// Hover markup over the per-feature properties.
pub const TOOLTIP_TEMPLATE: &str =
    "<b>{name}</b><br/>Type: {stationType} Station<br/>{tooltip}";

/// One renderable scatter layer: every feature carries its position, fill
/// color, radius, and tooltip line.
#[derive(Debug, Clone, Serialize)]
pub struct LayerSpec {
    pub id: &'static str,
    pub category: Category,
    pub features: FeatureCollection,
}

impl Into<Feature> for EncodedStation {
    fn into(self) -> Feature {
        let lnglat: Vec<f64> = vec![self.record.longitude, self.record.latitude];
        let geometry = Geometry::new(Value::Point(lnglat));

        let category = self.category();
        let (fill, radius) = match &self.encoding {
            CategoryEncoding::Docked { color } => (*color, DOCKED_RADIUS),
            CategoryEncoding::Dockless { radius } => (DOCKLESS_FILL, *radius),
        };

        let mut properties = JsonObject::new();
        properties.insert("id".to_string(), JsonValue::from(self.record.station_id));
        properties.insert("name".to_string(), JsonValue::from(self.record.name));
        properties.insert(
            "stationType".to_string(),
            JsonValue::from(category.as_str()),
        );
        properties.insert("tooltip".to_string(), JsonValue::from(self.tooltip_text));
        properties.insert(
            "fillColor".to_string(),
            JsonValue::from(fill.as_array().to_vec()),
        );
        properties.insert("radius".to_string(), JsonValue::from(radius));

        Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// One layer per non-empty visible category, docked first.
pub fn build_layers(visible: &VisibleDataset) -> Vec<LayerSpec> {
    let mut layers = Vec::new();

    if !visible.docked.is_empty() {
        layers.push(LayerSpec {
            id: DOCKED_LAYER_ID,
            category: Category::Docked,
            features: collect_features(&visible.docked),
        });
    }

    if !visible.dockless.is_empty() {
        layers.push(LayerSpec {
            id: DOCKLESS_LAYER_ID,
            category: Category::Dockless,
            features: collect_features(&visible.dockless),
        });
    }

    layers
}

fn collect_features(stations: &[EncodedStation]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: stations
            .iter()
            .map(|station| station.clone().into())
            .collect::<Vec<Feature>>(),
        foreign_members: None,
    }
}
