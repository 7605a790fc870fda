use serde::Serialize;

use crate::encode::EncodedDataset;
use crate::location::Location;

pub const DEFAULT_ZOOM: f64 = 11.0;

/// The opening camera for the map collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
}

impl MapView {
    /// Centers over the whole snapshot rather than the visible subset, so
    /// adjusting filters does not recenter the map.
    pub fn over_dataset(dataset: &EncodedDataset) -> Option<MapView> {
        let center = Location::centroid(dataset.locations())?;

        Some(MapView {
            latitude: center.latitude,
            longitude: center.longitude,
            zoom: DEFAULT_ZOOM,
            pitch: 0.0,
        })
    }
}
