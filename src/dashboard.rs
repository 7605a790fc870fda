use std::path::Path;

use serde::Serialize;

use crate::encode::{encode_document, EncodedDataset};
use crate::error::StationDataError;
use crate::filter::{self, FilterSettings};
use crate::layer::{build_layers, LayerSpec, TOOLTIP_TEMPLATE};
use crate::load::{DatasetCache, DatasetMeta};
use crate::summary::SummaryCounts;
use crate::view::MapView;

/// Everything the display collaborator needs to draw one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct MapScene {
    pub view: MapView,
    pub layers: Vec<LayerSpec>,
    pub tooltip_template: &'static str,
}

/// The output of one refresh cycle. `scene` is absent when no layer is
/// visible, which the collaborator reports as "nothing to display" instead
/// of drawing an empty map.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardFrame {
    pub scene: Option<MapScene>,
    pub summary: SummaryCounts,
    pub meta: DatasetMeta,
}

/// One full refresh: load (memoized), encode, filter, aggregate, assemble.
pub fn refresh(
    cache: &mut DatasetCache,
    path: &Path,
    settings: &FilterSettings,
) -> Result<DashboardFrame, StationDataError> {
    let document = cache.load(path)?;
    let dataset = encode_document(&document)?;
    Ok(compose_frame(&dataset, settings))
}

/// Refresh with both categories visible and ranges seeded from the data.
pub fn refresh_with_defaults(
    cache: &mut DatasetCache,
    path: &Path,
) -> Result<DashboardFrame, StationDataError> {
    let document = cache.load(path)?;
    let dataset = encode_document(&document)?;
    let settings = FilterSettings::defaults_for(&dataset);
    Ok(compose_frame(&dataset, &settings))
}

/// Filters, aggregates, and assembles a frame from an encoded dataset.
pub fn compose_frame(dataset: &EncodedDataset, settings: &FilterSettings) -> DashboardFrame {
    let visible = filter::apply(dataset, settings);
    let summary = SummaryCounts::of(&visible);
    let layers = build_layers(&visible);

    let scene = match (layers.is_empty(), MapView::over_dataset(dataset)) {
        (false, Some(view)) => Some(MapScene {
            view,
            layers,
            tooltip_template: TOOLTIP_TEMPLATE,
        }),
        _ => None,
    };

    DashboardFrame {
        scene,
        summary,
        meta: dataset.meta.clone(),
    }
}
