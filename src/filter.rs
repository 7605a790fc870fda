use serde::Serialize;

use crate::encode::{Category, EncodedDataset, EncodedStation};

/// Upper slider bound for the docked availability ratio, in percent.
pub const DOCKED_RANGE_CAP: f64 = 100.0;

/// Upper slider bound for the dockless average bike count.
pub const DOCKLESS_RANGE_CAP: f64 = 20.0;

/// Inclusive bounds on a category's filter metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterRange {
    pub min: f64,
    pub max: f64,
}

impl FilterRange {
    pub fn new(min: f64, max: f64) -> FilterRange {
        FilterRange { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Default bounds: lowest observed metric up to the category cap. A
    /// subset with no observable metric yields no range.
    pub fn from_observed(stations: &[EncodedStation], cap: f64) -> Option<FilterRange> {
        stations
            .iter()
            .filter_map(|station| station.filter_metric())
            .fold(None, |lowest: Option<f64>, value| {
                Some(lowest.map_or(value, |lowest| lowest.min(value)))
            })
            .map(|lowest| FilterRange::new(lowest, cap))
    }
}

/// One category's slice of the UI state: the visibility toggle and the
/// optional range constraint. No range means every station passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryFilter {
    pub enabled: bool,
    pub range: Option<FilterRange>,
}

impl CategoryFilter {
    pub fn enabled_with(range: Option<FilterRange>) -> CategoryFilter {
        CategoryFilter {
            enabled: true,
            range,
        }
    }

    pub fn disabled() -> CategoryFilter {
        CategoryFilter {
            enabled: false,
            range: None,
        }
    }

    fn admits(&self, station: &EncodedStation) -> bool {
        if !self.enabled {
            return false;
        }

        match self.range {
            Some(range) => station
                .filter_metric()
                .map_or(false, |value| range.contains(value)),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSettings {
    pub docked: CategoryFilter,
    pub dockless: CategoryFilter,
}

impl FilterSettings {
    /// Both categories visible, ranges seeded from the observed data.
    pub fn defaults_for(dataset: &EncodedDataset) -> FilterSettings {
        FilterSettings {
            docked: CategoryFilter::enabled_with(FilterRange::from_observed(
                &dataset.docked,
                DOCKED_RANGE_CAP,
            )),
            dockless: CategoryFilter::enabled_with(FilterRange::from_observed(
                &dataset.dockless,
                DOCKLESS_RANGE_CAP,
            )),
        }
    }

    pub fn for_category(&self, category: Category) -> &CategoryFilter {
        match category {
            Category::Docked => &self.docked,
            Category::Dockless => &self.dockless,
        }
    }
}

/// The post-filter station sets, one per category. A disabled category is
/// simply empty here.
#[derive(Debug, Clone, Default)]
pub struct VisibleDataset {
    pub docked: Vec<EncodedStation>,
    pub dockless: Vec<EncodedStation>,
}

/// Selects the visible subset of each category. Pure in, pure out: the same
/// dataset and settings always produce the same subsets.
pub fn apply(dataset: &EncodedDataset, settings: &FilterSettings) -> VisibleDataset {
    VisibleDataset {
        docked: select(&dataset.docked, &settings.docked),
        dockless: select(&dataset.dockless, &settings.dockless),
    }
}

fn select(stations: &[EncodedStation], filter: &CategoryFilter) -> Vec<EncodedStation> {
    stations
        .iter()
        .filter(|station| filter.admits(station))
        .cloned()
        .collect()
}
