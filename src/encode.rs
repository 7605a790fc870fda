use std::fmt;

use itertools::{Either, Itertools};
use log::warn;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::color::{ratio_color, Rgba, NEUTRAL_RATIO, NO_DATA_COLOR};
use crate::error::StationDataError;
use crate::load::{DatasetMeta, StationDocument};
use crate::location::Location;
use crate::station::{MetricValue, StationRecord};

/// Marker radius for every docked station.
pub const DOCKED_RADIUS: f64 = 25.0;

/// Dockless marker radii grow with the average bike count from the floor up
/// to the saturation radius.
pub const DOCKLESS_MIN_RADIUS: f64 = 8.0;
pub const DOCKLESS_MAX_RADIUS: f64 = 25.0;

/// Average-bike count at which the dockless radius stops growing.
pub const DOCKLESS_SATURATION: f64 = 10.0;

/// Constant dockless fill, semi-transparent blue. Not data-driven.
pub const DOCKLESS_FILL: Rgba = Rgba {
    r: 0,
    g: 120,
    b: 255,
    a: 180,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Docked,
    Dockless,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Docked => "Docked",
            Category::Dockless => "Dockless",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The per-category display attributes. Docked stations color by
/// availability at a fixed radius; dockless zones size by bike count over a
/// constant fill.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryEncoding {
    Docked { color: Rgba },
    Dockless { radius: f64 },
}

#[derive(Debug, Clone)]
pub struct EncodedStation {
    pub record: StationRecord,
    pub encoding: CategoryEncoding,
    pub tooltip_text: String,
}

impl EncodedStation {
    pub fn category(&self) -> Category {
        match self.encoding {
            CategoryEncoding::Docked { .. } => Category::Docked,
            CategoryEncoding::Dockless { .. } => Category::Dockless,
        }
    }

    /// The raw metric the range filter applies to for this category.
    pub fn filter_metric(&self) -> Option<f64> {
        match self.category() {
            Category::Docked => self.record.availability_ratio.as_f64(),
            Category::Dockless => self.record.avg_num_of_available.as_f64(),
        }
    }
}

/// The encoder's output: usable stations partitioned by category, in
/// document order within each, along with the snapshot metadata.
#[derive(Debug, Clone, Default)]
pub struct EncodedDataset {
    pub docked: Vec<EncodedStation>,
    pub dockless: Vec<EncodedStation>,
    pub meta: DatasetMeta,
}

impl EncodedDataset {
    pub fn is_empty(&self) -> bool {
        self.docked.is_empty() && self.dockless.is_empty()
    }

    /// Coordinates of every usable station, both categories.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.docked
            .iter()
            .chain(self.dockless.iter())
            .map(|station| station.record.location())
    }
}

/// Derives display attributes for every usable record in the document.
/// Records that cannot be decoded or that carry non-finite coordinates are
/// skipped with a warning; a record set without coordinate columns at all
/// fails the refresh.
pub fn encode_document(document: &StationDocument) -> Result<EncodedDataset, StationDataError> {
    ensure_station_shape(&document.records)?;

    let (docked, dockless) = document
        .records
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| decode_record(index, raw))
        .partition_map(|record| {
            if record.is_virtual_station {
                Either::Right(encode_dockless(record))
            } else {
                Either::Left(encode_docked(record))
            }
        });

    Ok(EncodedDataset {
        docked,
        dockless,
        meta: document.meta.clone(),
    })
}

fn ensure_station_shape(records: &[JsonValue]) -> Result<(), StationDataError> {
    let has_coordinates = records.iter().any(|raw| {
        raw.as_object().map_or(false, |fields| {
            fields.contains_key("latitude") && fields.contains_key("longitude")
        })
    });

    if has_coordinates {
        Ok(())
    } else {
        Err(StationDataError::Shape(
            "required columns (latitude, longitude) not found".to_string(),
        ))
    }
}

fn decode_record(index: usize, raw: &JsonValue) -> Option<StationRecord> {
    let record = match serde_json::from_value::<StationRecord>(raw.clone()) {
        Ok(record) => record,
        Err(err) => {
            warn!("skipping station record {index}: {err}");
            return None;
        }
    };

    if !record.location().is_mappable() {
        warn!("skipping station record {index}: non-finite coordinates");
        return None;
    }

    Some(record)
}

fn encode_docked(record: StationRecord) -> EncodedStation {
    let color = match record.availability_ratio {
        MetricValue::Value(ratio) if ratio.is_finite() => ratio_color(normalize_ratio(ratio)),
        MetricValue::Null => ratio_color(NEUTRAL_RATIO),
        _ => NO_DATA_COLOR,
    };

    let tooltip_text = match record.availability_ratio.as_f64() {
        Some(ratio) => format!("Available Ratio: {}%", ratio.round() as i64),
        None => "Available Ratio: N/A".to_string(),
    };

    EncodedStation {
        record,
        encoding: CategoryEncoding::Docked { color },
        tooltip_text,
    }
}

/// Ratios arrive either as a 0-1 fraction or a 0-100 percentage.
fn normalize_ratio(raw: f64) -> f64 {
    let ratio = if raw > 1.0 { raw / 100.0 } else { raw };
    ratio.clamp(0.0, 1.0)
}

fn encode_dockless(record: StationRecord) -> EncodedStation {
    let radius = dockless_radius(record.avg_num_of_available);

    let tooltip_text = match record.avg_num_of_available.as_f64() {
        Some(avg) => format!("Available bikes: {}", avg.round() as i64),
        None => "Available bikes: N/A".to_string(),
    };

    EncodedStation {
        record,
        encoding: CategoryEncoding::Dockless { radius },
        tooltip_text,
    }
}

/// Missing averages count as zero, which lands on the floor radius.
pub fn dockless_radius(avg_available: MetricValue) -> f64 {
    let avg = avg_available.as_f64().unwrap_or(0.0);
    if avg >= DOCKLESS_SATURATION {
        DOCKLESS_MAX_RADIUS
    } else {
        (DOCKLESS_MIN_RADIUS + avg).max(DOCKLESS_MIN_RADIUS)
    }
}
