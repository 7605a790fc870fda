use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::StationDataError;

/// Snapshot header fields a GBFS export wraps around the station list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetMeta {
    pub last_updated: Option<DateTime<Utc>>,
    pub ttl: Option<u64>,
}

impl DatasetMeta {
    fn from_document(document: &JsonValue) -> DatasetMeta {
        let Some(map) = document.as_object() else {
            return DatasetMeta::default();
        };

        DatasetMeta {
            last_updated: map
                .get("last_updated")
                .and_then(JsonValue::as_i64)
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
            ttl: map.get("ttl").and_then(JsonValue::as_u64),
        }
    }
}

/// A parsed snapshot: the raw station rows in document order, plus whatever
/// header metadata the file carried.
#[derive(Debug, Clone, Default)]
pub struct StationDocument {
    pub records: Vec<JsonValue>,
    pub meta: DatasetMeta,
}

impl StationDocument {
    pub fn read(path: &Path) -> Result<StationDocument, StationDataError> {
        let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => StationDataError::NotFound(path.to_path_buf()),
            _ => StationDataError::Unexpected(err.to_string()),
        })?;

        let document: JsonValue =
            serde_json::from_str(&raw).map_err(StationDataError::Format)?;

        Ok(StationDocument::from_document(document))
    }

    /// Accepts the three snapshot shapes seen in exports: a bare list,
    /// `{"data": [...]}`, and `{"data": {"stations": [...]}}`. Any other
    /// shape resolves to zero records rather than an error.
    pub fn from_document(document: JsonValue) -> StationDocument {
        let meta = DatasetMeta::from_document(&document);

        let records = match document {
            JsonValue::Array(items) => items,
            JsonValue::Object(mut map) => match map.remove("data") {
                Some(JsonValue::Object(mut data)) if data.contains_key("stations") => {
                    match data.remove("stations") {
                        Some(JsonValue::Array(items)) => items,
                        _ => Vec::new(),
                    }
                }
                Some(JsonValue::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        StationDocument { records, meta }
    }
}

/// Memoizes the parsed snapshot for its source path, so repeated dashboard
/// refreshes do not re-read the file. Loading a different path replaces the
/// entry; `invalidate` clears it.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<(PathBuf, Arc<StationDocument>)>,
}

impl DatasetCache {
    pub fn new() -> DatasetCache {
        DatasetCache::default()
    }

    pub fn load(&mut self, path: &Path) -> Result<Arc<StationDocument>, StationDataError> {
        if let Some((cached_path, document)) = &self.entry {
            if cached_path == path {
                return Ok(Arc::clone(document));
            }
        }

        let document = Arc::new(StationDocument::read(path)?);
        self.entry = Some((path.to_path_buf(), Arc::clone(&document)));
        Ok(document)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
