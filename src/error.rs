use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Failures that abort a whole refresh. Per-record problems are logged and
/// skipped instead, so they never show up here.
#[derive(Debug)]
pub enum StationDataError {
    NotFound(PathBuf),
    Format(serde_json::Error),
    Shape(String),
    Unexpected(String),
}

impl fmt::Display for StationDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationDataError::NotFound(path) => {
                write!(f, "station file '{}' not found", path.display())
            }
            StationDataError::Format(err) => write!(f, "invalid JSON station data: {err}"),
            StationDataError::Shape(msg) => write!(f, "unusable station data: {msg}"),
            StationDataError::Unexpected(msg) => write!(f, "an error occurred: {msg}"),
        }
    }
}

impl Error for StationDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StationDataError::Format(err) => Some(err),
            _ => None,
        }
    }
}
