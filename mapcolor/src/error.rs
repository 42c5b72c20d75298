use thiserror::Error;

use crate::model::RegionId;

/// Failure ingesting a level description.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{what} exceeds limit of {limit}")]
    CapsExceeded { what: &'static str, limit: usize },
    #[error("region {region} has a coordinate outside the accepted range")]
    OutOfBounds { region: RegionId },
    #[error("region id {0} appears more than once")]
    DuplicateId(RegionId),
    #[error("region {region} has {points} vertices, at least 3 are required")]
    DegeneratePolygon { region: RegionId, points: usize },
}

impl LevelError {
    pub fn code(&self) -> &'static str {
        match self {
            LevelError::Parse(_) => "parse",
            LevelError::CapsExceeded { .. } => "caps_exceeded",
            LevelError::OutOfBounds { .. } => "out_of_bounds",
            LevelError::DuplicateId(_) | LevelError::DegeneratePolygon { .. } => {
                "invalid_structure"
            }
        }
    }
}

/// Failure restoring a board from a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no level is loaded")]
    NoLevel,
    #[error("snapshot belongs to level '{found}', board has '{expected}'")]
    LevelMismatch { expected: String, found: String },
    #[error("snapshot history has {0} entries")]
    CapsExceeded(usize),
}

impl SnapshotError {
    pub fn code(&self) -> &'static str {
        match self {
            SnapshotError::Parse(_) => "parse",
            SnapshotError::NoLevel => "no_level",
            SnapshotError::LevelMismatch { .. } => "level_mismatch",
            SnapshotError::CapsExceeded(_) => "caps_exceeded",
        }
    }
}

/// Rejected engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("parameter '{param}' out of range: {got}")]
    OutOfRange { param: &'static str, got: f64 },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Parse(_) => "parse",
            ConfigError::OutOfRange { .. } => "out_of_range",
        }
    }
}
