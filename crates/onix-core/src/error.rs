//! Error types for Onix

use thiserror::Error;

/// The main error type for Onix operations.
///
/// Expected configuration problems (range violations, missing assets) are
/// returned as structured lists by the validator; this enum covers faults
/// that stop loading outright.
#[derive(Debug, Error)]
pub enum OnixError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("JSON error: {0}")]
    JsonError(String),

    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    #[error("Unsupported map format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid map config ({} violation(s)): {}", .0.len(), .0.join("; "))]
    InvalidConfig(Vec<String>),

    #[error("Placement not found: {0}")]
    PlacementNotFound(String),

    #[error("Gizmo disabled: {0}")]
    GizmoDisabled(String),

    #[error("Asset error: {0}")]
    AssetError(String),
}

/// Result type alias for Onix operations
pub type Result<T> = std::result::Result<T, OnixError>;

impl From<toml::de::Error> for OnixError {
    fn from(err: toml::de::Error) -> Self {
        OnixError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for OnixError {
    fn from(err: toml::ser::Error) -> Self {
        OnixError::TomlSerError(err.to_string())
    }
}

impl From<serde_json::Error> for OnixError {
    fn from(err: serde_json::Error) -> Self {
        OnixError::JsonError(err.to_string())
    }
}
