//! Onix Map - Map configuration schema and validation
//!
//! This crate handles the declarative description of one map: loading it
//! from JSON or TOML, checking every invariant of the schema, and resolving
//! its model references against the available assets.

mod format;
mod loader;
mod report;
mod resolve;
mod validate;

pub use format::{
    AnimatedModelPlacement, BuildingPlacement, BuildingSize, CameraSpec, EnvironmentPlacement,
    GroundSpec, MapConfig, MapDebugConfig, Path, PlacementId, PlacementKind, PlacementRef,
    Waypoint,
};
pub use loader::{
    load_map_config, load_map_config_str, load_validated_map, save_map_config,
    save_map_config_string, MapFormat,
};
pub use report::{Rule, Severity, ValidationError, ValidationReport, ViolationKind};
pub use resolve::{resolve_model_references, AssetSource, MissingAssetError};
pub use validate::{check, validate, ValidatedMapConfig};
