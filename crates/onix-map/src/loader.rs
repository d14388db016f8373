//! Map loading and saving (JSON or TOML)

use crate::format::MapConfig;
use crate::validate::{validate, ValidatedMapConfig};
use onix_core::{OnixError, Result};
use std::fs;
use std::path::Path;

/// On-disk encoding of a map file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFormat {
    Json,
    Toml,
}

impl MapFormat {
    /// Pick the format from the file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(MapFormat::Json),
            Some("toml") => Ok(MapFormat::Toml),
            _ => Err(OnixError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load a map file without validating it
pub fn load_map_config<P: AsRef<Path>>(path: P) -> Result<MapConfig> {
    let path = path.as_ref();
    let format = MapFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    log::debug!("loading map {} ({:?})", path.display(), format);
    load_map_config_str(&content, format).map_err(|e| match e {
        OnixError::SchemaViolation(msg) => {
            OnixError::SchemaViolation(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Parse a map from a string. Shape problems (missing fields, wrong types,
/// unparsable text) are schema violations.
pub fn load_map_config_str(content: &str, format: MapFormat) -> Result<MapConfig> {
    match format {
        MapFormat::Json => serde_json::from_str(content)
            .map_err(|e| OnixError::SchemaViolation(e.to_string())),
        MapFormat::Toml => {
            toml::from_str(content).map_err(|e| OnixError::SchemaViolation(e.to_string()))
        }
    }
}

/// Load and validate a map file. A map with any error-severity finding is
/// rejected as a whole.
pub fn load_validated_map<P: AsRef<Path>>(path: P) -> Result<ValidatedMapConfig> {
    let config = load_map_config(path)?;
    validate(config).map_err(|violations| {
        OnixError::InvalidConfig(violations.iter().map(|v| v.to_string()).collect())
    })
}

/// Serialize a map in the given format
pub fn save_map_config_string(config: &MapConfig, format: MapFormat) -> Result<String> {
    let content = match format {
        MapFormat::Json => serde_json::to_string_pretty(config)?,
        MapFormat::Toml => toml::to_string_pretty(config)?,
    };
    Ok(content)
}

/// Save a map, picking the format from the file extension
pub fn save_map_config<P: AsRef<Path>>(path: P, config: &MapConfig) -> Result<()> {
    let path = path.as_ref();
    let content = save_map_config_string(config, MapFormat::from_path(path)?)?;
    fs::write(path, content)?;
    log::debug!("saved map {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::check;

    const MAIN_MAP: &str = include_str!("../../../maps/main_map.toml");

    fn temp_dir() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("onix_map_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_main_map_is_valid() {
        let map = load_map_config_str(MAIN_MAP, MapFormat::Toml).unwrap();
        assert_eq!(map.buildings.len(), 3);
        assert_eq!(map.buildings[0].model_name, "house_04.glb");
        let validated = validate(map).unwrap();
        assert!(validated.warnings().is_empty());
    }

    #[test]
    fn test_round_trip_revalidates_clean() {
        let validated = validate(load_map_config_str(MAIN_MAP, MapFormat::Toml).unwrap()).unwrap();

        for format in [MapFormat::Json, MapFormat::Toml] {
            let text = save_map_config_string(validated.config(), format).unwrap();
            let reloaded = load_map_config_str(&text, format).unwrap();
            assert_eq!(&reloaded, validated.config());
            let report = check(&reloaded);
            assert_eq!(report.violations.len(), 0, "{:?}: {}", format, report.summary());
        }
    }

    #[test]
    fn test_missing_field_is_schema_violation() {
        let broken = MAIN_MAP.replace("moveSpeed = 0.8\n", "");
        let err = load_map_config_str(&broken, MapFormat::Toml).unwrap_err();
        assert!(matches!(err, OnixError::SchemaViolation(ref m) if m.contains("moveSpeed")));

        let err = load_map_config_str("{ not json", MapFormat::Json).unwrap_err();
        assert!(matches!(err, OnixError::SchemaViolation(_)));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(MapFormat::from_path("maps/a.json").unwrap(), MapFormat::Json);
        assert_eq!(MapFormat::from_path("maps/a.TOML").unwrap(), MapFormat::Toml);
        assert!(matches!(
            MapFormat::from_path("maps/a.yaml"),
            Err(OnixError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = temp_dir();
        let map = load_map_config_str(MAIN_MAP, MapFormat::Toml).unwrap();

        let json_path = dir.join("main.json");
        save_map_config(&json_path, &map).unwrap();
        let validated = load_validated_map(&json_path).unwrap();
        assert_eq!(validated.config(), &map);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_file_rejected() {
        let dir = temp_dir();
        let path = dir.join("bad.toml");
        let broken = MAIN_MAP.replace("width = 200.0", "width = -5.0");
        fs::write(&path, broken).unwrap();

        let err = load_validated_map(&path).unwrap_err();
        match err {
            OnixError::InvalidConfig(violations) => {
                assert_eq!(violations.len(), 1);
                assert!(violations[0].starts_with("ground.width"));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let _ = fs::remove_dir_all(&dir);
    }
}
