//! Asset type definitions

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Kinds of assets a map can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Model,
    Texture,
    Audio,
}

impl AssetType {
    /// Classify a file by extension. `None` for files the viewer never loads.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "glb" | "gltf" | "babylon" | "obj" => Some(AssetType::Model),
            "png" | "jpg" | "jpeg" | "ktx2" => Some(AssetType::Texture),
            "ogg" | "mp3" | "wav" => Some(AssetType::Audio),
            _ => None,
        }
    }
}

/// Metadata for a known asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMeta {
    /// Name used by map files, e.g. `house_04.glb`
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub source_path: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// TOML sidecar file format for asset metadata
#[derive(Debug, Deserialize)]
pub struct AssetFile {
    pub asset: AssetMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_sidecar_serde() {
        let toml_str = r#"
[asset]
name = "house_04.glb"
type = "model"
source_path = "models/house_04.glb"
tags = ["building", "village"]
"#;

        let file: AssetFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.asset.name, "house_04.glb");
        assert_eq!(file.asset.asset_type, AssetType::Model);
        assert!(file.asset.hash.is_none());
        assert_eq!(file.asset.tags, vec!["building", "village"]);
    }

    #[test]
    fn test_type_from_extension() {
        assert_eq!(AssetType::from_path(Path::new("a/house.GLB")), Some(AssetType::Model));
        assert_eq!(AssetType::from_path(Path::new("grass.png")), Some(AssetType::Texture));
        assert_eq!(AssetType::from_path(Path::new("theme.ogg")), Some(AssetType::Audio));
        assert_eq!(AssetType::from_path(Path::new("notes.txt")), None);
        assert_eq!(AssetType::from_path(Path::new("README")), None);
    }
}
