//! Asset catalog built from an asset directory

use crate::types::{AssetFile, AssetMeta, AssetType};
use onix_core::{ContentHash, OnixError, Result};
use onix_map::AssetSource;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Catalog of known assets, indexed by the name maps use to reference them
#[derive(Debug, Default)]
pub struct AssetCatalog {
    assets: HashMap<String, AssetMeta>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a directory tree. Model, texture and audio files register under
    /// their file name with a content hash; `.asset.toml` sidecars add or
    /// override metadata.
    pub fn load_from_directory<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(OnixError::AssetError(format!(
                "asset directory not found: {}",
                path.display()
            )));
        }
        let mut catalog = Self::new();
        Self::scan_directory(&mut catalog, path, path)?;
        log::debug!("catalogued {} asset(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    fn scan_directory(catalog: &mut AssetCatalog, root: &Path, dir: &Path) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                Self::scan_directory(catalog, root, &path)?;
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if file_name.ends_with(".asset.toml") {
                let content = fs::read_to_string(&path)?;
                let file: AssetFile = toml::from_str(&content).map_err(|e| {
                    OnixError::AssetError(format!("Failed to parse {}: {}", path.display(), e))
                })?;
                catalog.register(file.asset);
            } else if let Some(asset_type) = AssetType::from_path(&path) {
                let hash = ContentHash::from_file(&path)?.to_prefixed_hex();
                let relative = path.strip_prefix(root).unwrap_or(&path);
                let source_path = relative.to_string_lossy().replace('\\', "/");

                // A sidecar seen earlier keeps its metadata; the file only
                // contributes what it knows for certain.
                match catalog.assets.get_mut(file_name) {
                    Some(existing) => {
                        existing.hash = Some(hash);
                        existing.source_path.get_or_insert(source_path);
                    }
                    None => catalog.register(AssetMeta {
                        name: file_name.to_string(),
                        asset_type,
                        hash: Some(hash),
                        source_path: Some(source_path),
                        tags: Vec::new(),
                    }),
                }
            }
        }

        Ok(())
    }

    /// Register an asset. Metadata from a later registration wins, but a
    /// known hash or source path is kept when the newer entry lacks one.
    pub fn register(&mut self, mut meta: AssetMeta) {
        if let Some(existing) = self.assets.get(&meta.name) {
            if meta.hash.is_none() {
                meta.hash = existing.hash.clone();
            }
            if meta.source_path.is_none() {
                meta.source_path = existing.source_path.clone();
            }
        }
        self.assets.insert(meta.name.clone(), meta);
    }

    pub fn get(&self, name: &str) -> Option<&AssetMeta> {
        self.assets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    pub fn by_type(&self, asset_type: AssetType) -> Vec<&AssetMeta> {
        self.assets
            .values()
            .filter(|a| a.asset_type == asset_type)
            .collect()
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&AssetMeta> {
        self.assets
            .values()
            .filter(|a| a.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// All asset names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.assets.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Only models can back a placement.
impl AssetSource for AssetCatalog {
    fn contains_asset(&self, name: &str) -> bool {
        self.get(name)
            .map(|a| a.asset_type == AssetType::Model)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onix_map::{load_map_config_str, resolve_model_references, MapFormat};
    use std::path::PathBuf;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("onix_asset_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn model(name: &str) -> AssetMeta {
        AssetMeta {
            name: name.to_string(),
            asset_type: AssetType::Model,
            hash: None,
            source_path: None,
            tags: vec!["building".to_string()],
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = AssetCatalog::new();
        catalog.register(model("house_04.glb"));

        assert!(catalog.get("house_04.glb").is_some());
        assert!(catalog.contains("house_04.glb"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.by_tag("building").len(), 1);
        assert!(catalog.by_tag("tree").is_empty());
    }

    #[test]
    fn test_only_models_satisfy_references() {
        let mut catalog = AssetCatalog::new();
        catalog.register(model("house_04.glb"));
        catalog.register(AssetMeta {
            name: "grass.png".to_string(),
            asset_type: AssetType::Texture,
            hash: None,
            source_path: None,
            tags: vec![],
        });

        assert!(catalog.contains_asset("house_04.glb"));
        assert!(!catalog.contains_asset("grass.png"));
        assert!(!catalog.contains_asset("house_99.glb"));
        assert_eq!(catalog.by_type(AssetType::Texture).len(), 1);
    }

    #[test]
    fn test_load_from_directory() {
        let dir = temp_dir();
        fs::create_dir_all(dir.join("models/village")).unwrap();
        fs::write(dir.join("models/house_04.glb"), b"glTF-house").unwrap();
        fs::write(dir.join("models/village/well.glb"), b"glTF-well").unwrap();
        fs::write(dir.join("models/readme.txt"), b"ignored").unwrap();
        fs::write(
            dir.join("models/house_04.asset.toml"),
            "[asset]\nname = \"house_04.glb\"\ntype = \"model\"\ntags = [\"building\"]\n",
        )
        .unwrap();

        let catalog = AssetCatalog::load_from_directory(&dir).unwrap();
        assert_eq!(catalog.names(), vec!["house_04.glb", "well.glb"]);

        let well = catalog.get("well.glb").unwrap();
        assert_eq!(well.source_path.as_deref(), Some("models/village/well.glb"));
        assert!(well.hash.as_deref().unwrap().starts_with("sha256:"));

        let house = catalog.get("house_04.glb").unwrap();
        assert_eq!(house.tags, vec!["building"]);
        assert!(house.hash.is_some());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = std::env::temp_dir().join(format!("onix_missing_{}", uuid::Uuid::new_v4()));
        assert!(matches!(
            AssetCatalog::load_from_directory(&dir),
            Err(OnixError::AssetError(_))
        ));
    }

    #[test]
    fn test_catalog_feeds_reference_resolution() {
        let map = load_map_config_str(
            include_str!("../../../maps/main_map.toml"),
            MapFormat::Toml,
        )
        .unwrap();

        let mut catalog = AssetCatalog::new();
        for name in map.model_names() {
            if name != "well.glb" {
                catalog.register(model(name));
            }
        }

        let missing = resolve_model_references(&map, &catalog).unwrap_err();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].model_name, "well.glb");
    }
}
