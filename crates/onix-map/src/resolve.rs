//! Model reference resolution against the loadable asset set

use crate::format::{MapConfig, PlacementId};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Anything that can answer whether a model is loadable.
pub trait AssetSource {
    fn contains_asset(&self, name: &str) -> bool;
}

impl AssetSource for HashSet<String> {
    fn contains_asset(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl AssetSource for HashSet<&str> {
    fn contains_asset(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl AssetSource for BTreeSet<String> {
    fn contains_asset(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl AssetSource for [&str] {
    fn contains_asset(&self, name: &str) -> bool {
        self.contains(&name)
    }
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn contains_asset(&self, name: &str) -> bool {
        (**self).contains_asset(name)
    }
}

/// A model name with no loadable asset, and every placement using it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAssetError {
    pub model_name: String,
    pub referenced_by: Vec<PlacementId>,
}

impl fmt::Display for MissingAssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let users: Vec<String> = self.referenced_by.iter().map(|id| id.to_string()).collect();
        write!(
            f,
            "missing asset '{}' (referenced by {})",
            self.model_name,
            users.join(", ")
        )
    }
}

/// Check every model reference in the map. All missing names are reported
/// together, one entry per distinct name in first-seen order.
pub fn resolve_model_references<S>(
    config: &MapConfig,
    available: &S,
) -> Result<(), Vec<MissingAssetError>>
where
    S: AssetSource + ?Sized,
{
    let mut missing: Vec<MissingAssetError> = Vec::new();

    for placement in config.placements() {
        if available.contains_asset(placement.model_name) {
            continue;
        }
        match missing
            .iter_mut()
            .find(|m| m.model_name == placement.model_name)
        {
            Some(entry) => entry.referenced_by.push(placement.id),
            None => missing.push(MissingAssetError {
                model_name: placement.model_name.to_string(),
                referenced_by: vec![placement.id],
            }),
        }
    }

    if missing.is_empty() {
        log::debug!(
            "resolved {} model reference(s)",
            config.model_names().len()
        );
        Ok(())
    } else {
        for m in &missing {
            log::debug!("{}", m);
        }
        Err(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{
        BuildingPlacement, BuildingSize, CameraSpec, EnvironmentPlacement, GroundSpec,
        MapDebugConfig,
    };
    use onix_core::{Color, Transform};

    fn building(model: &str) -> BuildingPlacement {
        BuildingPlacement {
            interactible: true,
            size: BuildingSize {
                width: 10.0,
                depth: 10.0,
                height: 10.0,
            },
            transform: Transform::default(),
            model_name: model.to_string(),
            highlight_color: Color::RED,
        }
    }

    fn map_with(buildings: Vec<BuildingPlacement>, props: &[&str]) -> MapConfig {
        MapConfig {
            debug: MapDebugConfig::default(),
            ground: GroundSpec {
                width: 100.0,
                height: 100.0,
            },
            camera: CameraSpec {
                initial_radius: 50.0,
                min_radius: 10.0,
                max_radius: 100.0,
                panning_sensibility: 50.0,
                wheel_delta_percentage: 0.01,
                lower_beta_limit: 0.3,
                upper_beta_limit: 1.3,
                move_speed: 1.0,
                edge_scroll_threshold: 20.0,
            },
            buildings,
            environments: props
                .iter()
                .map(|m| EnvironmentPlacement {
                    model_name: m.to_string(),
                    transform: Transform::default(),
                    interactible: false,
                })
                .collect(),
            animated_models: vec![],
            base_color: Color::gray(0.6),
        }
    }

    #[test]
    fn test_single_missing_asset_reported_once() {
        let map = map_with(
            vec![
                building("house_04.glb"),
                building("house_99.glb"),
                building("house_04.glb"),
            ],
            &["house_04.glb"],
        );
        let available: HashSet<String> = ["house_04.glb".to_string()].into_iter().collect();

        let missing = resolve_model_references(&map, &available).unwrap_err();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].model_name, "house_99.glb");
        assert_eq!(missing[0].referenced_by, vec![PlacementId::building(1)]);
    }

    #[test]
    fn test_all_missing_names_collected() {
        let map = map_with(
            vec![building("house_01.glb"), building("house_02.glb")],
            &["tree.glb", "house_02.glb"],
        );
        let available: [&str; 0] = [];

        let missing = resolve_model_references(&map, &available[..]).unwrap_err();
        let names: Vec<_> = missing.iter().map(|m| m.model_name.as_str()).collect();
        assert_eq!(names, vec!["house_01.glb", "house_02.glb", "tree.glb"]);
        assert_eq!(
            missing[1].referenced_by,
            vec![PlacementId::building(1), PlacementId::environment(1)]
        );
        assert!(missing[1].to_string().contains("buildings[1], environments[1]"));
    }

    #[test]
    fn test_everything_resolves() {
        let map = map_with(vec![building("house_01.glb")], &["tree.glb"]);
        let available: BTreeSet<String> = ["house_01.glb", "tree.glb", "unused.glb"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(resolve_model_references(&map, &available).is_ok());
    }
}
