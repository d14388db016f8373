//! Map file format definitions

use onix_core::{Color, Transform};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Root structure of a map file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    #[serde(default, deserialize_with = "deserialize_debug")]
    pub debug: MapDebugConfig,
    pub ground: GroundSpec,
    pub camera: CameraSpec,
    #[serde(default)]
    pub buildings: Vec<BuildingPlacement>,
    #[serde(default)]
    pub environments: Vec<EnvironmentPlacement>,
    #[serde(default)]
    pub animated_models: Vec<AnimatedModelPlacement>,
    pub base_color: Color,
}

/// Debug overlay switchboard. Every toggle is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDebugConfig {
    #[serde(default)]
    pub ground_grid: bool,
    #[serde(default, alias = "buildingGizmoPosition")]
    pub gizmo_position: bool,
    #[serde(default, alias = "buildingGizmoScale")]
    pub gizmo_scale: bool,
    #[serde(default, alias = "buildingGizmoRotation")]
    pub gizmo_rotation: bool,
    #[serde(default)]
    pub light_gizmo: bool,
    #[serde(default)]
    pub inspector: bool,
}

impl MapDebugConfig {
    /// Every toggle set to `enabled`
    pub fn all(enabled: bool) -> Self {
        Self {
            ground_grid: enabled,
            gizmo_position: enabled,
            gizmo_scale: enabled,
            gizmo_rotation: enabled,
            light_gizmo: enabled,
            inspector: enabled,
        }
    }

    pub fn any_enabled(&self) -> bool {
        *self != Self::all(false)
    }
}

/// Older map files write `debug = false` instead of a toggle table.
#[derive(Deserialize)]
#[serde(untagged)]
enum DebugSetting {
    All(bool),
    Toggles(MapDebugConfig),
}

fn deserialize_debug<'de, D>(deserializer: D) -> Result<MapDebugConfig, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match DebugSetting::deserialize(deserializer)? {
        DebugSetting::All(enabled) => MapDebugConfig::all(enabled),
        DebugSetting::Toggles(toggles) => toggles,
    })
}

/// Walkable/visible bounds of the map plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundSpec {
    pub width: f32,
    pub height: f32,
}

/// Orbit camera limits. Beta limits are polar angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSpec {
    pub initial_radius: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub panning_sensibility: f32,
    pub wheel_delta_percentage: f32,
    pub lower_beta_limit: f32,
    pub upper_beta_limit: f32,
    pub move_speed: f32,
    pub edge_scroll_threshold: f32,
}

/// Footprint of a building. Advisory only, never used for collision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingSize {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

/// A static building the user can hover and select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingPlacement {
    pub interactible: bool,
    pub size: BuildingSize,
    #[serde(flatten)]
    pub transform: Transform,
    pub model_name: String,
    pub highlight_color: Color,
}

/// A decorative prop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentPlacement {
    pub model_name: String,
    #[serde(flatten)]
    pub transform: Transform,
    #[serde(default)]
    pub interactible: bool,
}

/// A model playing one of its embedded clips, optionally walking a path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimatedModelPlacement {
    pub model_name: String,
    /// Initial pose, held when the model has no usable path
    #[serde(flatten)]
    pub transform: Transform,
    pub animation_name: String,
    /// Clip playback rate. Negative plays reversed, zero freezes the pose.
    pub animation_speed: f64,
    pub loop_animation: bool,
    pub is_moving: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Path>,
}

/// A point an animated model passes through
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: onix_core::Vec3,
    #[serde(default)]
    pub rotation: onix_core::Vec3,
}

impl Waypoint {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            position: transform.position,
            rotation: transform.rotation,
        }
    }
}

/// Waypoint route with a total traversal time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    #[serde(default)]
    pub points: Vec<Waypoint>,
    /// Seconds to traverse every segment once
    pub duration: f64,
    #[serde(rename = "loop", default)]
    pub looping: bool,
}

impl Path {
    /// Fewer than two points: nothing to interpolate between.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// Segments sharing the duration. A looping path adds the closing
    /// segment from the last point back to the first.
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        match (n, self.looping) {
            (0 | 1, _) => 0,
            (n, true) => n,
            (n, false) => n - 1,
        }
    }
}

/// Which placement list an id points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementKind {
    Building,
    Environment,
    AnimatedModel,
}

impl PlacementKind {
    /// Serialized list name
    pub fn field_name(&self) -> &'static str {
        match self {
            PlacementKind::Building => "buildings",
            PlacementKind::Environment => "environments",
            PlacementKind::AnimatedModel => "animatedModels",
        }
    }
}

/// Position of one placement in its list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlacementId {
    pub kind: PlacementKind,
    pub index: usize,
}

impl PlacementId {
    pub fn building(index: usize) -> Self {
        Self {
            kind: PlacementKind::Building,
            index,
        }
    }

    pub fn environment(index: usize) -> Self {
        Self {
            kind: PlacementKind::Environment,
            index,
        }
    }

    pub fn animated_model(index: usize) -> Self {
        Self {
            kind: PlacementKind::AnimatedModel,
            index,
        }
    }

    /// Field path of a member of this placement, e.g. `buildings[0].size.width`
    pub fn field(&self, member: &str) -> String {
        format!("{}.{}", self, member)
    }
}

impl fmt::Display for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.kind.field_name(), self.index)
    }
}

/// Borrowed view of any placement
#[derive(Debug, Clone, Copy)]
pub struct PlacementRef<'a> {
    pub id: PlacementId,
    pub model_name: &'a str,
    pub transform: &'a Transform,
}

impl MapConfig {
    /// All placements in file order: buildings, environments, animated models
    pub fn placements(&self) -> impl Iterator<Item = PlacementRef<'_>> {
        let buildings = self.buildings.iter().enumerate().map(|(i, b)| PlacementRef {
            id: PlacementId::building(i),
            model_name: &b.model_name,
            transform: &b.transform,
        });
        let environments = self.environments.iter().enumerate().map(|(i, e)| PlacementRef {
            id: PlacementId::environment(i),
            model_name: &e.model_name,
            transform: &e.transform,
        });
        let animated = self.animated_models.iter().enumerate().map(|(i, a)| PlacementRef {
            id: PlacementId::animated_model(i),
            model_name: &a.model_name,
            transform: &a.transform,
        });
        buildings.chain(environments).chain(animated)
    }

    pub fn placement_count(&self) -> usize {
        self.buildings.len() + self.environments.len() + self.animated_models.len()
    }

    pub fn transform(&self, id: PlacementId) -> Option<&Transform> {
        match id.kind {
            PlacementKind::Building => self.buildings.get(id.index).map(|b| &b.transform),
            PlacementKind::Environment => self.environments.get(id.index).map(|e| &e.transform),
            PlacementKind::AnimatedModel => {
                self.animated_models.get(id.index).map(|a| &a.transform)
            }
        }
    }

    pub fn transform_mut(&mut self, id: PlacementId) -> Option<&mut Transform> {
        match id.kind {
            PlacementKind::Building => self.buildings.get_mut(id.index).map(|b| &mut b.transform),
            PlacementKind::Environment => {
                self.environments.get_mut(id.index).map(|e| &mut e.transform)
            }
            PlacementKind::AnimatedModel => self
                .animated_models
                .get_mut(id.index)
                .map(|a| &mut a.transform),
        }
    }

    pub fn model_name(&self, id: PlacementId) -> Option<&str> {
        match id.kind {
            PlacementKind::Building => self.buildings.get(id.index).map(|b| b.model_name.as_str()),
            PlacementKind::Environment => {
                self.environments.get(id.index).map(|e| e.model_name.as_str())
            }
            PlacementKind::AnimatedModel => self
                .animated_models
                .get(id.index)
                .map(|a| a.model_name.as_str()),
        }
    }

    /// Distinct model names referenced anywhere in the map
    pub fn model_names(&self) -> BTreeSet<&str> {
        self.placements().map(|p| p.model_name).collect()
    }
}
