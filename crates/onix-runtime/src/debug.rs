//! Debug overlay planning
//!
//! The overlay itself lives in the renderer. This module decides what it
//! should build from a validated map: the ground grid, one gizmo per
//! placement per enabled toggle, and light markers.

use onix_core::{Color, Vec3};
use onix_map::{GroundSpec, MapDebugConfig, PlacementId, ValidatedMapConfig};
use serde::Serialize;

/// Gizmo flavours a placement can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GizmoKind {
    Position,
    Scale,
    Rotation,
}

impl GizmoKind {
    pub const ALL: [GizmoKind; 3] = [GizmoKind::Position, GizmoKind::Scale, GizmoKind::Rotation];

    pub fn enabled_in(&self, debug: &MapDebugConfig) -> bool {
        match self {
            GizmoKind::Position => debug.gizmo_position,
            GizmoKind::Scale => debug.gizmo_scale,
            GizmoKind::Rotation => debug.gizmo_rotation,
        }
    }

    /// Name of the debug toggle that enables this gizmo
    pub fn toggle_name(&self) -> &'static str {
        match self {
            GizmoKind::Position => "debug.gizmoPosition",
            GizmoKind::Scale => "debug.gizmoScale",
            GizmoKind::Rotation => "debug.gizmoRotation",
        }
    }
}

/// Ground grid parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundGrid {
    pub width: f32,
    pub height: f32,
    pub subdivisions: u32,
    /// Height of the grid plane above the ground
    pub elevation: f32,
    pub major_unit_frequency: u32,
    pub minor_unit_visibility: f32,
    pub grid_ratio: f32,
    pub main_color: Color,
    pub line_color: Color,
    pub opacity: f32,
}

impl GroundGrid {
    pub fn for_ground(ground: &GroundSpec) -> Self {
        Self {
            width: ground.width,
            height: ground.height,
            subdivisions: 20,
            elevation: 10.0,
            major_unit_frequency: 5,
            minor_unit_visibility: 0.5,
            grid_ratio: 1.0,
            main_color: Color::WHITE,
            line_color: Color::gray(0.5),
            opacity: 0.3,
        }
    }
}

/// A gizmo to attach to one placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GizmoAttachment {
    pub placement: PlacementId,
    pub kind: GizmoKind,
}

/// Scene light as seen by the debug overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightKind {
    Hemispheric { direction: Vec3 },
    Directional { direction: Vec3 },
    Point { position: Vec3 },
    Spot { position: Vec3, direction: Vec3 },
}

impl LightKind {
    /// Where the marker sphere sits: the direction vector for directional
    /// kinds, the position for positional ones.
    pub fn marker_position(&self) -> Vec3 {
        match *self {
            LightKind::Hemispheric { direction } | LightKind::Directional { direction } => {
                direction
            }
            LightKind::Point { position } | LightKind::Spot { position, .. } => position,
        }
    }

    /// Write a dragged marker back into the field it was read from
    pub fn move_marker(&mut self, to: Vec3) {
        match self {
            LightKind::Hemispheric { direction } | LightKind::Directional { direction } => {
                *direction = to
            }
            LightKind::Point { position } | LightKind::Spot { position, .. } => *position = to,
        }
    }

    pub fn marker_color(&self) -> Color {
        match self {
            LightKind::Hemispheric { .. } => Color::new(0.5, 0.5, 1.0),
            LightKind::Directional { .. } => Color::new(1.0, 1.0, 0.5),
            LightKind::Point { .. } => Color::new(1.0, 0.5, 0.5),
            LightKind::Spot { .. } => Color::new(0.5, 1.0, 0.5),
        }
    }
}

/// Draggable marker for one scene light
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightGizmo {
    pub name: String,
    pub light: LightKind,
}

impl LightGizmo {
    pub const MARKER_DIAMETER: f32 = 0.5;

    pub fn new(name: impl Into<String>, light: LightKind) -> Self {
        Self {
            name: name.into(),
            light,
        }
    }

    /// Mesh name the renderer gives the marker
    pub fn marker_name(&self) -> String {
        format!("lightGizmo_{}", self.name)
    }

    /// Apply the end of a marker drag and return the updated light
    pub fn drag_to(&mut self, to: Vec3) -> LightKind {
        if !to.is_finite() {
            log::warn!("ignoring non-finite drag for light gizmo '{}'", self.name);
            return self.light;
        }
        self.light.move_marker(to);
        log::info!(
            "light '{}' marker moved to ({}, {}, {})",
            self.name,
            to.x,
            to.y,
            to.z
        );
        self.light
    }
}

/// Everything the debug overlay should build for one map
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebugOverlayPlan {
    pub grid: Option<GroundGrid>,
    pub gizmos: Vec<GizmoAttachment>,
    pub lights: Vec<LightGizmo>,
    pub inspector: bool,
}

impl DebugOverlayPlan {
    /// Plan the overlay for a map. Lights are supplied by the renderer and
    /// only planned when `debug.lightGizmo` is on.
    pub fn from_config(config: &ValidatedMapConfig) -> Self {
        Self::with_lights(config, std::iter::empty())
    }

    pub fn with_lights<I>(config: &ValidatedMapConfig, lights: I) -> Self
    where
        I: IntoIterator<Item = LightGizmo>,
    {
        let debug = &config.debug;

        let grid = debug.ground_grid.then(|| GroundGrid::for_ground(&config.ground));

        let enabled: Vec<GizmoKind> = GizmoKind::ALL
            .into_iter()
            .filter(|kind| kind.enabled_in(debug))
            .collect();
        let gizmos = config
            .placements()
            .flat_map(|p| {
                enabled.iter().map(move |&kind| GizmoAttachment {
                    placement: p.id,
                    kind,
                })
            })
            .collect();

        let lights = if debug.light_gizmo {
            lights.into_iter().collect()
        } else {
            Vec::new()
        };

        let plan = Self {
            grid,
            gizmos,
            lights,
            inspector: debug.inspector,
        };
        log::debug!(
            "debug overlay: grid={}, {} gizmo(s), {} light marker(s)",
            plan.grid.is_some(),
            plan.gizmos.len(),
            plan.lights.len()
        );
        plan
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_none() && self.gizmos.is_empty() && self.lights.is_empty() && !self.inspector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onix_map::{load_map_config_str, validate, MapConfig, MapFormat};

    fn main_map() -> MapConfig {
        load_map_config_str(
            include_str!("../../../maps/main_map.toml"),
            MapFormat::Toml,
        )
        .unwrap()
    }

    fn with_debug(debug: MapDebugConfig) -> ValidatedMapConfig {
        let mut map = main_map();
        map.debug = debug;
        validate(map).unwrap()
    }

    #[test]
    fn test_debug_off_plans_nothing() {
        let plan = DebugOverlayPlan::with_lights(
            &with_debug(MapDebugConfig::all(false)),
            [LightGizmo::new("sun", LightKind::Directional { direction: Vec3::UP })],
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn test_grid_uses_ground_size() {
        let plan = DebugOverlayPlan::from_config(&with_debug(MapDebugConfig {
            ground_grid: true,
            ..Default::default()
        }));
        let grid = plan.grid.unwrap();
        assert_eq!((grid.width, grid.height), (200.0, 200.0));
        assert_eq!(grid.subdivisions, 20);
        assert_eq!(grid.elevation, 10.0);
        assert_eq!(grid.line_color, Color::gray(0.5));
        assert!(plan.gizmos.is_empty());
    }

    #[test]
    fn test_one_gizmo_per_placement_per_toggle() {
        let config = with_debug(MapDebugConfig {
            gizmo_position: true,
            gizmo_rotation: true,
            ..Default::default()
        });
        let plan = DebugOverlayPlan::from_config(&config);
        assert_eq!(plan.gizmos.len(), config.placement_count() * 2);
        assert!(plan.gizmos.iter().all(|g| g.kind != GizmoKind::Scale));
        assert_eq!(
            plan.gizmos[0],
            GizmoAttachment {
                placement: PlacementId::building(0),
                kind: GizmoKind::Position
            }
        );
    }

    #[test]
    fn test_lights_need_their_toggle() {
        let sun = LightGizmo::new("sun", LightKind::Hemispheric { direction: Vec3::UP });
        let off = DebugOverlayPlan::with_lights(
            &with_debug(MapDebugConfig::all(false)),
            [sun.clone()],
        );
        assert!(off.lights.is_empty());

        let on = DebugOverlayPlan::with_lights(
            &with_debug(MapDebugConfig {
                light_gizmo: true,
                ..Default::default()
            }),
            [sun],
        );
        assert_eq!(on.lights.len(), 1);
        assert_eq!(on.lights[0].marker_name(), "lightGizmo_sun");
    }

    #[test]
    fn test_marker_follows_light_kind() {
        let dir = Vec3::new(0.0, -1.0, 0.5);
        let pos = Vec3::new(3.0, 8.0, 1.0);

        let mut directional = LightKind::Directional { direction: dir };
        assert_eq!(directional.marker_position(), dir);
        directional.move_marker(pos);
        assert_eq!(directional, LightKind::Directional { direction: pos });

        let mut spot = LightKind::Spot {
            position: pos,
            direction: dir,
        };
        assert_eq!(spot.marker_position(), pos);
        spot.move_marker(Vec3::ZERO);
        assert_eq!(
            spot,
            LightKind::Spot {
                position: Vec3::ZERO,
                direction: dir
            }
        );
    }

    #[test]
    fn test_marker_colors() {
        assert_eq!(
            LightKind::Hemispheric { direction: Vec3::UP }.marker_color(),
            Color::new(0.5, 0.5, 1.0)
        );
        assert_eq!(
            LightKind::Point { position: Vec3::ZERO }.marker_color(),
            Color::new(1.0, 0.5, 0.5)
        );
    }

    #[test]
    fn test_non_finite_drag_is_ignored() {
        let mut gizmo = LightGizmo::new("lamp", LightKind::Point { position: Vec3::ONE });
        let light = gizmo.drag_to(Vec3::new(f32::NAN, 0.0, 0.0));
        assert_eq!(light, LightKind::Point { position: Vec3::ONE });
    }
}
