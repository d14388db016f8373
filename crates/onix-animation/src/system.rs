//! Animation driver for every animated model of a map

use crate::path::sample_path;
use crate::playback::{ClipPlayback, PathPlayback};
use onix_core::Transform;
use onix_map::{AnimatedModelPlacement, Path, PlacementId, ValidatedMapConfig, Waypoint};

/// Pose of one animated model after an update
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPose {
    pub id: PlacementId,
    pub transform: Transform,
    pub clip_name: String,
    pub clip_time: f64,
}

/// Playback state for one animated model
#[derive(Debug, Clone)]
pub struct ModelAnimator {
    pub id: PlacementId,
    /// Initial pose from the map; scale is never animated
    rest: Transform,
    path: Option<Path>,
    pub clip: ClipPlayback,
    pub path_playback: PathPlayback,
}

impl ModelAnimator {
    pub fn from_placement(id: PlacementId, placement: &AnimatedModelPlacement) -> Self {
        Self {
            id,
            rest: placement.transform,
            path: placement.path.clone(),
            clip: ClipPlayback::new(
                placement.animation_name.clone(),
                placement.animation_speed,
                placement.loop_animation,
            ),
            path_playback: PathPlayback::new(placement.is_moving),
        }
    }

    pub fn advance(&mut self, dt: f64) {
        self.clip.advance(dt);
        if let Some(path) = &self.path {
            self.path_playback.advance(dt, path);
        }
    }

    pub fn pose(&self) -> ModelPose {
        let transform = match &self.path {
            Some(path) => {
                let at = sample_path(
                    path,
                    self.path_playback.elapsed,
                    &Waypoint::from_transform(&self.rest),
                );
                self.rest.with_position(at.position).with_rotation(at.rotation)
            }
            None => self.rest,
        };

        ModelPose {
            id: self.id,
            transform,
            clip_name: self.clip.clip_name.clone(),
            clip_time: self.clip.time,
        }
    }
}

/// Drives every animated model of a validated map
#[derive(Debug, Clone, Default)]
pub struct PathAnimationSystem {
    animators: Vec<ModelAnimator>,
}

impl PathAnimationSystem {
    pub fn from_config(config: &ValidatedMapConfig) -> Self {
        let animators: Vec<ModelAnimator> = config
            .animated_models
            .iter()
            .enumerate()
            .map(|(i, placement)| {
                ModelAnimator::from_placement(PlacementId::animated_model(i), placement)
            })
            .collect();

        let moving = animators.iter().filter(|a| a.path_playback.moving).count();
        log::debug!(
            "animation system initialized ({} model(s), {} moving)",
            animators.len(),
            moving
        );

        Self { animators }
    }

    /// Advance every model by `dt` seconds and return their poses
    pub fn update(&mut self, dt: f64) -> Vec<ModelPose> {
        for animator in &mut self.animators {
            animator.advance(dt);
        }
        self.poses()
    }

    pub fn poses(&self) -> Vec<ModelPose> {
        self.animators.iter().map(|a| a.pose()).collect()
    }

    pub fn animator(&self, id: PlacementId) -> Option<&ModelAnimator> {
        self.animators.iter().find(|a| a.id == id)
    }

    /// Forward a clip length reported by the engine after loading the model
    pub fn set_clip_duration(&mut self, id: PlacementId, duration: f64) -> bool {
        match self.animators.iter_mut().find(|a| a.id == id) {
            Some(animator) => {
                animator.clip.set_duration(duration);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.animators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }
}
