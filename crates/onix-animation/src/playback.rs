//! Per-model clip and path playback state

use crate::path::wrap_path_time;
use onix_map::Path;

/// Playback of one embedded animation clip.
#[derive(Debug, Clone)]
pub struct ClipPlayback {
    /// Name of the clip being played
    pub clip_name: String,
    /// Current playback time in seconds
    pub time: f64,
    /// Playback speed multiplier (1.0 = normal, negative = reverse, 0 = frozen)
    pub speed: f64,
    /// Whether the clip loops
    pub looping: bool,
    /// Whether the clip is currently playing
    pub playing: bool,
    /// Clip length, once the engine has loaded the model
    duration: Option<f64>,
}

impl ClipPlayback {
    pub fn new(clip_name: impl Into<String>, speed: f64, looping: bool) -> Self {
        Self {
            clip_name: clip_name.into(),
            time: 0.0,
            speed,
            looping,
            playing: true,
            duration: None,
        }
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Record the clip length. A reversed clip that has not advanced yet
    /// starts from its end.
    pub fn set_duration(&mut self, duration: f64) {
        if !(duration > 0.0) {
            return;
        }
        self.duration = Some(duration);
        if self.speed < 0.0 && self.time == 0.0 {
            self.time = duration;
        }
    }

    /// Advance by `dt` seconds. Without a known duration time runs free.
    pub fn advance(&mut self, dt: f64) {
        if !self.playing {
            return;
        }

        self.time += dt * self.speed;

        let Some(duration) = self.duration else {
            return;
        };

        if self.looping {
            if self.time >= duration || self.time < 0.0 {
                self.time = self.time.rem_euclid(duration);
            }
        } else if self.time >= duration {
            self.time = duration;
            self.playing = false;
        } else if self.time < 0.0 {
            self.time = 0.0;
            self.playing = false;
        }
    }
}

/// Progress of a model along its path
#[derive(Debug, Clone, Default)]
pub struct PathPlayback {
    /// Elapsed path time, kept within `[0, duration]`
    pub elapsed: f64,
    /// Mirrors the placement's `isMoving`; a stopped model holds its spot
    pub moving: bool,
}

impl PathPlayback {
    pub fn new(moving: bool) -> Self {
        Self {
            elapsed: 0.0,
            moving,
        }
    }

    /// Path time runs on wall-clock `dt`; the clip speed does not affect it.
    pub fn advance(&mut self, dt: f64, path: &Path) {
        if !self.moving {
            return;
        }
        self.elapsed = wrap_path_time(path, self.elapsed + dt);
    }

    /// An open path has been walked to its end
    pub fn finished(&self, path: &Path) -> bool {
        !path.looping && path.duration > 0.0 && self.elapsed >= path.duration
    }
}
