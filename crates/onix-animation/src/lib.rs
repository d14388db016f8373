//! Animation for Onix animated models
//!
//! - `path` - pure waypoint interpolation: segment lookup + linear blend
//! - `playback` - per-model clip and path playback state
//! - `system` - one animator per animated model of a validated map

pub mod path;
pub mod playback;
pub mod system;

pub use path::{locate_segment, sample_path, wrap_path_time, SegmentPosition};
pub use playback::{ClipPlayback, PathPlayback};
pub use system::{ModelAnimator, ModelPose, PathAnimationSystem};
