//! Onix Runtime - State the viewer keeps around a loaded map
//!
//! - `UiState` - volume, mute, overlay visibility and loading flags
//! - `MapSession` - debug gizmo write-back with undo/redo over a validated map
//! - `DebugOverlayPlan` - which grid and gizmos the debug overlay should build
//! - `FrameClock` - clamped per-frame delta time

mod clock;
mod debug;
mod session;
mod ui_state;
mod undo;

pub use clock::FrameClock;
pub use debug::{DebugOverlayPlan, GizmoAttachment, GizmoKind, GroundGrid, LightGizmo, LightKind};
pub use session::{GizmoEdit, MapSession};
pub use ui_state::UiState;
pub use undo::{EditRecord, UndoStack};
