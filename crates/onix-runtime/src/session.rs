//! Live map session: debug gizmo edits layered over a validated map

use crate::debug::GizmoKind;
use crate::undo::{EditRecord, UndoStack};
use onix_core::{OnixError, Result, Transform, Vec3};
use onix_map::{MapConfig, PlacementId, ValidatedMapConfig};
use std::collections::HashMap;
use std::sync::Arc;

/// Result of one gizmo drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoEdit {
    Position(Vec3),
    Scale(Vec3),
    Rotation(Vec3),
}

impl GizmoEdit {
    pub fn kind(&self) -> GizmoKind {
        match self {
            GizmoEdit::Position(_) => GizmoKind::Position,
            GizmoEdit::Scale(_) => GizmoKind::Scale,
            GizmoEdit::Rotation(_) => GizmoKind::Rotation,
        }
    }

    fn apply(&self, transform: Transform) -> Transform {
        match *self {
            GizmoEdit::Position(v) => transform.with_position(v),
            GizmoEdit::Scale(v) => transform.with_scale(v),
            GizmoEdit::Rotation(v) => transform.with_rotation(v),
        }
    }
}

/// A loaded map plus the debug edits made to it.
///
/// The validated config is shared and never mutated; edits live in an
/// overlay until [`MapSession::export_config`] bakes them into a new map.
/// Edits are trusted and do not re-run validation.
#[derive(Debug)]
pub struct MapSession {
    config: Arc<ValidatedMapConfig>,
    edits: HashMap<PlacementId, Transform>,
    history: UndoStack,
}

impl MapSession {
    pub fn new(config: Arc<ValidatedMapConfig>) -> Self {
        Self {
            config,
            edits: HashMap::new(),
            history: UndoStack::new(),
        }
    }

    pub fn config(&self) -> &Arc<ValidatedMapConfig> {
        &self.config
    }

    /// Transform of a placement with any debug edit applied
    pub fn effective_transform(&self, id: PlacementId) -> Option<Transform> {
        self.edits
            .get(&id)
            .copied()
            .or_else(|| self.config.transform(id).copied())
    }

    pub fn is_edited(&self, id: PlacementId) -> bool {
        self.edits.contains_key(&id)
    }

    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }

    /// Write a gizmo result back onto a placement. Fails when the matching
    /// debug toggle is off or the placement does not exist.
    pub fn apply_gizmo_edit(&mut self, id: PlacementId, edit: GizmoEdit) -> Result<Transform> {
        let kind = edit.kind();
        if !kind.enabled_in(&self.config.debug) {
            return Err(OnixError::GizmoDisabled(format!(
                "{} is off, cannot apply {:?} edit to {}",
                kind.toggle_name(),
                kind,
                id
            )));
        }

        let old_transform = self
            .effective_transform(id)
            .ok_or_else(|| OnixError::PlacementNotFound(id.to_string()))?;
        let new_transform = edit.apply(old_transform);
        let model_name = self.config.model_name(id).unwrap_or_default();

        log::info!(
            "{} ({}) {:?} -> {:?}",
            id,
            model_name,
            kind,
            match edit {
                GizmoEdit::Position(v) | GizmoEdit::Scale(v) | GizmoEdit::Rotation(v) => v,
            }
        );

        self.history.push(EditRecord {
            placement: id,
            old_transform,
            new_transform,
            description: format!("{:?} {}", kind, id),
        });
        self.set_transform(id, new_transform);
        Ok(new_transform)
    }

    /// Revert the last edit. Returns the placement it touched.
    pub fn undo(&mut self) -> Option<PlacementId> {
        let record = self.history.undo()?;
        log::debug!("undo: {}", record.description);
        self.set_transform(record.placement, record.old_transform);
        Some(record.placement)
    }

    /// Reapply the last undone edit
    pub fn redo(&mut self) -> Option<PlacementId> {
        let record = self.history.redo()?;
        log::debug!("redo: {}", record.description);
        self.set_transform(record.placement, record.new_transform);
        Some(record.placement)
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Drop every edit and the history
    pub fn reset(&mut self) {
        self.edits.clear();
        self.history.clear();
    }

    /// A fresh map with every edit baked in
    pub fn export_config(&self) -> MapConfig {
        let mut exported = self.config.config().clone();
        for (&id, &transform) in &self.edits {
            if let Some(slot) = exported.transform_mut(id) {
                *slot = transform;
            }
        }
        exported
    }

    fn set_transform(&mut self, id: PlacementId, transform: Transform) {
        // Returning to the file value removes the overlay entry
        if self.config.transform(id) == Some(&transform) {
            self.edits.remove(&id);
        } else {
            self.edits.insert(id, transform);
        }
    }
}
