//! Undo/redo for debug gizmo edits

use onix_core::Transform;
use onix_map::PlacementId;

/// One transform change on one placement
#[derive(Debug, Clone, PartialEq)]
pub struct EditRecord {
    pub placement: PlacementId,
    pub old_transform: Transform,
    pub new_transform: Transform,
    pub description: String,
}

/// Undo/redo stack with bounded depth
#[derive(Debug)]
pub struct UndoStack {
    undo: Vec<EditRecord>,
    redo: Vec<EditRecord>,
    max_depth: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::with_depth(100)
    }
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Push a new record onto the undo stack (clears redo)
    pub fn push(&mut self, record: EditRecord) {
        self.undo.push(record);
        self.redo.clear();
        if self.undo.len() > self.max_depth {
            self.undo.remove(0);
        }
    }

    /// Pop the last record; the caller restores `old_transform`
    pub fn undo(&mut self) -> Option<EditRecord> {
        let record = self.undo.pop()?;
        self.redo.push(record.clone());
        Some(record)
    }

    /// Pop the last undone record; the caller reapplies `new_transform`
    pub fn redo(&mut self) -> Option<EditRecord> {
        let record = self.redo.pop()?;
        self.undo.push(record.clone());
        Some(record)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo.last().map(|r| r.description.as_str())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo.last().map(|r| r.description.as_str())
    }

    pub fn len(&self) -> usize {
        self.undo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
