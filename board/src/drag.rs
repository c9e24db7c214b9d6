//! Drag-over insertion math for manual reordering.
//!
//! The host measures every rendered note on each `dragover` event and asks
//! where the dragged note belongs. The answer is the note to insert before,
//! or `None` to append at the end.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::task::TaskId;

/// Vertical extent of a rendered note in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteBox {
    pub id: TaskId,
    pub top: f64,
    pub height: f64,
}

impl NoteBox {
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Pick the note the dragged note should be inserted before.
///
/// Among the non-dragged notes whose midpoint lies below `pointer_y`, the one
/// nearest the pointer wins. Returns `None` when the pointer is below every
/// midpoint, meaning "append".
#[must_use]
pub fn insertion_target(boxes: &[NoteBox], pointer_y: f64, dragged: TaskId) -> Option<TaskId> {
    boxes
        .iter()
        .filter(|b| b.id != dragged)
        .map(|b| (pointer_y - b.midpoint(), b.id))
        .filter(|(offset, _)| *offset < 0.0)
        .fold(None, |closest: Option<(f64, TaskId)>, (offset, id)| match closest {
            Some((best, _)) if best >= offset => closest,
            _ => Some((offset, id)),
        })
        .map(|(_, id)| id)
}
