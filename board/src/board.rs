//! Ordered in-memory projection of the rendered board.
//!
//! DESIGN
//! ======
//! The note order here *is* the on-screen order: drag moves splice this list
//! and persisting order reads it top-to-bottom. Per-note visual state (urgency,
//! inline editor, drag flag) lives beside the cached task and is never sent to
//! the backend.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use chrono::{DateTime, Utc};

use crate::task::{Task, TaskId};
use crate::urgency::{Urgency, classify};

/// One rendered task.
#[derive(Clone, Debug, PartialEq)]
pub struct Note {
    pub task: Task,
    pub urgency: Urgency,
    /// Initial value of the inline deadline editor while it is open.
    pub editor: Option<String>,
    /// True while this note is being dragged.
    pub dragging: bool,
}

impl Note {
    #[must_use]
    pub fn new(task: Task) -> Self {
        Self { task, urgency: Urgency::None, editor: None, dragging: false }
    }

    #[must_use]
    pub fn id(&self) -> TaskId {
        self.task.id
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    notes: Vec<Note>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every note with fresh tasks, in the given order.
    ///
    /// An open deadline editor survives if its task is still present.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        let previous = std::mem::take(&mut self.notes);
        self.notes = tasks
            .into_iter()
            .map(|task| {
                let editor = previous.iter().find(|n| n.id() == task.id).and_then(|n| n.editor.clone());
                Note { editor, ..Note::new(task) }
            })
            .collect();
    }

    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.notes.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id() == id)
    }

    fn index_of(&self, id: TaskId) -> Option<usize> {
        self.notes.iter().position(|n| n.id() == id)
    }

    /// Task ids top-to-bottom.
    #[must_use]
    pub fn ordered_ids(&self) -> Vec<TaskId> {
        self.notes.iter().map(Note::id).collect()
    }

    /// Update the cached completion flag. Returns `false` for unknown ids.
    pub fn set_completed(&mut self, id: TaskId, done: bool) -> bool {
        match self.get_mut(id) {
            Some(note) => {
                note.task.is_completed = done;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TaskId) -> Option<Note> {
        let index = self.index_of(id)?;
        Some(self.notes.remove(index))
    }

    /// Move `id` so it sits immediately before `target`, or last when
    /// `target` is `None`. Returns whether the order changed.
    pub fn move_before(&mut self, id: TaskId, target: Option<TaskId>) -> bool {
        if target == Some(id) {
            return false;
        }
        let Some(from) = self.index_of(id) else {
            return false;
        };
        let before = self.ordered_ids();
        let note = self.notes.remove(from);
        let to = match target {
            Some(target) => match self.index_of(target) {
                Some(index) => index,
                None => {
                    self.notes.insert(from, note);
                    return false;
                }
            },
            None => self.notes.len(),
        };
        self.notes.insert(to, note);
        self.ordered_ids() != before
    }

    pub fn set_dragging(&mut self, id: TaskId, dragging: bool) -> bool {
        match self.get_mut(id) {
            Some(note) => {
                note.dragging = dragging;
                true
            }
            None => false,
        }
    }

    /// Clear the drag flag on every note.
    pub fn clear_dragging(&mut self) {
        for note in &mut self.notes {
            note.dragging = false;
        }
    }

    /// Open the inline deadline editor with `initial` as its value.
    ///
    /// Returns `false` (and changes nothing) if the note is unknown or an
    /// editor is already open on it.
    pub fn open_editor(&mut self, id: TaskId, initial: String) -> bool {
        match self.get_mut(id) {
            Some(note) if note.editor.is_none() => {
                note.editor = Some(initial);
                true
            }
            _ => false,
        }
    }

    /// Close the inline editor. Returns whether one was open.
    pub fn close_editor(&mut self, id: TaskId) -> bool {
        self.get_mut(id).is_some_and(|note| note.editor.take().is_some())
    }

    /// Recompute every note's urgency. Returns whether any mark changed.
    pub fn recompute(&mut self, now: DateTime<Utc>, warning_hours: f64) -> bool {
        let mut changed = false;
        for note in &mut self.notes {
            let urgency = classify(&note.task, now, warning_hours);
            if urgency != note.urgency {
                note.urgency = urgency;
                changed = true;
            }
        }
        changed
    }

    /// Recompute one note's urgency. Returns whether its mark changed.
    pub fn recompute_one(&mut self, id: TaskId, now: DateTime<Utc>, warning_hours: f64) -> bool {
        let Some(note) = self.get_mut(id) else {
            return false;
        };
        let urgency = classify(&note.task, now, warning_hours);
        let changed = urgency != note.urgency;
        note.urgency = urgency;
        changed
    }
}
