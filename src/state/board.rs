//! What the controller last rendered, as a reactive signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SignalBoardView`] is the browser's [`BoardView`]: every controller
//! render replaces the note list in [`BoardState`], and components re-render
//! from the signal. Notices queue here until dismissed.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use board::board::Note;
use board::sort::SortMode;
use board::task::TaskId;
use board::view::{BoardView, Notice};
use leptos::prelude::*;

/// A notice on screen, with a handle for dismissing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShownNotice {
    pub id: u64,
    pub notice: Notice,
}

/// Board-level state: notes in display order, view mode, and notices.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    /// Notes in display order, as last rendered by the controller.
    pub notes: Vec<Note>,
    pub sort_mode: SortMode,
    /// True once the first render has arrived.
    pub loaded: bool,
    /// Oldest first.
    pub notices: Vec<ShownNotice>,
    next_notice_id: u64,
}

impl BoardState {
    /// Replace the rendered notes and mode.
    pub fn apply_render(&mut self, notes: &[Note], mode: SortMode) {
        self.notes = notes.to_vec();
        self.sort_mode = mode;
        self.loaded = true;
    }

    pub fn note(&self, id: TaskId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    /// Queue a notice, dropping the oldest beyond `max`.
    pub fn push_notice(&mut self, notice: Notice, max: usize) {
        self.next_notice_id += 1;
        self.notices.push(ShownNotice { id: self.next_notice_id, notice });
        let excess = self.notices.len().saturating_sub(max.max(1));
        self.notices.drain(..excess);
    }

    /// Remove a notice. Returns whether it was present.
    pub fn dismiss_notice(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|shown| shown.id != id);
        self.notices.len() != before
    }

    pub fn is_empty_board(&self) -> bool {
        self.loaded && self.notes.is_empty()
    }
}

/// [`BoardView`] writing into an `RwSignal<BoardState>`.
#[derive(Clone, Copy, Debug)]
pub struct SignalBoardView {
    state: RwSignal<BoardState>,
    max_notices: usize,
}

impl SignalBoardView {
    pub fn new(state: RwSignal<BoardState>, max_notices: usize) -> Self {
        Self { state, max_notices }
    }
}

impl BoardView for SignalBoardView {
    fn render(&self, notes: &[Note], mode: SortMode) {
        self.state.update(|s| s.apply_render(notes, mode));
    }

    fn notify(&self, notice: Notice) {
        log::debug!("notice: {}: {}", notice.kind.label(), notice.message);
        let max = self.max_notices;
        self.state.update(|s| s.push_notice(notice, max));
    }
}
