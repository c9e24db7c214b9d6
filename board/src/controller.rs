//! Board controller: the hooks the UI calls, and the sequencing of REST calls,
//! board mutations, and re-renders behind them.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is generic over its collaborators ([`TaskApi`],
//! [`BoardView`], [`SettingsStore`], [`Clock`]) so the same code runs in the
//! browser and in native tests.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on one thread, but hooks are `async` and may interleave
//! at `.await` points (a sweep can fire while a create is in flight). All
//! state sits behind `RefCell`s and no borrow is held across an `.await`.
//! Overlapping requests are not sequenced; the last response applied wins.
//!
//! ERROR HANDLING
//! ==============
//! A failed request is logged, surfaced through [`BoardView::notify`], and
//! returned to the caller. The board is left as it was before the failed
//! step; optimistic removals are not rolled back.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;

use crate::api::{ApiError, TaskApi};
use crate::board::{Board, Note};
use crate::drag::{NoteBox, insertion_target};
use crate::localtime::{Clock, SystemClock, from_local_input, to_local_input};
use crate::settings::{SettingsStore, load_warning_hours, parse_warning_hours, save_warning_hours};
use crate::sort::SortMode;
use crate::task::{NewTask, TaskId, TaskPatch};
use crate::view::{BoardView, Notice};

/// Session-scoped state owned by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardSession {
    pub sort_mode: SortMode,
    /// Hours before a deadline at which a note turns "warning".
    pub warning_hours: f64,
    /// Note currently being dragged.
    pub dragged: Option<TaskId>,
}

pub struct BoardController<A, V, S, C = SystemClock> {
    api: A,
    view: V,
    settings: S,
    clock: C,
    session: RefCell<BoardSession>,
    board: RefCell<Board>,
}

impl<A, V, S, C> BoardController<A, V, S, C>
where
    A: TaskApi,
    V: BoardView,
    S: SettingsStore,
    C: Clock,
{
    /// Build a controller in manual mode with the stored warning threshold.
    pub fn new(api: A, view: V, settings: S, clock: C) -> Self {
        let warning_hours = load_warning_hours(&settings);
        Self {
            api,
            view,
            settings,
            clock,
            session: RefCell::new(BoardSession { sort_mode: SortMode::Manual, warning_hours, dragged: None }),
            board: RefCell::new(Board::new()),
        }
    }

    pub fn sort_mode(&self) -> SortMode {
        self.session.borrow().sort_mode
    }

    pub fn warning_hours(&self) -> f64 {
        self.session.borrow().warning_hours
    }

    /// Snapshot of the notes in display order.
    pub fn notes(&self) -> Vec<Note> {
        self.board.borrow().notes().to_vec()
    }

    /// Value the create form's deadline field resets to: local "now".
    pub fn default_deadline_input(&self) -> String {
        to_local_input(self.clock.now(), &self.clock)
    }

    // --- Loading ---

    /// Initial page load.
    ///
    /// # Errors
    ///
    /// Returns the list request's error; it has already been reported.
    pub async fn load(&self) -> Result<(), ApiError> {
        log::info!("loading board");
        self.refresh().await
    }

    /// Fetch tasks in the current sort mode and rebuild the board.
    ///
    /// # Errors
    ///
    /// Returns the list request's error; the previous board stays on screen.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let mode = self.sort_mode();
        let mut tasks = self.reported("load tasks", self.api.list(mode).await)?;
        if mode != self.sort_mode() {
            log::debug!("sort mode changed during fetch; dropping stale {} response", mode.query_value());
            return Ok(());
        }
        mode.arrange(&mut tasks);
        log::debug!("rendering {} tasks in {} order", tasks.len(), mode.query_value());
        let (now, hours) = (self.clock.now(), self.warning_hours());
        {
            let mut board = self.board.borrow_mut();
            board.replace(tasks);
            board.recompute(now, hours);
        }
        self.session.borrow_mut().dragged = None;
        self.render();
        Ok(())
    }

    // --- Mutations ---

    /// Create a task from the form inputs.
    ///
    /// Returns `Ok(true)` when a task was created (the form should clear),
    /// `Ok(false)` when the input was ignored or rejected locally.
    ///
    /// # Errors
    ///
    /// Returns the create request's error.
    pub async fn on_create(&self, content: &str, deadline_input: &str) -> Result<bool, ApiError> {
        if content.trim().is_empty() {
            return Ok(false);
        }
        let deadline = match from_local_input(deadline_input, &self.clock) {
            Ok(deadline) => deadline,
            Err(err) => {
                self.reject(err.to_string());
                return Ok(false);
            }
        };
        let Some(new_task) = NewTask::new(content, deadline) else {
            return Ok(false);
        };
        let created = self.reported("create task", self.api.create(&new_task).await)?;
        log::debug!("created task {}", created.id);
        if self.refresh().await.is_err() {
            log::debug!("board left stale after creating task {}", created.id);
        }
        Ok(true)
    }

    /// Mark a task complete or incomplete.
    ///
    /// # Errors
    ///
    /// Returns the update request's error; the note keeps its previous state.
    pub async fn on_toggle(&self, id: TaskId, checked: bool) -> Result<(), ApiError> {
        let result = self.api.update(id, &TaskPatch::completion(checked)).await;
        if result.is_ok() {
            let (now, hours) = (self.clock.now(), self.warning_hours());
            let mut board = self.board.borrow_mut();
            board.set_completed(id, checked);
            board.recompute_one(id, now, hours);
        }
        self.render();
        self.reported("update task", result)
    }

    /// Open the inline deadline editor on a note.
    ///
    /// Returns `false` if the note is unknown or already editing.
    pub fn on_begin_deadline_edit(&self, id: TaskId) -> bool {
        let initial = match self.board.borrow().get(id) {
            Some(note) => note.task.deadline.map(|d| to_local_input(d, &self.clock)).unwrap_or_default(),
            None => return false,
        };
        let opened = self.board.borrow_mut().open_editor(id, initial);
        if opened {
            self.render();
        }
        opened
    }

    /// Commit the inline editor's value when it loses focus.
    ///
    /// An empty value clears the deadline. A blur with no open editor is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns the update or refresh error.
    pub async fn on_commit_deadline(&self, id: TaskId, raw: &str) -> Result<(), ApiError> {
        if !self.board.borrow_mut().close_editor(id) {
            return Ok(());
        }
        self.render();
        let deadline = match from_local_input(raw, &self.clock) {
            Ok(deadline) => deadline,
            Err(err) => {
                self.reject(err.to_string());
                return Ok(());
            }
        };
        self.reported("update deadline", self.api.update(id, &TaskPatch::deadline(deadline)).await)?;
        self.refresh().await
    }

    /// Delete a task. The note disappears immediately and is not restored if
    /// the request fails.
    ///
    /// # Errors
    ///
    /// Returns the delete or reorder error.
    pub async fn on_delete(&self, id: TaskId) -> Result<(), ApiError> {
        let removed = self.board.borrow_mut().remove(id).is_some();
        if removed {
            self.render();
        }
        self.reported("delete task", self.api.delete(id).await)?;
        if self.sort_mode().allows_drag() {
            self.persist_order().await?;
        }
        Ok(())
    }

    // --- Drag and drop ---

    /// Start dragging a note. Ignored outside manual mode.
    pub fn on_drag_start(&self, id: TaskId) -> bool {
        if !self.sort_mode().allows_drag() {
            return false;
        }
        if !self.board.borrow_mut().set_dragging(id, true) {
            return false;
        }
        self.session.borrow_mut().dragged = Some(id);
        self.render();
        true
    }

    /// Move the dragged note live as the pointer moves.
    ///
    /// `boxes` are the current measurements of the rendered notes. Returns
    /// whether the order changed.
    pub fn on_drag_over(&self, pointer_y: f64, boxes: &[NoteBox]) -> bool {
        if !self.sort_mode().allows_drag() {
            return false;
        }
        let Some(dragged) = self.session.borrow().dragged else {
            return false;
        };
        let target = insertion_target(boxes, pointer_y, dragged);
        let moved = self.board.borrow_mut().move_before(dragged, target);
        if moved {
            self.render();
        }
        moved
    }

    /// Finish a drag and persist the resulting order.
    ///
    /// # Errors
    ///
    /// Returns the reorder error; the on-screen order is kept.
    pub async fn on_drag_end(&self) -> Result<(), ApiError> {
        let Some(dragged) = self.session.borrow_mut().dragged.take() else {
            return Ok(());
        };
        self.board.borrow_mut().clear_dragging();
        self.render();
        log::debug!("drag of task {dragged} ended");
        self.persist_order().await
    }

    /// Send the full on-screen order to the backend. No-op in deadline mode.
    ///
    /// # Errors
    ///
    /// Returns the reorder request's error.
    pub async fn persist_order(&self) -> Result<(), ApiError> {
        if !self.sort_mode().allows_drag() {
            log::debug!("not persisting order in deadline mode");
            return Ok(());
        }
        let ids = self.board.borrow().ordered_ids();
        self.reported("save order", self.api.reorder(&ids).await)
    }

    // --- View mode / settings ---

    /// Switch sort mode and re-fetch. Positions are not touched.
    ///
    /// # Errors
    ///
    /// Returns the list request's error; the previous mode is restored and
    /// re-rendered.
    pub async fn on_sort_mode_change(&self, mode: SortMode) -> Result<(), ApiError> {
        let previous = {
            let mut session = self.session.borrow_mut();
            session.dragged = None;
            std::mem::replace(&mut session.sort_mode, mode)
        };
        self.board.borrow_mut().clear_dragging();
        log::info!("sort mode: {}", mode.query_value());
        let result = self.refresh().await;
        // A newer switch may have happened meanwhile; only undo our own.
        if result.is_err() && self.sort_mode() == mode {
            log::debug!("switch to {} failed; back to {}", mode.query_value(), previous.query_value());
            self.session.borrow_mut().sort_mode = previous;
            self.render();
        }
        result
    }

    /// Apply a new warning threshold typed into the settings modal.
    ///
    /// Valid values are persisted and every note is re-marked without a
    /// fetch. Returns whether the value was accepted.
    pub fn on_warning_hours_change(&self, raw: &str) -> bool {
        let hours = match parse_warning_hours(raw) {
            Ok(hours) => hours,
            Err(err) => {
                self.reject(err.to_string());
                return false;
            }
        };
        save_warning_hours(&self.settings, hours);
        self.session.borrow_mut().warning_hours = hours;
        self.board.borrow_mut().recompute(self.clock.now(), hours);
        self.render();
        true
    }

    /// Periodic urgency recomputation. Returns whether any mark changed.
    pub fn sweep(&self) -> bool {
        let (now, hours) = (self.clock.now(), self.warning_hours());
        let changed = self.board.borrow_mut().recompute(now, hours);
        if changed {
            self.render();
        }
        changed
    }

    // --- Internals ---

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    fn clock(&self) -> &C {
        &self.clock
    }

    #[cfg(test)]
    fn session(&self) -> BoardSession {
        *self.session.borrow()
    }

    fn render(&self) {
        let notes = self.notes();
        self.view.render(&notes, self.sort_mode());
    }

    fn reject(&self, message: String) {
        log::warn!("rejected input: {message}");
        self.view.notify(Notice::validation(message));
    }

    fn reported<T>(&self, action: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(err) = &result {
            log::warn!("{action} failed: {err}");
            self.view.notify(Notice::new(err.notice_kind(), format!("Could not {action}: {err}")));
        }
        result
    }
}
