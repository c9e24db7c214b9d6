//! Render target for the controller, plus user-facing notices.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::board::Note;
use crate::sort::SortMode;

/// Category of a non-blocking notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    NetworkFailure,
    ValidationFailure,
    NotFound,
}

impl NoticeKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NetworkFailure => "Network error",
            Self::ValidationFailure => "Invalid input",
            Self::NotFound => "Not found",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::ValidationFailure, message)
    }
}

/// Where the controller draws the board.
///
/// `render` receives the complete note list in display order every time; a
/// view may diff, but must end up showing exactly these notes.
pub trait BoardView {
    fn render(&self, notes: &[Note], mode: SortMode);
    fn notify(&self, notice: Notice);
}
