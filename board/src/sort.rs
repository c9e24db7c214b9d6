//! Board ordering modes.

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

use crate::task::Task;

/// How the board orders its notes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// User-controlled order persisted as `position`. Notes are draggable.
    #[default]
    Manual,
    /// Ascending deadline, tasks without one last. Dragging is disabled.
    Deadline,
}

impl SortMode {
    /// Value of the `sort` query parameter for `GET /api/tasks`.
    #[must_use]
    pub fn query_value(self) -> &'static str {
        match self {
            Self::Manual => "position",
            Self::Deadline => "deadline",
        }
    }

    #[must_use]
    pub fn allows_drag(self) -> bool {
        matches!(self, Self::Manual)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Manual => Self::Deadline,
            Self::Deadline => Self::Manual,
        }
    }

    /// Bring a fetched task list into this mode's order.
    ///
    /// Manual order is whatever the backend returned. Deadline order is a
    /// stable sort, so a response the backend already sorted is unchanged.
    pub fn arrange(self, tasks: &mut [Task]) {
        if self == Self::Deadline {
            tasks.sort_by(|a, b| match (a.deadline, b.deadline) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            });
        }
    }
}
